//! Syntax validators attached to file types.
//!
//! The discovery engine never calls a validator itself. Each [`FileType`](crate::FileType)
//! carries one so that downstream consumers can dispatch the content of a
//! discovered file to the right syntax check.

use serde::Deserialize;

use crate::error::ValidationError;

/// Extract the short (unqualified) type name from `std::any::type_name`.
///
/// Given `"cfv_core::validators::JsonValidator"`, returns `"JsonValidator"`.
/// Generic suffixes are stripped first.
fn short_type_name<T: ?Sized + 'static>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Content validation capability for a file format.
///
/// The trait is object-safe so validators can be shared between
/// [`FileType`](crate::FileType) clones as `Arc<dyn Validator>`.
pub trait Validator: Send + Sync + 'static {
    /// Check that `content` is syntactically valid for this format.
    fn validate(&self, content: &[u8]) -> Result<(), ValidationError>;

    /// Return a short, human-readable name for this validator.
    ///
    /// The default implementation extracts the unqualified struct name
    /// (e.g., `"JsonValidator"`).
    fn name(&self) -> &'static str {
        short_type_name::<Self>()
    }
}

/// Factory function type that creates validator instances.
pub type ValidatorFactory = fn() -> Box<dyn Validator>;

/// JSON syntax validator backed by `serde_json`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonValidator;

impl Validator for JsonValidator {
    fn validate(&self, content: &[u8]) -> Result<(), ValidationError> {
        serde_json::from_slice::<serde::de::IgnoredAny>(content)
            .map(|_| ())
            .map_err(|e| ValidationError::Syntax {
                format: "json",
                message: e.to_string(),
            })
    }
}

/// YAML syntax validator backed by `serde_yaml`.
///
/// Multi-document streams are accepted; every document must parse.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlValidator;

impl Validator for YamlValidator {
    fn validate(&self, content: &[u8]) -> Result<(), ValidationError> {
        for document in serde_yaml::Deserializer::from_slice(content) {
            serde_yaml::Value::deserialize(document).map_err(|e| ValidationError::Syntax {
                format: "yaml",
                message: e.to_string(),
            })?;
        }
        Ok(())
    }
}

/// TOML syntax validator backed by `toml`
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlValidator;

impl Validator for TomlValidator {
    fn validate(&self, content: &[u8]) -> Result<(), ValidationError> {
        let text =
            std::str::from_utf8(content).map_err(|_| ValidationError::Encoding { format: "toml" })?;
        toml::from_str::<toml::Table>(text)
            .map(|_| ())
            .map_err(|e| ValidationError::Syntax {
                format: "toml",
                message: e.message().to_string(),
            })
    }
}
