//! Ordered registry of recognised file types.

use std::sync::Arc;

use super::types::FileType;
use crate::error::UnknownFileTypeError;
use crate::validators::{JsonValidator, TomlValidator, Validator, ValidatorFactory, YamlValidator};

/// Built-in file types: `(name, extensions, validator factory)`.
///
/// Order matters when two entries claim the same extension: the first one
/// wins during lookup.
const DEFAULTS: &[(&str, &[&str], ValidatorFactory)] = &[
    ("json", &["json"], json_validator),
    ("yaml", &["yml", "yaml"], yaml_validator),
    ("toml", &["toml"], toml_validator),
];

fn json_validator() -> Box<dyn Validator> {
    Box::new(JsonValidator)
}

fn yaml_validator() -> Box<dyn Validator> {
    Box::new(YamlValidator)
}

fn toml_validator() -> Box<dyn Validator> {
    Box::new(TomlValidator)
}

/// Ordered collection of [`FileType`] descriptors.
///
/// The registry is a pure lookup structure. It performs no validation of its
/// own: empty extension sets and duplicate names are accepted, they simply
/// never match or are shadowed by an earlier entry.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use cfv_core::{FileType, FileTypeRegistry, JsonValidator};
///
/// let registry = FileTypeRegistry::new(vec![
///     FileType::new("json", ["json"], Arc::new(JsonValidator)),
/// ]);
///
/// assert_eq!(registry.lookup("JSON").map(|ft| ft.name()), Some("json"));
/// assert!(registry.lookup("yaml").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTypeRegistry {
    types: Vec<FileType>,
}

impl FileTypeRegistry {
    /// Create a registry from file types, preserving their order.
    pub fn new(types: Vec<FileType>) -> Self {
        Self { types }
    }

    /// Create the built-in registry (json, yaml, toml).
    pub fn builtin() -> Self {
        let types = DEFAULTS
            .iter()
            .map(|&(name, extensions, factory)| {
                let validator: Arc<dyn Validator> = Arc::from(factory());
                FileType::new(name, extensions, validator)
            })
            .collect();
        Self { types }
    }

    /// Find the first file type claiming `extension`, ignoring case.
    pub fn lookup(&self, extension: &str) -> Option<&FileType> {
        self.types.iter().find(|ft| ft.matches_extension(extension))
    }

    /// Find a file type by its exact name.
    pub fn get(&self, name: &str) -> Option<&FileType> {
        self.types.iter().find(|ft| ft.name() == name)
    }

    /// Narrow the registry to the named types, keeping registry order.
    ///
    /// Fails on the first name that does not exist in the registry.
    pub fn retain_names<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<Self, UnknownFileTypeError> {
        if let Some(unknown) = names
            .iter()
            .map(AsRef::as_ref)
            .find(|name| self.get(name).is_none())
        {
            return Err(UnknownFileTypeError {
                name: unknown.to_string(),
            });
        }

        let types = self
            .types
            .iter()
            .filter(|ft| names.iter().any(|name| name.as_ref() == ft.name()))
            .cloned()
            .collect();
        Ok(Self { types })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileType> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for FileTypeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl From<Vec<FileType>> for FileTypeRegistry {
    fn from(types: Vec<FileType>) -> Self {
        Self::new(types)
    }
}

impl<'a> IntoIterator for &'a FileTypeRegistry {
    type Item = &'a FileType;
    type IntoIter = std::slice::Iter<'a, FileType>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.iter()
    }
}
