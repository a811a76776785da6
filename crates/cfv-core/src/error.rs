//! Error types for discovery, configuration loading and validation

use std::path::PathBuf;
use thiserror::Error;

pub type FinderResult<T> = Result<T, FinderError>;

/// Discovery errors
///
/// Every variant aborts the operation that produced it. Discovery never
/// returns partial results alongside an error.
#[derive(Error, Debug)]
pub enum FinderError {
    #[error("Search root does not exist: {root}")]
    RootNotFound { root: PathBuf },

    #[error("Failed to walk {root}")]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to resolve absolute path: {path}")]
    PathResolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration file unavailable: {path}")]
    ConfigurationUnavailable {
        path: PathBuf,
        #[source]
        source: ConfigLoadError,
    },
}

/// Reasons an external configuration document could not be used
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("failed to read configuration file")]
    Read(#[source] std::io::Error),

    #[error("malformed YAML configuration")]
    Yaml(#[source] serde_yaml::Error),

    #[error("malformed TOML configuration")]
    Toml(#[source] toml::de::Error),

    #[error(transparent)]
    UnknownFileType(#[from] UnknownFileTypeError),

    #[error("configuration document sets no options")]
    Empty,
}

/// A file type name that the registry in effect does not contain
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown file type '{name}'")]
pub struct UnknownFileTypeError {
    pub name: String,
}

/// Syntax validation failure reported by a [`Validator`](crate::Validator)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid {format}: {message}")]
    Syntax {
        format: &'static str,
        message: String,
    },

    #[error("{format} content is not valid UTF-8")]
    Encoding { format: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_root_not_found_message_names_root() {
        let err = FinderError::RootNotFound {
            root: PathBuf::from("/bad/path"),
        };
        assert_eq!(err.to_string(), "Search root does not exist: /bad/path");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_configuration_unavailable_keeps_source_chain() {
        let err = FinderError::ConfigurationUnavailable {
            path: PathBuf::from("cfv.yaml"),
            source: ConfigLoadError::UnknownFileType(UnknownFileTypeError {
                name: "ini".to_string(),
            }),
        };

        let source = err.source().expect("source should be attached");
        assert_eq!(source.to_string(), "unknown file type 'ini'");
    }

    #[test]
    fn test_path_resolution_wraps_io_error() {
        let err = FinderError::PathResolution {
            path: PathBuf::from("a.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "cwd gone"),
        };
        assert!(err.to_string().contains("a.json"));
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("cwd gone"));
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::Syntax {
            format: "json",
            message: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid json: expected value at line 1 column 1"
        );

        let err = ValidationError::Encoding { format: "toml" };
        assert_eq!(err.to_string(), "toml content is not valid UTF-8");
    }
}
