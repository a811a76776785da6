//! External configuration document for the finder.
//!
//! A document names any subset of the finder settings:
//!
//! ```yaml
//! roots: [./configs]
//! exclude-dirs: [node_modules, .git]
//! exclude-file-types: [json]
//! file-types: [yaml, toml]
//! depth: 3
//! additional-files: ["Dockerfile:yaml"]
//! ```
//!
//! YAML is the default format; paths ending in `.toml` are read as TOML with
//! the same keys. Unknown keys are rejected so that a typo cannot silently
//! change which files get validated. Relative roots are kept as written and
//! therefore resolve against the working directory, not the document.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigLoadError;
use crate::finder::{FileSystemFinder, parse_additional_file};

/// Parsed configuration document. Absent keys leave the finder untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FinderConfigFile {
    pub roots: Option<Vec<PathBuf>>,
    pub exclude_dirs: Option<Vec<String>>,
    pub exclude_file_types: Option<Vec<String>>,
    /// Names of file types to keep from the registry in effect.
    pub file_types: Option<Vec<String>>,
    pub depth: Option<usize>,
    pub additional_files: Option<Vec<String>>,
}

impl FinderConfigFile {
    /// Read and parse a configuration document.
    ///
    /// A missing or unreadable file, a malformed document and a document
    /// that sets no key at all are all errors.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(ConfigLoadError::Read)?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        let document = if is_toml {
            Self::from_toml_str(&content)?
        } else {
            Self::from_yaml_str(&content)?
        };

        if document == Self::default() {
            return Err(ConfigLoadError::Empty);
        }
        tracing::debug!(path = %path.display(), "loaded finder configuration");
        Ok(document)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(content).map_err(ConfigLoadError::Yaml)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigLoadError> {
        toml::from_str(content).map_err(ConfigLoadError::Toml)
    }

    /// Overwrite the finder settings named by this document.
    ///
    /// `file-types` narrows the registry currently set on the finder; an
    /// unknown name is an error and leaves the finder unchanged.
    pub fn apply(&self, finder: &mut FileSystemFinder) -> Result<(), ConfigLoadError> {
        if let Some(names) = &self.file_types {
            finder.file_types = finder
                .file_types
                .retain_names(names)
                .map_err(ConfigLoadError::UnknownFileType)?;
        }
        if let Some(roots) = &self.roots {
            finder.roots = roots.clone();
        }
        if let Some(names) = &self.exclude_dirs {
            finder.exclude_dirs = names.iter().cloned().collect();
        }
        if let Some(extensions) = &self.exclude_file_types {
            finder.exclude_file_types = extensions.iter().cloned().collect();
        }
        if let Some(depth) = self.depth {
            finder.depth = Some(depth);
        }
        if let Some(specs) = self.additional_files.as_ref().filter(|specs| !specs.is_empty()) {
            finder.additional_files = specs
                .iter()
                .filter_map(|spec| parse_additional_file(spec))
                .collect();
        }
        Ok(())
    }
}
