//! Discovery result record.

use std::path::{Path, PathBuf};

use crate::file_types::FileType;

/// A discovered configuration file.
///
/// `path` is the root as given for a file root, otherwise the lexically
/// cleaned join of the root and the entry names. It is never canonicalised.
/// `name` is the base name, lossily converted when it is not valid UTF-8.
/// Records are never mutated after the finder creates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    pub name: String,
    pub path: PathBuf,
    pub file_type: FileType,
}

impl FileMetadata {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, file_type: FileType) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            file_type,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name of the matched file type.
    pub fn type_name(&self) -> &str {
        self.file_type.name()
    }
}
