//! FileType descriptor.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::validators::Validator;

/// A recognised configuration format.
///
/// Pairs a format name with the file extensions that identify it and the
/// validator capable of checking its syntax. Extensions are stored lower
/// case and compared case-insensitively.
///
/// Cloning is cheap: the validator is shared behind an [`Arc`].
#[derive(Clone)]
pub struct FileType {
    name: String,
    extensions: BTreeSet<String>,
    validator: Arc<dyn Validator>,
}

impl FileType {
    /// Create a file type. Extensions are lower-cased; duplicates collapse.
    pub fn new<I, S>(name: impl Into<String>, extensions: I, validator: Arc<dyn Validator>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: name.into(),
            extensions: extensions
                .into_iter()
                .map(|ext| ext.as_ref().to_lowercase())
                .collect(),
            validator,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extensions(&self) -> &BTreeSet<String> {
        &self.extensions
    }

    /// The syntax validator for this format.
    pub fn validator(&self) -> &dyn Validator {
        self.validator.as_ref()
    }

    /// Returns `true` if `extension` (without the leading dot) belongs to
    /// this type, ignoring case.
    #[must_use]
    pub fn matches_extension(&self, extension: &str) -> bool {
        self.extensions.contains(&extension.to_lowercase())
    }
}

impl fmt::Debug for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileType")
            .field("name", &self.name)
            .field("extensions", &self.extensions)
            .field("validator", &self.validator.name())
            .finish()
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Two file types are equal when their name and extensions match. The
/// validator is an opaque capability and does not take part.
impl PartialEq for FileType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.extensions == other.extensions
    }
}

impl Eq for FileType {}
