use std::path::PathBuf;

use super::FileSystemFinder;
use crate::config::FinderConfigFile;
use crate::error::{FinderError, FinderResult};
use crate::file_types::FileTypeRegistry;

/// A single configuration step applied over the finder defaults.
///
/// Options are applied strictly in the order given. Each one overwrites the
/// setting it names; nothing is merged with the previous value.
#[derive(Debug, Clone)]
pub enum FinderOption {
    /// Replace the search roots. An empty list yields no results.
    Roots(Vec<PathBuf>),
    /// Replace the file type registry entirely.
    FileTypes(FileTypeRegistry),
    /// Replace the set of directory base names that are never descended into.
    ExcludeDirs(Vec<String>),
    /// Replace the set of extensions that are always rejected.
    ExcludeFileTypes(Vec<String>),
    /// Limit recursion below each root. `0` disables recursion.
    Depth(usize),
    /// `name:extension` overrides for extensionless files.
    AdditionalFiles(Vec<String>),
    /// Load settings from a YAML or TOML document.
    ConfigFile(PathBuf),
}

impl FinderOption {
    /// Apply this option to `finder`.
    ///
    /// Only [`FinderOption::ConfigFile`] can fail.
    pub fn apply(self, finder: &mut FileSystemFinder) -> FinderResult<()> {
        match self {
            FinderOption::Roots(roots) => finder.roots = roots,
            FinderOption::FileTypes(registry) => finder.file_types = registry,
            FinderOption::ExcludeDirs(names) => finder.exclude_dirs = names.into_iter().collect(),
            FinderOption::ExcludeFileTypes(extensions) => {
                finder.exclude_file_types = extensions.into_iter().collect();
            }
            FinderOption::Depth(depth) => finder.depth = Some(depth),
            FinderOption::AdditionalFiles(specs) => {
                // An empty list keeps whatever overrides are already set
                if !specs.is_empty() {
                    finder.additional_files = specs
                        .iter()
                        .filter_map(|spec| parse_additional_file(spec))
                        .collect();
                }
            }
            FinderOption::ConfigFile(path) => {
                let document = FinderConfigFile::load(&path).map_err(|source| {
                    FinderError::ConfigurationUnavailable {
                        path: path.clone(),
                        source,
                    }
                })?;
                document
                    .apply(finder)
                    .map_err(|source| FinderError::ConfigurationUnavailable { path, source })?;
            }
        }
        Ok(())
    }
}

/// Parse a `name:extension` spec.
///
/// Returns `None` unless the spec splits into exactly two colon-separated
/// parts. Malformed specs are meant to be dropped, not reported.
///
/// ```
/// use cfv_core::parse_additional_file;
///
/// assert_eq!(
///     parse_additional_file("Dockerfile:yaml"),
///     Some(("Dockerfile".to_string(), "yaml".to_string()))
/// );
/// assert_eq!(parse_additional_file("Dockerfile"), None);
/// assert_eq!(parse_additional_file("a:b:c"), None);
/// ```
pub fn parse_additional_file(spec: &str) -> Option<(String, String)> {
    let mut parts = spec.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(extension), None) => Some((name.to_string(), extension.to_string())),
        _ => None,
    }
}

/// Builder for constructing a [`FileSystemFinder`].
///
/// Uses the `&mut Self` return pattern for chaining. Every setter records a
/// [`FinderOption`]; `build()` applies them over the defaults in call order,
/// so a later setter overwrites an earlier one.
///
/// **Note:** `build()` drains the recorded options. A second call produces
/// a default finder.
///
/// # Examples
///
/// ```rust
/// use cfv_core::FileSystemFinder;
///
/// let finder = FileSystemFinder::builder()
///     .roots(["configs", "deploy"])
///     .exclude_dirs(["node_modules"])
///     .depth(3)
///     .build()
///     .expect("valid finder");
///
/// assert_eq!(finder.depth(), Some(3));
/// assert_eq!(finder.roots().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct FileSystemFinderBuilder {
    options: Vec<FinderOption>,
}

impl FileSystemFinderBuilder {
    /// Prefer [`FileSystemFinder::builder()`] over calling this directly.
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Set the search roots.
    pub fn roots<I, P>(&mut self, roots: I) -> &mut Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.option(FinderOption::Roots(roots.into_iter().map(Into::into).collect()))
    }

    /// Set the file type registry.
    pub fn file_types(&mut self, registry: FileTypeRegistry) -> &mut Self {
        self.option(FinderOption::FileTypes(registry))
    }

    /// Set the directory names to skip.
    pub fn exclude_dirs<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.option(FinderOption::ExcludeDirs(
            names.into_iter().map(Into::into).collect(),
        ))
    }

    /// Set the extensions to reject. Pass lower case to match case-insensitively.
    pub fn exclude_file_types<I, S>(&mut self, extensions: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.option(FinderOption::ExcludeFileTypes(
            extensions.into_iter().map(Into::into).collect(),
        ))
    }

    /// Set the recursion depth limit.
    pub fn depth(&mut self, depth: usize) -> &mut Self {
        self.option(FinderOption::Depth(depth))
    }

    /// Set `name:extension` overrides for extensionless files.
    pub fn additional_files<I, S>(&mut self, specs: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.option(FinderOption::AdditionalFiles(
            specs.into_iter().map(Into::into).collect(),
        ))
    }

    /// Load settings from a configuration document when the finder is built.
    pub fn config_file(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.option(FinderOption::ConfigFile(path.into()))
    }

    /// Record an arbitrary option.
    pub fn option(&mut self, option: FinderOption) -> &mut Self {
        self.options.push(option);
        self
    }

    /// Apply the recorded options over the defaults.
    ///
    /// Returns `Err(FinderError::ConfigurationUnavailable)` if a configuration
    /// document cannot be read or parsed.
    pub fn build(&mut self) -> FinderResult<FileSystemFinder> {
        FileSystemFinder::with_options(std::mem::take(&mut self.options))
    }
}
