//! Filesystem discovery of configuration files.
//!
//! [`FileSystemFinder`] walks each configured root depth-first, skips
//! excluded directories and extensions, classifies files against a
//! [`FileTypeRegistry`] and deduplicates matches across roots by absolute
//! path.

mod options;
mod paths;

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::{FinderError, FinderResult};
use crate::file_types::FileTypeRegistry;
use crate::metadata::FileMetadata;

pub use options::{FileSystemFinderBuilder, FinderOption, parse_additional_file};

/// Discovery configuration and engine.
///
/// Construct with [`FileSystemFinder::builder`] or
/// [`FileSystemFinder::with_options`]; the finder is not modified by
/// discovery and can be reused.
///
/// # Example
///
/// ```no_run
/// use cfv_core::FileSystemFinder;
///
/// let finder = FileSystemFinder::builder()
///     .roots(["configs"])
///     .exclude_dirs([".git", "node_modules"])
///     .build()?;
///
/// for file in finder.discover()? {
///     println!("{} ({})", file.path.display(), file.type_name());
/// }
/// # Ok::<(), cfv_core::FinderError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSystemFinder {
    pub(crate) roots: Vec<PathBuf>,
    pub(crate) file_types: FileTypeRegistry,
    pub(crate) exclude_dirs: HashSet<String>,
    pub(crate) exclude_file_types: HashSet<String>,
    pub(crate) depth: Option<usize>,
    pub(crate) additional_files: HashMap<String, String>,
}

impl Default for FileSystemFinder {
    fn default() -> Self {
        Self {
            roots: vec![PathBuf::from(".")],
            file_types: FileTypeRegistry::builtin(),
            exclude_dirs: HashSet::new(),
            exclude_file_types: HashSet::new(),
            depth: None,
            additional_files: HashMap::new(),
        }
    }
}

impl FileSystemFinder {
    /// Create a new [`FileSystemFinderBuilder`].
    pub fn builder() -> FileSystemFinderBuilder {
        FileSystemFinderBuilder::new()
    }

    /// Apply `options` in order over the defaults.
    pub fn with_options<I>(options: I) -> FinderResult<Self>
    where
        I: IntoIterator<Item = FinderOption>,
    {
        let mut finder = Self::default();
        for option in options {
            option.apply(&mut finder)?;
        }
        Ok(finder)
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    pub fn file_types(&self) -> &FileTypeRegistry {
        &self.file_types
    }

    pub fn exclude_dirs(&self) -> &HashSet<String> {
        &self.exclude_dirs
    }

    pub fn exclude_file_types(&self) -> &HashSet<String> {
        &self.exclude_file_types
    }

    /// Recursion limit below each root; `None` means unlimited.
    pub fn depth(&self) -> Option<usize> {
        self.depth
    }

    pub fn additional_files(&self) -> &HashMap<String, String> {
        &self.additional_files
    }

    /// Discover matching files under every root.
    ///
    /// Roots are walked in order. The first failing root aborts discovery and
    /// no results are returned. A file reached more than once (the same root
    /// listed twice, overlapping roots, relative and absolute spellings) is
    /// reported only at its first occurrence.
    pub fn discover(&self) -> FinderResult<Vec<FileMetadata>> {
        let mut seen = HashSet::new();
        let mut unique_matches = Vec::new();

        for root in &self.roots {
            for matched in self.traverse(root)? {
                let absolute = paths::absolute_path(&matched.path).map_err(|source| {
                    FinderError::PathResolution {
                        path: matched.path.clone(),
                        source,
                    }
                })?;
                if seen.insert(absolute) {
                    unique_matches.push(matched);
                }
            }
        }

        tracing::debug!(
            roots = self.roots.len(),
            matches = unique_matches.len(),
            "discovery finished"
        );
        Ok(unique_matches)
    }

    /// Walk a single root and return its matches in walk order.
    ///
    /// The root must exist. Entries below the root are reported with their
    /// lexically cleaned path, so root `.` yields `sub/a.json` rather than
    /// `./sub/a.json`. When a depth limit is set, directories whose cleaned
    /// path holds more separators than the root's literal count plus the
    /// limit are skipped along with their subtree.
    pub fn traverse(&self, root: &Path) -> FinderResult<Vec<FileMetadata>> {
        // Stat first so a missing root gets a clear error instead of a walk failure
        if let Err(e) = std::fs::metadata(root)
            && e.kind() == std::io::ErrorKind::NotFound
        {
            return Err(FinderError::RootNotFound {
                root: root.to_path_buf(),
            });
        }

        let max_depth = paths::separator_count(root) + self.depth.unwrap_or(0);
        tracing::debug!(root = %root.display(), depth = ?self.depth, max_depth, "walking root");

        let mut matches = Vec::new();
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.prune_dir(entry, max_depth));

        for entry in walker {
            let entry = entry.map_err(|source| FinderError::Walk {
                root: root.to_path_buf(),
                source,
            })?;
            if entry.file_type().is_dir() {
                continue;
            }
            if let Some(matched) = self.classify(&entry, &walk_path(&entry)) {
                matches.push(matched);
            }
        }

        Ok(matches)
    }

    /// Returns `true` for directories that must not be descended into.
    fn prune_dir(&self, entry: &DirEntry, max_depth: usize) -> bool {
        if !entry.file_type().is_dir() {
            return false;
        }
        let excluded = entry
            .file_name()
            .to_str()
            .is_some_and(|name| self.exclude_dirs.contains(name));
        let too_deep =
            self.depth.is_some() && paths::separator_count(&walk_path(entry)) > max_depth;
        excluded || too_deep
    }

    /// Match a file entry against the exclusions and the registry.
    ///
    /// Names that are not valid UTF-8 are matched and reported in their lossy
    /// form (invalid bytes become U+FFFD); `path` keeps the exact bytes.
    fn classify(&self, entry: &DirEntry, path: &Path) -> Option<FileMetadata> {
        let name = entry.file_name().to_string_lossy();

        let mut extension = paths::walk_extension(&name);
        if extension.is_empty()
            && let Some(mapped) = self.additional_files.get(&*name)
        {
            extension = mapped.as_str();
        }

        // Exclusions compare the raw extension, before lower-casing
        if self.exclude_file_types.contains(extension) {
            tracing::trace!(path = %path.display(), extension, "excluded file type");
            return None;
        }

        let file_type = self.file_types.lookup(extension)?;
        tracing::trace!(path = %path.display(), file_type = %file_type, "matched");
        Some(FileMetadata::new(name.into_owned(), path, file_type.clone()))
    }
}

/// Path of a walk entry as reported to callers.
///
/// The root keeps its text as given (a trailing separator still counts
/// towards the depth budget). Everything below it is cleaned, matching a
/// walker that joins each child name onto its cleaned parent.
fn walk_path(entry: &DirEntry) -> Cow<'_, Path> {
    if entry.depth() == 0 {
        Cow::Borrowed(entry.path())
    } else {
        Cow::Owned(paths::clean_path(entry.path()))
    }
}
