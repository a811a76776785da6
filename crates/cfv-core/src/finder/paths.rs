//! Path string helpers used by the traversal policy.

use std::io;
use std::path::{Component, MAIN_SEPARATOR, Path, PathBuf};

/// Count path separators in the literal path string.
///
/// Depth budgets are measured with this count, so `"a/b/"` and `"a/b"`
/// differ by one. Callers rely on that.
pub(crate) fn separator_count(path: &Path) -> usize {
    path.to_string_lossy()
        .chars()
        .filter(|&c| c == MAIN_SEPARATOR)
        .count()
}

/// Text after the last `.` of a file name, or `""` when there is no dot.
///
/// Dotfiles keep their name as extension (`.env` -> `env`), a trailing dot
/// yields an empty extension.
pub(crate) fn walk_extension(file_name: &str) -> &str {
    file_name
        .rfind('.')
        .map_or("", |idx| &file_name[idx + 1..])
}

/// Absolute, lexically normalised form of `path`.
///
/// `.` and `..` components are folded without touching the filesystem, so
/// symlinks are not resolved. This is the identity used for deduplication.
pub(crate) fn absolute_path(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    Ok(clean_path(&absolute))
}

/// Lexically cleaned form of `path`.
///
/// Drops `.` components and redundant separators and folds `name/..` pairs.
/// Leading `..` of a relative path are kept. A trailing separator is dropped,
/// so callers that must preserve the literal root text should not clean it.
pub(crate) fn clean_path(path: &Path) -> PathBuf {
    let mut components: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                // Cannot traverse above root or prefix
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            _ => components.push(component),
        }
    }
    components.iter().collect()
}
