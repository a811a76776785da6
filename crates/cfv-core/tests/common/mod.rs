//! Shared fixture tree for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Files created by [`fixture_tree`], relative to its root.
pub const FIXTURE_FILES: &[(&str, &str)] = &[
    ("good.json", "{\"name\": \"cfv\"}\n"),
    ("good.yaml", "name: cfv\n"),
    ("good.toml", "name = \"cfv\"\n"),
    ("notes.txt", "not a config file\n"),
    ("subdir/good.json", "{}\n"),
    ("subdir/good.yaml", "a: 1\n"),
    ("subdir/good.toml", "a = 1\n"),
    ("subdir/bad.yml", "key: [unclosed\n"),
    ("subdir/README", "plain text\n"),
    ("exclude-file-types/config.json", "{}\n"),
    ("exclude-file-types/config.yaml", "a: b\n"),
    ("with-depth/a/b/c/d/e/deep.json", "{}\n"),
    ("with-depth/a/b/c/d/e/deep.yaml", "deep: true\n"),
    ("uppercase-extension/GOOD.JSON", "{}\n"),
    ("mixedcase-extension/good.Yaml", "a: 1\n"),
    ("extensionless/Dockerfile", "base: alpine\n"),
    ("extensionless/Makefile", "all: build\n"),
    ("node_modules/pkg/package.json", "{}\n"),
];

/// Build the standard fixture tree in a fresh temporary directory.
pub fn fixture_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    for (rel, content) in FIXTURE_FILES {
        write(temp.path(), rel, content);
    }
    temp
}

pub fn write(root: &Path, rel: &str, content: &str) {
    let path = rel.split('/').fold(root.to_path_buf(), |acc, part| acc.join(part));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Base names of the given matches, in result order.
pub fn names(files: &[cfv_core::FileMetadata]) -> Vec<&str> {
    files.iter().map(|f| f.name.as_str()).collect()
}
