//! File type descriptors and the registry the finder classifies against.
//!
//! This module provides:
//!
//! - [`FileType`] -- a named format, its extensions and its validator
//! - [`FileTypeRegistry`] -- ordered lookup of file types by extension
//!
//! ## Extending detection
//!
//! Build a [`FileTypeRegistry`] from your own [`FileType`] values and pass
//! it to [`FileSystemFinderBuilder::file_types`](crate::FileSystemFinderBuilder::file_types).
//! The supplied registry replaces the built-in one entirely.

mod registry;
mod types;

pub use registry::FileTypeRegistry;
pub use types::FileType;
