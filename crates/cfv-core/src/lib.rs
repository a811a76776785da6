//! # cfv-core
//!
//! File discovery engine for configuration file validation.
//!
//! Discovers configuration files under one or more roots and classifies each
//! one by format:
//! - Recursive traversal with an optional per-root depth limit
//! - Directory-name and extension exclusion
//! - Case-insensitive extension matching against an ordered registry
//! - `name:extension` overrides for extensionless files
//! - Deduplication across roots by absolute path
//!
//! Validation of file contents is left to the [`Validator`] attached to each
//! matched [`FileType`].
//!
//! ```no_run
//! use cfv_core::FileSystemFinder;
//!
//! let finder = FileSystemFinder::builder()
//!     .roots(["."])
//!     .exclude_dirs([".git", "target"])
//!     .build()?;
//!
//! for file in finder.discover()? {
//!     let content = std::fs::read(&file.path).expect("readable file");
//!     if let Err(e) = file.file_type.validator().validate(&content) {
//!         eprintln!("{}: {e}", file.path.display());
//!     }
//! }
//! # Ok::<(), cfv_core::FinderError>(())
//! ```

pub mod config;
pub mod error;
pub mod file_types;
pub mod finder;
pub mod metadata;
pub mod validators;

pub use config::FinderConfigFile;
pub use error::{
    ConfigLoadError, FinderError, FinderResult, UnknownFileTypeError, ValidationError,
};
pub use file_types::{FileType, FileTypeRegistry};
pub use finder::{FileSystemFinder, FileSystemFinderBuilder, FinderOption, parse_additional_file};
pub use metadata::FileMetadata;
pub use validators::{JsonValidator, TomlValidator, Validator, ValidatorFactory, YamlValidator};
