//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `strata-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{Fqn, SourceFile, TypeDescriptor};
use crate::error::StrataResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `strata_adapters::filesystem::LocalFilesystem` (production)
/// - `strata_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> StrataResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> StrataResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> StrataResult<()>;

    /// Remove a directory. Fails if it is not empty.
    fn remove_dir(&self, path: &Path) -> StrataResult<()>;
}

/// Port for turning one descriptor into source text.
///
/// Implemented by:
/// - `strata_adapters::renderer::PhpRenderer`
pub trait SourceRenderer: Send + Sync {
    /// File extension of the rendered sources, without the dot.
    fn extension(&self) -> &str;

    /// Fully-qualified name as it appears in the target language, resolved
    /// under the renderer's root namespace.
    fn class_name(&self, fqn: &Fqn) -> String;

    /// Render `descriptor` into a source file whose path is relative to the
    /// source root. Pure: never touches the filesystem.
    fn render(&self, descriptor: &TypeDescriptor) -> StrataResult<SourceFile>;
}
