//! Infrastructure adapters for Strata.
//!
//! This crate implements the ports defined in `strata-core::application::ports`.
//! It contains all I/O and target-language rendering.

pub mod filesystem;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::PhpRenderer;
