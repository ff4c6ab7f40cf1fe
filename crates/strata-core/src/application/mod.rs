//! Application layer for Strata.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (`ScaffoldService`)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{FileStatus, GeneratedFile, GenerationReport, ScaffoldService, WriteOptions};

pub use ports::{Filesystem, SourceRenderer};

pub use error::ApplicationError;
