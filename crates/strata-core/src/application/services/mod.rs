//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate the scaffold for an entity".

pub mod scaffold_service;

pub use scaffold_service::{
    FileStatus, GeneratedFile, GenerationReport, ScaffoldService, WriteOptions,
};
