//! Descriptor model and generation use case for Strata.
//!
//! `domain` turns an entity name into a [`domain::Scaffold`]: thirteen
//! [`domain::TypeDescriptor`]s laid out across the Domain, Application,
//! Infrastructure and Framework layers. `application` renders a scaffold
//! through the [`application::SourceRenderer`] port and writes the result
//! through the [`application::Filesystem`] port. Concrete adapters live in
//! `strata-adapters`; the `strata` binary wires them together.
//!
//! ```text
//! entity name ─▶ DescriptorFactory ─▶ Scaffold ─▶ SourceRenderer ─▶ SourceTree ─▶ Filesystem
//! ```
//!
//! ```rust,ignore
//! use strata_core::prelude::*;
//!
//! let scaffold = DescriptorFactory::new().build("Product")?;
//! let service = ScaffoldService::new(renderer, filesystem);
//! let report = service.generate(&scaffold, "./src".as_ref(), WriteOptions::default())?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

/// Everything a caller needs to build and generate a scaffold.
pub mod prelude {
    pub use crate::application::{
        FileStatus, GeneratedFile, GenerationReport, ScaffoldService, WriteOptions,
        ports::{Filesystem, SourceRenderer},
    };
    pub use crate::domain::{
        DescriptorFactory, EntityName, Fqn, Namespace, Scaffold, ScaffoldRole, SourceFile,
        SourceTree, TypeDescriptor, TypeKind, TypeRef,
    };
    pub use crate::error::{StrataError, StrataResult};
}
