pub mod common;
pub mod descriptor;
pub mod fqn;
pub mod scaffold;
pub mod source_tree;

pub use crate::domain::DomainError;
pub use descriptor::{ConstructorParam, TypeDescriptor};
pub use fqn::{Fqn, Namespace, TypeRef};
pub use scaffold::Scaffold;
pub use source_tree::{SourceFile, SourceTree};
