use crate::domain::{
    entities::{
        descriptor::TypeDescriptor,
        scaffold::Scaffold,
        source_tree::{SourceFile, SourceTree},
    },
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_scaffold(scaffold: &Scaffold, extension: &str) -> Result<(), DomainError> {
        scaffold.validate(extension)
    }

    pub fn validate_source_tree(tree: &SourceTree) -> Result<(), DomainError> {
        tree.validate()
    }

    /// A rendered file must land at the path its descriptor's fqn maps to.
    pub fn validate_rendered(
        descriptor: &TypeDescriptor,
        file: &SourceFile,
        extension: &str,
    ) -> Result<(), DomainError> {
        if &file.fqn != descriptor.fqn() {
            return Err(DomainError::InvalidValue(format!(
                "rendered {} for descriptor {}",
                file.fqn,
                descriptor.fqn()
            )));
        }

        let expected = descriptor.fqn().to_relative_path(extension);
        if file.path != expected {
            return Err(DomainError::InvalidValue(format!(
                "{} rendered to {}, expected {}",
                file.fqn, file.path, expected
            )));
        }

        Ok(())
    }
}
