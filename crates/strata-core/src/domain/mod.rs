//! Core domain layer for Strata.
//!
//! Pure scaffolding logic: entity names in, type descriptors out. All I/O and
//! source rendering are handled via ports (traits) defined in the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: Descriptors are built once, then only read
//! - **Registry-driven**: The scaffold layout lives in [`blueprint::BLUEPRINT`]

pub mod blueprint;
pub mod entities;
pub mod error;
pub mod factory;
pub mod value_objects;

mod validation;

/// Extension of every generated source file.
pub const SOURCE_EXTENSION: &str = "php";

pub use blueprint::{BLUEPRINT, BaseType, RoleDef, ScaffoldRole};
pub use entities::{
    ConstructorParam, Fqn, Namespace, Scaffold, SourceFile, SourceTree, TypeDescriptor, TypeRef,
    common::RelativePath,
    fqn::split_fqn,
};
pub use error::{DomainError, ErrorCategory};
pub use factory::{DEFAULT_BASE_CONTROLLER, DescriptorFactory};
pub use validation::DomainValidator;
pub use value_objects::{EntityName, Layer, ParamModifier, TypeKind};

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(descriptor: &TypeDescriptor) -> SourceFile {
        SourceFile::new(
            descriptor.fqn().clone(),
            descriptor.fqn().to_relative_path(SOURCE_EXTENSION),
            "<?php\n".into(),
        )
    }

    #[test]
    fn factory_output_passes_validation() {
        let scaffold = DescriptorFactory::new().build("Product").unwrap();
        assert!(DomainValidator::validate_scaffold(&scaffold, SOURCE_EXTENSION).is_ok());

        let tree = scaffold
            .iter()
            .map(rendered)
            .fold(SourceTree::new("/srv/app/src"), SourceTree::with_file);
        assert_eq!(tree.file_count(), 13);
        assert!(DomainValidator::validate_source_tree(&tree).is_ok());
    }

    #[test]
    fn rendered_file_must_match_descriptor_path() {
        let scaffold = DescriptorFactory::new().build("Product").unwrap();
        let entity = scaffold.get(ScaffoldRole::Entity).unwrap();

        let good = rendered(entity);
        assert!(DomainValidator::validate_rendered(entity, &good, SOURCE_EXTENSION).is_ok());

        let misplaced = SourceFile {
            path: RelativePath::try_new("Domain/ProductEntity.php").unwrap(),
            ..good.clone()
        };
        assert!(DomainValidator::validate_rendered(entity, &misplaced, SOURCE_EXTENSION).is_err());

        let other = scaffold.get(ScaffoldRole::Model).unwrap();
        assert!(DomainValidator::validate_rendered(other, &good, SOURCE_EXTENSION).is_err());
    }

    #[test]
    fn every_layer_is_represented() {
        let scaffold = DescriptorFactory::new().build("Product").unwrap();
        for layer in Layer::ALL {
            assert!(
                scaffold
                    .iter()
                    .any(|d| d.fqn().segments().next() == Some(layer.as_str())),
                "no descriptor in {layer}"
            );
        }
    }

    #[test]
    fn split_fqn_is_reexported() {
        assert_eq!(
            split_fqn("Domain\\Product\\ProductEntity").unwrap().1,
            "ProductEntity"
        );
    }
}
