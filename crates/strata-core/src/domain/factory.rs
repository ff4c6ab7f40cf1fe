//! Descriptor factory: entity name in, complete scaffold out.

use tracing::{debug, instrument};

use crate::domain::{
    blueprint::{BLUEPRINT, BaseType, RoleDef, ScaffoldRole},
    entities::{
        descriptor::TypeDescriptor,
        fqn::{Fqn, TypeRef},
        scaffold::Scaffold,
    },
    error::DomainError,
    value_objects::{EntityName, TypeKind},
    SOURCE_EXTENSION,
};

/// Symfony's controller base class.
pub const DEFAULT_BASE_CONTROLLER: &str =
    "Symfony\\Bundle\\FrameworkBundle\\Controller\\AbstractController";

/// Builds the descriptors of a scaffold from the blueprint registry.
///
/// Pure: the only inputs are the entity name and the immutable options set
/// at construction.
#[derive(Debug, Clone)]
pub struct DescriptorFactory {
    base_controller: TypeRef,
}

impl DescriptorFactory {
    pub fn new() -> Self {
        Self {
            base_controller: TypeRef::External(Fqn::new_unchecked(DEFAULT_BASE_CONTROLLER)),
        }
    }

    /// Use a different controller base class.
    pub fn with_base_controller(base_controller: &str) -> Result<Self, DomainError> {
        Ok(Self {
            base_controller: TypeRef::external(base_controller)?,
        })
    }

    pub fn base_controller(&self) -> &TypeRef {
        &self.base_controller
    }

    /// Build the 13 descriptors for `entity_name`, in blueprint order.
    ///
    /// All-or-nothing: the name is validated before any descriptor exists,
    /// and the finished scaffold is checked for duplicate types and paths.
    #[instrument(skip(self))]
    pub fn build(&self, entity_name: &str) -> Result<Scaffold, DomainError> {
        let entity = EntityName::parse(entity_name)?;

        let descriptors = BLUEPRINT
            .iter()
            .map(|def| self.describe(def, &entity))
            .collect::<Result<Vec<_>, _>>()?;

        let scaffold = Scaffold::new(entity, descriptors);
        scaffold.validate(SOURCE_EXTENSION)?;

        debug!(count = scaffold.len(), "Scaffold descriptors built");
        Ok(scaffold)
    }

    fn describe(&self, def: &RoleDef, entity: &EntityName) -> Result<TypeDescriptor, DomainError> {
        let fqn = Fqn::parse(&def.fqn_for(entity))?;
        let project_ref = |role: ScaffoldRole| TypeRef::project(&role.fqn_for(entity));

        match def.kind {
            TypeKind::Class => {
                let mut builder = TypeDescriptor::class(fqn);
                for base in def.extends {
                    builder = builder.extends(self.resolve_base(*base));
                }
                for role in def.implements {
                    builder = builder.implements(project_ref(*role)?);
                }
                for (role, modifier) in def.injects {
                    builder = builder.inject(project_ref(*role)?, *modifier);
                }
                builder.build()
            }
            TypeKind::Interface => {
                let mut builder = TypeDescriptor::interface(fqn);
                for base in def.extends {
                    builder = builder.extends(self.resolve_base(*base));
                }
                builder.build()
            }
        }
    }

    fn resolve_base(&self, base: BaseType) -> TypeRef {
        match base {
            BaseType::PlatformController => self.base_controller.clone(),
        }
    }
}

impl Default for DescriptorFactory {
    fn default() -> Self {
        Self::new()
    }
}
