use std::collections::HashSet;

use serde::Serialize;

use crate::domain::{
    blueprint::ScaffoldRole,
    entities::descriptor::TypeDescriptor,
    error::DomainError,
    value_objects::EntityName,
};

/// The ordered set of descriptors generated for one entity.
///
/// Produced whole by the descriptor factory; there is no way to obtain a
/// partially built scaffold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scaffold {
    entity: EntityName,
    descriptors: Vec<TypeDescriptor>,
}

impl Scaffold {
    pub(crate) fn new(entity: EntityName, descriptors: Vec<TypeDescriptor>) -> Self {
        Self {
            entity,
            descriptors,
        }
    }

    pub fn entity(&self) -> &EntityName {
        &self.entity
    }

    pub fn descriptors(&self) -> &[TypeDescriptor] {
        &self.descriptors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TypeDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Descriptor generated for `role`.
    pub fn get(&self, role: ScaffoldRole) -> Option<&TypeDescriptor> {
        let fqn = role.fqn_for(&self.entity);
        self.descriptors
            .iter()
            .find(|d| d.fqn().as_str() == fqn)
    }

    /// Check the scaffold invariants: non-empty, one descriptor per fqn and
    /// one descriptor per output path.
    pub fn validate(&self, extension: &str) -> Result<(), DomainError> {
        if self.descriptors.is_empty() {
            return Err(DomainError::EmptyScaffold);
        }

        let mut fqns = HashSet::new();
        let mut paths = HashSet::new();
        for descriptor in &self.descriptors {
            if !fqns.insert(descriptor.fqn()) {
                return Err(DomainError::DuplicateType {
                    fqn: descriptor.fqn().to_string(),
                });
            }

            let path = descriptor.fqn().to_relative_path(extension);
            // Case-insensitive filesystems would merge these.
            if !paths.insert(path.to_string().to_lowercase()) {
                return Err(DomainError::DuplicatePath {
                    path: path.to_string(),
                });
            }
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a Scaffold {
    type Item = &'a TypeDescriptor;
    type IntoIter = std::slice::Iter<'a, TypeDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.iter()
    }
}

impl IntoIterator for Scaffold {
    type Item = TypeDescriptor;
    type IntoIter = std::vec::IntoIter<TypeDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::fqn::Fqn;

    fn class(raw: &str) -> TypeDescriptor {
        TypeDescriptor::class(Fqn::parse(raw).unwrap())
            .build()
            .unwrap()
    }

    fn entity() -> EntityName {
        EntityName::parse("Product").unwrap()
    }

    #[test]
    fn empty_scaffold_is_invalid() {
        let scaffold = Scaffold::new(entity(), Vec::new());
        assert_eq!(scaffold.validate("php"), Err(DomainError::EmptyScaffold));
    }

    #[test]
    fn duplicate_fqn_is_invalid() {
        let scaffold = Scaffold::new(
            entity(),
            vec![
                class("Domain.Product.ProductEntity"),
                class("Domain\\Product\\ProductEntity"),
            ],
        );
        assert!(matches!(
            scaffold.validate("php"),
            Err(DomainError::DuplicateType { .. })
        ));
    }

    #[test]
    fn case_colliding_paths_are_invalid() {
        let scaffold = Scaffold::new(
            entity(),
            vec![
                class("Domain.Product.ProductEntity"),
                class("Domain.Product.Productentity"),
            ],
        );
        assert!(matches!(
            scaffold.validate("php"),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn get_finds_descriptor_by_role() {
        let scaffold = Scaffold::new(entity(), vec![class("Domain.Product.ProductEntity")]);
        assert!(scaffold.get(ScaffoldRole::Entity).is_some());
        assert!(scaffold.get(ScaffoldRole::Model).is_none());
    }
}
