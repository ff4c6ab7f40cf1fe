use std::collections::HashSet;
use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;

use crate::domain::{
    entities::fqn::{Fqn, TypeRef},
    error::DomainError,
    value_objects::{ParamModifier, TypeKind},
};

/// One promoted constructor parameter: a dependency and its modifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ConstructorParam {
    pub dependency: TypeRef,
    pub modifier: ParamModifier,
}

impl ConstructorParam {
    pub fn new(dependency: TypeRef, modifier: ParamModifier) -> Self {
        Self {
            dependency,
            modifier,
        }
    }

    /// Variable name derived from the dependency's simple name, with the first
    /// character lower-cased (`InvoiceRepositoryInterface` →
    /// `invoiceRepositoryInterface`).
    pub fn param_name(&self) -> String {
        let name = self.dependency.simple_name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Immutable description of one generated source unit.
///
/// Built once through [`TypeDescriptor::class`] or
/// [`TypeDescriptor::interface`], then only read. Two descriptors are the
/// same descriptor iff they are structurally equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDescriptor {
    fqn: Fqn,
    kind: TypeKind,
    implements: Vec<TypeRef>,
    extends: Vec<TypeRef>,
    constructor_params: Vec<ConstructorParam>,
}

impl TypeDescriptor {
    pub fn class(fqn: Fqn) -> TypeDescriptorBuilder<ClassKind> {
        TypeDescriptorBuilder::new(fqn)
    }

    pub fn interface(fqn: Fqn) -> TypeDescriptorBuilder<InterfaceKind> {
        TypeDescriptorBuilder::new(fqn)
    }

    pub fn fqn(&self) -> &Fqn {
        &self.fqn
    }

    pub const fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn implements(&self) -> &[TypeRef] {
        &self.implements
    }

    pub fn extends(&self) -> &[TypeRef] {
        &self.extends
    }

    /// Always empty for interfaces.
    pub fn constructor_params(&self) -> &[ConstructorParam] {
        &self.constructor_params
    }

    pub fn simple_name(&self) -> &str {
        self.fqn.simple_name()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.fqn)?;

        let join = |refs: &[TypeRef]| {
            refs.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };

        if !self.extends.is_empty() {
            write!(f, " extends {}", join(&self.extends))?;
        }
        if !self.implements.is_empty() {
            write!(f, " implements {}", join(&self.implements))?;
        }
        Ok(())
    }
}

// ============================================================================
// Builder (typestate on the declaration kind)
// ============================================================================

pub struct ClassKind;
pub struct InterfaceKind;

/// Typestate builder. Only class builders can take `implements` and
/// constructor dependencies, so an interface with a constructor is
/// unrepresentable.
#[derive(Debug)]
pub struct TypeDescriptorBuilder<K> {
    fqn: Fqn,
    implements: Vec<TypeRef>,
    extends: Vec<TypeRef>,
    constructor_params: Vec<ConstructorParam>,
    _kind: PhantomData<K>,
}

impl<K> TypeDescriptorBuilder<K> {
    fn new(fqn: Fqn) -> Self {
        Self {
            fqn,
            implements: Vec::new(),
            extends: Vec::new(),
            constructor_params: Vec::new(),
            _kind: PhantomData,
        }
    }

    /// Add a base type. Interfaces may extend several.
    pub fn extends(mut self, base: TypeRef) -> Self {
        self.extends.push(base);
        self
    }

    fn finish(self, kind: TypeKind) -> Result<TypeDescriptor, DomainError> {
        let duplicate = first_duplicate(&self.extends)
            .or_else(|| first_duplicate(&self.implements))
            .or_else(|| {
                first_duplicate(self.constructor_params.iter().map(|p| &p.dependency))
            });

        if let Some(reference) = duplicate {
            return Err(DomainError::DuplicateReference {
                fqn: self.fqn.to_string(),
                reference: reference.to_string(),
            });
        }

        Ok(TypeDescriptor {
            fqn: self.fqn,
            kind,
            implements: self.implements,
            extends: self.extends,
            constructor_params: self.constructor_params,
        })
    }
}

fn first_duplicate<'a>(refs: impl IntoIterator<Item = &'a TypeRef>) -> Option<&'a TypeRef> {
    let mut seen = HashSet::new();
    refs.into_iter().find(|reference| !seen.insert(*reference))
}

impl TypeDescriptorBuilder<ClassKind> {
    pub fn implements(mut self, interface: TypeRef) -> Self {
        self.implements.push(interface);
        self
    }

    /// Inject a dependency through a promoted constructor parameter.
    pub fn inject(mut self, dependency: TypeRef, modifier: ParamModifier) -> Self {
        self.constructor_params
            .push(ConstructorParam::new(dependency, modifier));
        self
    }

    pub fn build(self) -> Result<TypeDescriptor, DomainError> {
        self.finish(TypeKind::Class)
    }
}

impl TypeDescriptorBuilder<InterfaceKind> {
    pub fn build(self) -> Result<TypeDescriptor, DomainError> {
        self.finish(TypeKind::Interface)
    }
}
