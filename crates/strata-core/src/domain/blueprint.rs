//! Scaffold blueprint registry.
//!
//! Every generated type is described exactly once by a [`RoleDef`]: the
//! layer it belongs to, its declaration kind, its name template and the
//! other roles it points at. The factory walks [`BLUEPRINT`] in order; no
//! `match` arms elsewhere know which files a scaffold contains.
//!
//! # Adding a New Role
//!
//! 1. Add a variant to [`ScaffoldRole`] and its `as_str` arm
//! 2. Add one [`RoleDef`] entry to [`BLUEPRINT`]
//! 3. Ordering and uniqueness are enforced by tests

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    value_objects::{EntityName, Layer, ParamModifier, TypeKind},
};

/// Placeholder replaced by the entity name in [`RoleDef::pattern`].
pub const ENTITY_PLACEHOLDER: &str = "{E}";

/// Role of one generated type inside a scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScaffoldRole {
    Entity,
    RepositoryInterface,
    Model,
    FinderInterface,
    CreateCommand,
    UpdateCommand,
    CreateCommandHandler,
    UpdateCommandHandler,
    DbalFinder,
    DbalRepository,
    Controller,
    CreateForm,
    UpdateForm,
}

impl ScaffoldRole {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::RepositoryInterface => "repository-interface",
            Self::Model => "model",
            Self::FinderInterface => "finder-interface",
            Self::CreateCommand => "create-command",
            Self::UpdateCommand => "update-command",
            Self::CreateCommandHandler => "create-command-handler",
            Self::UpdateCommandHandler => "update-command-handler",
            Self::DbalFinder => "dbal-finder",
            Self::DbalRepository => "dbal-repository",
            Self::Controller => "controller",
            Self::CreateForm => "create-form",
            Self::UpdateForm => "update-form",
        }
    }

    /// Registry entry for this role.
    pub fn def(self) -> &'static RoleDef {
        // Variant order is registry order; `blueprint_covers_every_role_once`
        // guards this.
        &BLUEPRINT[self as usize]
    }

    /// Fqn text for this role and entity (`.`-free, `\`-separated).
    pub fn fqn_for(self, entity: &EntityName) -> String {
        self.def().fqn_for(entity)
    }
}

impl fmt::Display for ScaffoldRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScaffoldRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase().replace('_', "-");
        BLUEPRINT
            .iter()
            .map(|def| def.role)
            .find(|role| role.as_str() == wanted)
            .ok_or_else(|| DomainError::InvalidValue(format!("unknown scaffold role: {s}")))
    }
}

/// Base type a role extends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseType {
    /// The platform's base controller, configured on the factory.
    PlatformController,
}

/// Everything the factory needs to know about one generated type.
#[derive(Debug, Clone, Copy)]
pub struct RoleDef {
    pub role: ScaffoldRole,
    pub layer: Layer,
    pub kind: TypeKind,

    /// Name template below the layer segment, `{E}` standing for the entity.
    pub pattern: &'static str,

    /// Roles whose types this one implements.
    pub implements: &'static [ScaffoldRole],

    /// Base types this one extends.
    pub extends: &'static [BaseType],

    /// Roles injected through the constructor.
    pub injects: &'static [(ScaffoldRole, ParamModifier)],
}

impl RoleDef {
    /// Full pattern including the layer, e.g. `Domain\{E}\{E}Entity`.
    pub fn full_pattern(&self) -> String {
        format!("{}\\{}", self.layer, self.pattern)
    }

    pub fn fqn_for(&self, entity: &EntityName) -> String {
        self.full_pattern()
            .replace(ENTITY_PLACEHOLDER, entity.as_str())
    }
}

/// Single source of truth for the scaffold layout. Order is output order.
pub static BLUEPRINT: &[RoleDef] = &[
    // ── Domain ───────────────────────────────────────────────────────────────
    RoleDef {
        role: ScaffoldRole::Entity,
        layer: Layer::Domain,
        kind: TypeKind::Class,
        pattern: "{E}\\{E}Entity",
        implements: &[],
        extends: &[],
        injects: &[],
    },
    RoleDef {
        role: ScaffoldRole::RepositoryInterface,
        layer: Layer::Domain,
        kind: TypeKind::Interface,
        pattern: "{E}\\{E}RepositoryInterface",
        implements: &[],
        extends: &[],
        injects: &[],
    },
    // ── Application ──────────────────────────────────────────────────────────
    RoleDef {
        role: ScaffoldRole::Model,
        layer: Layer::Application,
        kind: TypeKind::Class,
        pattern: "{E}\\{E}Model",
        implements: &[],
        extends: &[],
        injects: &[],
    },
    RoleDef {
        role: ScaffoldRole::FinderInterface,
        layer: Layer::Application,
        kind: TypeKind::Interface,
        pattern: "{E}\\{E}FinderInterface",
        implements: &[],
        extends: &[],
        injects: &[],
    },
    RoleDef {
        role: ScaffoldRole::CreateCommand,
        layer: Layer::Application,
        kind: TypeKind::Class,
        pattern: "{E}\\Command\\Create{E}Command",
        implements: &[],
        extends: &[],
        injects: &[],
    },
    RoleDef {
        role: ScaffoldRole::UpdateCommand,
        layer: Layer::Application,
        kind: TypeKind::Class,
        pattern: "{E}\\Command\\Update{E}Command",
        implements: &[],
        extends: &[],
        injects: &[],
    },
    RoleDef {
        role: ScaffoldRole::CreateCommandHandler,
        layer: Layer::Application,
        kind: TypeKind::Class,
        pattern: "{E}\\CommandHandler\\Create{E}CommandHandler",
        implements: &[],
        extends: &[],
        injects: &[(
            ScaffoldRole::RepositoryInterface,
            ParamModifier::PrivateReadonly,
        )],
    },
    RoleDef {
        role: ScaffoldRole::UpdateCommandHandler,
        layer: Layer::Application,
        kind: TypeKind::Class,
        pattern: "{E}\\CommandHandler\\Update{E}CommandHandler",
        implements: &[],
        extends: &[],
        injects: &[(
            ScaffoldRole::RepositoryInterface,
            ParamModifier::PrivateReadonly,
        )],
    },
    // ── Infrastructure ───────────────────────────────────────────────────────
    RoleDef {
        role: ScaffoldRole::DbalFinder,
        layer: Layer::Infrastructure,
        kind: TypeKind::Class,
        pattern: "{E}\\Dbal{E}Finder",
        implements: &[ScaffoldRole::FinderInterface],
        extends: &[],
        injects: &[],
    },
    RoleDef {
        role: ScaffoldRole::DbalRepository,
        layer: Layer::Infrastructure,
        kind: TypeKind::Class,
        pattern: "{E}\\Dbal{E}Repository",
        implements: &[ScaffoldRole::RepositoryInterface],
        extends: &[],
        injects: &[],
    },
    // ── Framework ────────────────────────────────────────────────────────────
    RoleDef {
        role: ScaffoldRole::Controller,
        layer: Layer::Framework,
        kind: TypeKind::Class,
        pattern: "{E}\\Controller\\{E}Controller",
        implements: &[],
        extends: &[BaseType::PlatformController],
        injects: &[],
    },
    RoleDef {
        role: ScaffoldRole::CreateForm,
        layer: Layer::Framework,
        kind: TypeKind::Class,
        pattern: "{E}\\Form\\Create{E}Form",
        implements: &[],
        extends: &[],
        injects: &[],
    },
    RoleDef {
        role: ScaffoldRole::UpdateForm,
        layer: Layer::Framework,
        kind: TypeKind::Class,
        pattern: "{E}\\Form\\Update{E}Form",
        implements: &[],
        extends: &[],
        injects: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn blueprint_has_thirteen_roles() {
        assert_eq!(BLUEPRINT.len(), 13);
    }

    #[test]
    fn blueprint_covers_every_role_once() {
        let roles: HashSet<_> = BLUEPRINT.iter().map(|def| def.role).collect();
        assert_eq!(roles.len(), BLUEPRINT.len());
        for def in BLUEPRINT {
            assert_eq!(def.role.def().role, def.role);
        }
    }

    #[test]
    fn patterns_are_unique() {
        let patterns: HashSet<_> = BLUEPRINT.iter().map(RoleDef::full_pattern).collect();
        assert_eq!(patterns.len(), BLUEPRINT.len());
    }

    #[test]
    fn references_point_at_interfaces() {
        for def in BLUEPRINT {
            for target in def.implements.iter().chain(def.injects.iter().map(|(r, _)| r)) {
                assert_eq!(
                    target.def().kind,
                    TypeKind::Interface,
                    "{} references non-interface {}",
                    def.role,
                    target
                );
            }
        }
    }

    #[test]
    fn interfaces_declare_no_constructor_dependencies() {
        for def in BLUEPRINT.iter().filter(|d| d.kind == TypeKind::Interface) {
            assert!(def.injects.is_empty(), "{} injects dependencies", def.role);
            assert!(def.implements.is_empty(), "{} implements", def.role);
        }
    }

    #[test]
    fn layers_appear_in_order() {
        let layers: Vec<_> = BLUEPRINT.iter().map(|def| def.layer).collect();
        let mut sorted = layers.clone();
        sorted.sort();
        assert_eq!(layers, sorted);
    }

    #[test]
    fn fqn_for_interpolates_entity() {
        let entity = EntityName::parse("Invoice").unwrap();
        assert_eq!(
            ScaffoldRole::CreateCommandHandler.fqn_for(&entity),
            "Application\\Invoice\\CommandHandler\\CreateInvoiceCommandHandler"
        );
    }

    #[test]
    fn role_parses_from_kebab_or_snake() {
        assert_eq!(
            "dbal-repository".parse::<ScaffoldRole>().unwrap(),
            ScaffoldRole::DbalRepository
        );
        assert_eq!(
            "create_form".parse::<ScaffoldRole>().unwrap(),
            ScaffoldRole::CreateForm
        );
        assert!("service".parse::<ScaffoldRole>().is_err());
    }
}
