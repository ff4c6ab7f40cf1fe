//! Domain value objects: EntityName, TypeKind, ParamModifier, Layer.
//!
//! # Design
//!
//! These are pure value types: equality-by-value, no identity. They hold NO
//! scaffold layout knowledge. Which roles exist, in which layer, with which
//! dependencies, lives in `blueprint.rs`. This file's only job is to define
//! the types and their string representations.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

// ── EntityName ───────────────────────────────────────────────────────────────

/// The user-supplied entity name every scaffold is derived from.
///
/// Invariant: a single identifier segment, `[A-Za-z_][A-Za-z0-9_]*`.
/// Enforced at construction so that no name template can produce an empty
/// or extra namespace segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EntityName(String);

impl EntityName {
    /// Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let invalid = |reason: &str| DomainError::InvalidEntityName {
            name: raw.to_string(),
            reason: reason.to_string(),
        };

        let name = raw.trim();
        if name.is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(invalid("name cannot contain whitespace"));
        }
        if name.contains(['\\', '.', '/']) {
            return Err(invalid("name cannot contain namespace or path separators"));
        }

        let mut chars = name.chars();
        let Some(first) = chars.next() else {
            return Err(invalid("name cannot be empty"));
        };
        if !(first.is_ascii_alphabetic() || first == '_') {
            return Err(invalid("name must start with a letter or underscore"));
        }
        if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
            return Err(invalid(&format!("character '{bad}' is not allowed")));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EntityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── TypeKind ─────────────────────────────────────────────────────────────────

/// Declaration kind of a generated source unit.
///
/// Closed on purpose: the renderer matches on it exhaustively when deciding
/// whether to emit a constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Class,
    Interface,
}

impl TypeKind {
    /// The declaration keyword.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
        }
    }

    pub const fn has_constructor(self) -> bool {
        match self {
            Self::Class => true,
            Self::Interface => false,
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ParamModifier ────────────────────────────────────────────────────────────

/// Visibility / mutability of a promoted constructor parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParamModifier {
    #[default]
    PrivateReadonly,
    ProtectedReadonly,
    PublicReadonly,
    Private,
    Protected,
    Public,
}

impl ParamModifier {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PrivateReadonly => "private readonly",
            Self::ProtectedReadonly => "protected readonly",
            Self::PublicReadonly => "public readonly",
            Self::Private => "private",
            Self::Protected => "protected",
            Self::Public => "public",
        }
    }
}

impl fmt::Display for ParamModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Layer ────────────────────────────────────────────────────────────────────

/// Architectural layer a scaffolded type lives in.
///
/// The layer name is also the first namespace segment of every fqn in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Domain,
    Application,
    Infrastructure,
    Framework,
}

impl Layer {
    pub const ALL: [Layer; 4] = [
        Self::Domain,
        Self::Application,
        Self::Infrastructure,
        Self::Framework,
    ];

    /// Namespace segment for this layer.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Domain => "Domain",
            Self::Application => "Application",
            Self::Infrastructure => "Infrastructure",
            Self::Framework => "Framework",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
