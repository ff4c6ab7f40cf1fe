//! Fully-qualified type names, root namespaces and type references.
//!
//! Names are accepted with either `\` or `.` as the namespace separator and
//! stored in one canonical form: `\`-separated, without a leading separator.
//! Absolute rendering (`\Foo\Bar`) is derived on demand, so normalizing an
//! already-absolute input is a no-op.

use std::fmt;
use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use super::DomainError;
use super::common::RelativePath;

/// Canonical namespace separator.
pub const SEPARATOR: char = '\\';

/// Alternative separator accepted on input.
pub const ALT_SEPARATOR: char = '.';

fn is_separator(c: char) -> bool {
    c == SEPARATOR || c == ALT_SEPARATOR
}

/// Split a fully-qualified name into `(namespace, simple_name)` at the last
/// namespace separator.
///
/// Fails with [`DomainError::MalformedName`] when there is no separator or
/// when either side of it is empty.
pub fn split_fqn(fqn: &str) -> Result<(&str, &str), DomainError> {
    let malformed = |reason: &str| DomainError::MalformedName {
        fqn: fqn.to_string(),
        reason: reason.to_string(),
    };

    let idx = fqn
        .rfind(is_separator)
        .ok_or_else(|| malformed("no namespace separator"))?;

    // Separators are single-byte ASCII.
    let (namespace, simple_name) = (&fqn[..idx], &fqn[idx + 1..]);

    if namespace.is_empty() {
        return Err(malformed("empty namespace"));
    }
    if simple_name.is_empty() {
        return Err(malformed("empty type name"));
    }

    Ok((namespace, simple_name))
}

// ── Fqn ──────────────────────────────────────────────────────────────────────

/// A namespaced type name, relative to whatever root it is resolved against.
///
/// Invariant: at least two non-empty segments, no whitespace, no `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fqn(String);

impl Fqn {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let malformed = |reason: &str| DomainError::MalformedName {
            fqn: raw.to_string(),
            reason: reason.to_string(),
        };

        let canonical: String = raw
            .trim()
            .trim_start_matches(is_separator)
            .chars()
            .map(|c| if c == ALT_SEPARATOR { SEPARATOR } else { c })
            .collect();

        if canonical.is_empty() {
            return Err(malformed("name is empty"));
        }
        if canonical.chars().any(|c| c.is_whitespace() || c == '/') {
            return Err(malformed("name contains whitespace or '/'"));
        }

        let (namespace, _) = split_fqn(&canonical)?;
        if namespace.split(SEPARATOR).any(str::is_empty) {
            return Err(malformed("empty namespace segment"));
        }

        Ok(Self(canonical))
    }

    /// Wrap a name already in canonical form. For compile-time constants.
    pub(crate) fn new_unchecked(canonical: impl Into<String>) -> Self {
        let canonical = canonical.into();
        debug_assert!(Self::parse(&canonical).is_ok_and(|fqn| fqn.0 == canonical));
        Self(canonical)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Everything before the last separator.
    pub fn namespace(&self) -> &str {
        self.0.rsplit_once(SEPARATOR).map_or("", |(ns, _)| ns)
    }

    /// Everything after the last separator.
    pub fn simple_name(&self) -> &str {
        self.0
            .rsplit_once(SEPARATOR)
            .map_or(self.0.as_str(), |(_, name)| name)
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEPARATOR)
    }

    /// `\Foo\Bar` form, resolved from the global namespace.
    pub fn absolute(&self) -> String {
        format!("{SEPARATOR}{}", self.0)
    }

    /// Relative source path: one directory per namespace segment, the simple
    /// name as file stem.
    pub fn to_relative_path(&self, extension: &str) -> RelativePath {
        RelativePath::from_segments(self.segments(), extension)
    }

    /// Inverse of [`Fqn::to_relative_path`].
    pub fn from_relative_path(path: &Path, extension: &str) -> Result<Self, DomainError> {
        let malformed = |reason: &str| DomainError::MalformedName {
            fqn: path.display().to_string(),
            reason: reason.to_string(),
        };

        if path.extension().and_then(|e| e.to_str()) != Some(extension) {
            return Err(malformed("unexpected file extension"));
        }

        let stripped = path.with_extension("");
        let mut segments = Vec::new();
        for component in stripped.components() {
            match component {
                Component::Normal(segment) => segments.push(
                    segment
                        .to_str()
                        .ok_or_else(|| malformed("path is not valid UTF-8"))?,
                ),
                _ => return Err(malformed("path must be relative and normalized")),
            }
        }

        Self::parse(&segments.join(&SEPARATOR.to_string()))
    }
}

impl fmt::Display for Fqn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Fqn {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Fqn> for String {
    fn from(value: Fqn) -> Self {
        value.0
    }
}

// ── Namespace ────────────────────────────────────────────────────────────────

/// Root namespace every project type is resolved under (the PSR-4 prefix of
/// the source directory, `App` in a stock Symfony project).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Namespace(String);

impl Namespace {
    pub const DEFAULT: &'static str = "App";

    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let invalid = |reason: &str| DomainError::InvalidNamespace {
            namespace: raw.to_string(),
            reason: reason.to_string(),
        };

        let canonical: String = raw
            .trim()
            .trim_matches(is_separator)
            .chars()
            .map(|c| if c == ALT_SEPARATOR { SEPARATOR } else { c })
            .collect();

        if canonical.is_empty() {
            return Err(invalid("namespace cannot be empty"));
        }
        if canonical.chars().any(|c| c.is_whitespace() || c == '/') {
            return Err(invalid("namespace contains whitespace or '/'"));
        }
        if canonical.split(SEPARATOR).any(str::is_empty) {
            return Err(invalid("empty namespace segment"));
        }

        Ok(Self(canonical))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `Root\<namespace>` without a leading separator, as used in a
    /// `namespace` declaration.
    pub fn join(&self, namespace: &str) -> String {
        if namespace.is_empty() {
            self.0.clone()
        } else {
            format!("{}{SEPARATOR}{namespace}", self.0)
        }
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Namespace {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Namespace> for String {
    fn from(value: Namespace) -> Self {
        value.0
    }
}

// ── TypeRef ──────────────────────────────────────────────────────────────────

/// A reference from one generated type to another type.
///
/// `Project` references address types inside the generated tree and are
/// resolved under the root namespace. `External` references address
/// platform types and are resolved from the global namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "scope", content = "fqn", rename_all = "lowercase")]
pub enum TypeRef {
    Project(Fqn),
    External(Fqn),
}

impl TypeRef {
    pub fn project(raw: &str) -> Result<Self, DomainError> {
        Fqn::parse(raw).map(Self::Project)
    }

    pub fn external(raw: &str) -> Result<Self, DomainError> {
        Fqn::parse(raw).map(Self::External)
    }

    pub fn fqn(&self) -> &Fqn {
        match self {
            Self::Project(fqn) | Self::External(fqn) => fqn,
        }
    }

    pub fn simple_name(&self) -> &str {
        self.fqn().simple_name()
    }

    /// Absolute reference, always starting with a separator.
    pub fn absolute(&self, root: &Namespace) -> String {
        match self {
            Self::Project(fqn) => format!("{SEPARATOR}{}", root.join(fqn.as_str())),
            Self::External(fqn) => fqn.absolute(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Project(fqn) => write!(f, "{fqn}"),
            Self::External(fqn) => write!(f, "{}", fqn.absolute()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_at_last_separator() {
        assert_eq!(
            split_fqn("Domain\\Product\\ProductEntity").unwrap(),
            ("Domain\\Product", "ProductEntity")
        );
        assert_eq!(
            split_fqn("Domain.Product.ProductEntity").unwrap(),
            ("Domain.Product", "ProductEntity")
        );
    }

    #[test]
    fn split_rejects_bare_names() {
        assert!(matches!(
            split_fqn("ProductEntity"),
            Err(DomainError::MalformedName { .. })
        ));
        assert!(split_fqn("Domain\\").is_err());
        assert!(split_fqn("\\Product").is_err());
    }

    #[test]
    fn parse_accepts_both_separators() {
        let dotted = Fqn::parse("Infrastructure.Product.DbalProductRepository").unwrap();
        let slashed = Fqn::parse("Infrastructure\\Product\\DbalProductRepository").unwrap();
        assert_eq!(dotted, slashed);
        assert_eq!(dotted.as_str(), "Infrastructure\\Product\\DbalProductRepository");
    }

    #[test]
    fn leading_separator_is_normalized_away() {
        let plain = Fqn::parse("Foo.Bar").unwrap();
        assert_eq!(Fqn::parse(".Foo.Bar").unwrap(), plain);
        assert_eq!(Fqn::parse("\\Foo\\Bar").unwrap(), plain);
        assert_eq!(plain.absolute(), "\\Foo\\Bar");
        assert_eq!(Fqn::parse(&plain.absolute()).unwrap().absolute(), "\\Foo\\Bar");
    }

    #[test]
    fn parse_rejects_malformed_names() {
        for raw in ["", "Bare", "Foo..Bar", "Foo\\", "Foo Bar\\Baz", "Foo/Bar\\Baz"] {
            assert!(Fqn::parse(raw).is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn namespace_and_simple_name() {
        let fqn = Fqn::parse("Application.Invoice.Command.CreateInvoiceCommand").unwrap();
        assert_eq!(fqn.namespace(), "Application\\Invoice\\Command");
        assert_eq!(fqn.simple_name(), "CreateInvoiceCommand");
        assert_eq!(fqn.segments().count(), 4);
    }

    #[test]
    fn relative_path_round_trips() {
        let fqn = Fqn::parse("Framework.Product.Form.CreateProductForm").unwrap();
        let path = fqn.to_relative_path("php");
        assert_eq!(
            path.as_path(),
            Path::new("Framework/Product/Form/CreateProductForm.php")
        );
        assert_eq!(Fqn::from_relative_path(path.as_path(), "php").unwrap(), fqn);
    }

    #[test]
    fn from_relative_path_rejects_wrong_extension() {
        assert!(Fqn::from_relative_path(Path::new("Domain/Product.rs"), "php").is_err());
        assert!(Fqn::from_relative_path(Path::new("../Domain/Product.php"), "php").is_err());
    }

    #[test]
    fn namespace_trims_separators() {
        let root = Namespace::parse("\\Acme.Shop\\").unwrap();
        assert_eq!(root.as_str(), "Acme\\Shop");
        assert_eq!(root.join("Domain\\Product"), "Acme\\Shop\\Domain\\Product");
        assert!(Namespace::parse("  ").is_err());
        assert_eq!(Namespace::default().as_str(), "App");
    }

    #[test]
    fn type_refs_resolve_by_scope() {
        let root = Namespace::default();
        let project = TypeRef::project("Domain.Product.ProductRepositoryInterface").unwrap();
        let external =
            TypeRef::external("Symfony.Bundle.FrameworkBundle.Controller.AbstractController")
                .unwrap();

        assert_eq!(
            project.absolute(&root),
            "\\App\\Domain\\Product\\ProductRepositoryInterface"
        );
        assert_eq!(
            external.absolute(&root),
            "\\Symfony\\Bundle\\FrameworkBundle\\Controller\\AbstractController"
        );
        assert_eq!(project.simple_name(), "ProductRepositoryInterface");
    }

    #[test]
    fn fqn_serializes_as_canonical_string() {
        let fqn = Fqn::parse("Domain.Product.ProductEntity").unwrap();
        let as_string: String = fqn.clone().into();
        assert_eq!(as_string, "Domain\\Product\\ProductEntity");
        assert_eq!(Fqn::try_from(as_string).unwrap(), fqn);
    }
}
