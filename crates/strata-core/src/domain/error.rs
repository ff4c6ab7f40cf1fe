// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to carry through the service layer)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid entity name '{name}': {reason}")]
    InvalidEntityName { name: String, reason: String },

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Invalid root namespace '{namespace}': {reason}")]
    InvalidNamespace { namespace: String, reason: String },

    // ========================================================================
    // Invariant Violations (factory or caller defects)
    // ========================================================================
    #[error("Malformed type name '{fqn}': {reason}")]
    MalformedName { fqn: String, reason: String },

    #[error("Duplicate type in scaffold: {fqn}")]
    DuplicateType { fqn: String },

    #[error("Duplicate path in scaffold: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("'{reference}' is listed more than once on {fqn}")]
    DuplicateReference { fqn: String, reference: String },

    #[error("Scaffold is empty")]
    EmptyScaffold,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidEntityName { name, reason } => vec![
                format!("'{}' cannot be used as an entity name: {}", name, reason),
                "Use a single identifier such as Product or OrderLine".into(),
                "Namespaces are derived automatically, do not include them".into(),
            ],
            Self::InvalidNamespace { namespace, .. } => vec![
                format!("Root namespace '{}' is not usable", namespace),
                "Use the PSR-4 prefix of your source directory, e.g. App".into(),
            ],
            Self::InvalidValue(msg) => vec![format!("Details: {}", msg)],
            Self::MalformedName { .. }
            | Self::DuplicateType { .. }
            | Self::DuplicatePath { .. }
            | Self::DuplicateReference { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::EmptyScaffold => vec![
                "The generated scaffold violated an internal invariant".into(),
                "Please report this issue together with the entity name you used".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidEntityName { .. }
            | Self::InvalidValue(_)
            | Self::InvalidNamespace { .. } => ErrorCategory::Validation,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
