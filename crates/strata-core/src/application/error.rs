//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The renderer produced a file that does not match its descriptor.
    #[error("Rendering failed for {fqn}: {reason}")]
    RenderingFailed { fqn: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Shared filesystem state unavailable (lock poisoned).
    #[error("Filesystem lock poisoned")]
    FilesystemLock,

    /// Some scaffold files already exist and overwriting was not requested.
    #[error("{} file(s) already exist", paths.len())]
    FilesExist { paths: Vec<PathBuf> },

    /// Rollback failed (best-effort cleanup failed).
    #[error("Rollback failed for {path}: {reason}")]
    RollbackFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RenderingFailed { fqn, .. } => vec![
                format!("Could not render {}", fqn),
                "This is likely a bug in the renderer".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::FilesystemLock => vec!["Try again in a moment".into()],
            Self::FilesExist { paths } => {
                let mut suggestions: Vec<String> = paths
                    .iter()
                    .take(3)
                    .map(|p| format!("Already exists: {}", p.display()))
                    .collect();
                if paths.len() > 3 {
                    suggestions.push(format!("...and {} more", paths.len() - 3));
                }
                suggestions.push("Use --force to overwrite (destructive)".into());
                suggestions.push("Or use --dry-run to preview the files".into());
                suggestions
            }
            Self::RollbackFailed { path, .. } => vec![
                format!("Partially written files may remain under {}", path.display()),
                "Remove them manually before retrying".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesExist { .. } => ErrorCategory::Conflict,
            Self::RenderingFailed { .. }
            | Self::FilesystemError { .. }
            | Self::FilesystemLock
            | Self::RollbackFailed { .. } => ErrorCategory::Internal,
        }
    }
}
