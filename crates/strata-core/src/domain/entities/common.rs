use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::DomainError;

/// Location of a generated file below the source root.
///
/// Invariant: never absolute. Paths derived from an fqn are relative by
/// construction; anything else goes through [`RelativePath::try_new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// `a/b/C.<extension>` from the segments `a`, `b`, `C`.
    pub(crate) fn from_segments<'a>(
        segments: impl IntoIterator<Item = &'a str>,
        extension: &str,
    ) -> Self {
        let mut path: PathBuf = segments.into_iter().collect();
        path.set_extension(extension);
        Self(path)
    }

    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.is_absolute() || path.has_root() {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            });
        }
        Ok(Self(path))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
