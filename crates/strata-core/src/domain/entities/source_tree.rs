use std::collections::HashSet;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::{
    entities::{common::RelativePath, fqn::Fqn},
    error::DomainError,
};

/// Rendered scaffold ready for materialization.
///
/// This is the output of rendering a whole scaffold. It contains no
/// business logic, only data.
#[derive(Debug, Clone, Serialize)]
pub struct SourceTree {
    pub(crate) root: PathBuf,
    pub(crate) files: Vec<SourceFile>,
}

impl SourceTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: Vec::new(),
        }
    }

    pub fn add_file(&mut self, file: SourceFile) {
        self.files.push(file);
    }

    pub fn with_file(mut self, file: SourceFile) -> Self {
        self.add_file(file);
        self
    }

    pub fn files(&self) -> impl Iterator<Item = &SourceFile> {
        self.files.iter()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Absolute (root-joined) destination of `file`.
    pub fn destination(&self, file: &SourceFile) -> PathBuf {
        self.root.join(file.path.as_path())
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::EmptyScaffold);
        }

        let mut seen = HashSet::new();
        for file in &self.files {
            let path_str = file.path.to_string();
            if !seen.insert(path_str.clone()) {
                return Err(DomainError::DuplicatePath { path: path_str });
            }

            if file.path.as_path().is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed { path: path_str });
            }
        }

        Ok(())
    }
}

/// One rendered source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    pub fqn: Fqn,
    pub path: RelativePath,
    pub content: String,
}

impl SourceFile {
    pub fn new(fqn: Fqn, path: RelativePath, content: String) -> Self {
        Self { fqn, path, content }
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}
