//! In-memory filesystem adapter for testing and previews.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use strata_core::{
    application::{ApplicationError, ports::Filesystem},
    error::StrataResult,
};

/// In-memory filesystem. Clones share state.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    read_only: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Read a file's content.
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.read().ok()?.files.get(path).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<_> = self
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default();
        files.sort();
        files
    }

    /// Make writes to `path` fail, to exercise error handling.
    pub fn deny_writes(&self, path: impl Into<PathBuf>) -> StrataResult<()> {
        self.write()?.read_only.insert(path.into());
        Ok(())
    }

    fn read(&self) -> StrataResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::FilesystemLock.into())
    }

    fn write(&self) -> StrataResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::FilesystemLock.into())
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> StrataResult<()> {
        let mut inner = self.write()?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> StrataResult<()> {
        let mut inner = self.write()?;

        if inner.read_only.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Permission denied".into(),
            }
            .into());
        }

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn remove_file(&self, path: &Path) -> StrataResult<()> {
        let mut inner = self.write()?;
        inner
            .files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| {
                ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "No such file".into(),
                }
                .into()
            })
    }

    fn remove_dir(&self, path: &Path) -> StrataResult<()> {
        let mut inner = self.write()?;

        let occupied = inner.files.keys().any(|p| p.parent() == Some(path))
            || inner.directories.iter().any(|d| d.parent() == Some(path));
        if occupied {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Directory not empty".into(),
            }
            .into());
        }

        inner.directories.remove(path);
        Ok(())
    }
}
