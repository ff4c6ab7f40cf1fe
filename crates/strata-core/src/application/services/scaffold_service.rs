//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the generation workflow:
//! 1. Render every descriptor of a scaffold (nothing is written yet)
//! 2. Refuse to clobber existing files unless overwriting was requested
//! 3. Write all files, rolling back the ones this run created on failure

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, SourceRenderer},
    },
    domain::{DomainValidator as validator, EntityName, Scaffold, SourceFile, SourceTree, TypeKind},
    error::{StrataError, StrataResult},
};

/// How [`ScaffoldService::generate`] treats the filesystem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Replace files that already exist.
    pub overwrite: bool,

    /// Render and check everything, write nothing.
    pub dry_run: bool,
}

/// What happened to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Created,
    Overwritten,
    Planned,
}

/// One row of the generation summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub class: String,
    pub kind: TypeKind,
    pub status: FileStatus,
}

/// Result of a generation run, in scaffold order.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub entity: EntityName,
    pub source_root: PathBuf,
    pub dry_run: bool,
    pub files: Vec<GeneratedFile>,
}

impl GenerationReport {
    pub fn count(&self, status: FileStatus) -> usize {
        self.files.iter().filter(|f| f.status == status).count()
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    renderer: Box<dyn SourceRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use strata_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     renderer,   // impl SourceRenderer
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(renderer: Box<dyn SourceRenderer>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            renderer,
            filesystem,
        }
    }

    /// Render every descriptor of `scaffold` below `source_root`.
    ///
    /// Pure with respect to the filesystem. Fails on the first descriptor
    /// that cannot be rendered, before anything is written.
    #[instrument(skip_all, fields(entity = %scaffold.entity()))]
    pub fn render(&self, scaffold: &Scaffold, source_root: &Path) -> StrataResult<SourceTree> {
        let extension = self.renderer.extension();
        validator::validate_scaffold(scaffold, extension)?;

        let mut tree = SourceTree::new(source_root);
        for descriptor in scaffold {
            let file = self.renderer.render(descriptor)?;
            validator::validate_rendered(descriptor, &file, extension).map_err(|e| {
                ApplicationError::RenderingFailed {
                    fqn: descriptor.fqn().to_string(),
                    reason: e.to_string(),
                }
            })?;
            tree.add_file(file);
        }
        validator::validate_source_tree(&tree)?;

        debug!(files = tree.file_count(), "Scaffold rendered");
        Ok(tree)
    }

    /// Render and write `scaffold` below `source_root`.
    pub fn generate(
        &self,
        scaffold: &Scaffold,
        source_root: &Path,
        options: WriteOptions,
    ) -> StrataResult<GenerationReport> {
        self.generate_with_progress(scaffold, source_root, options, |_| {})
    }

    /// Like [`ScaffoldService::generate`], calling `on_written` after each
    /// file lands on disk.
    #[instrument(
        skip_all,
        fields(
            entity = %scaffold.entity(),
            source_root = %source_root.display(),
            overwrite = options.overwrite,
            dry_run = options.dry_run
        )
    )]
    pub fn generate_with_progress(
        &self,
        scaffold: &Scaffold,
        source_root: &Path,
        options: WriteOptions,
        mut on_written: impl FnMut(&GeneratedFile),
    ) -> StrataResult<GenerationReport> {
        info!("Generating scaffold for {}", scaffold.entity());

        // 1. Render everything up front
        let tree = self.render(scaffold, source_root)?;

        // 2. Preflight
        let existing: Vec<PathBuf> = tree
            .files()
            .map(|file| tree.destination(file))
            .filter(|path| self.filesystem.exists(path))
            .collect();

        if !existing.is_empty() && !options.overwrite {
            return Err(ApplicationError::FilesExist { paths: existing }.into());
        }

        let mut report = GenerationReport {
            entity: scaffold.entity().clone(),
            source_root: source_root.to_path_buf(),
            dry_run: options.dry_run,
            files: Vec::with_capacity(tree.file_count()),
        };

        for (file, descriptor) in tree.files().zip(scaffold) {
            let path = tree.destination(file);
            let status = if options.dry_run {
                FileStatus::Planned
            } else if existing.contains(&path) {
                FileStatus::Overwritten
            } else {
                FileStatus::Created
            };
            report.files.push(GeneratedFile {
                path,
                class: self.renderer.class_name(&file.fqn),
                kind: descriptor.kind(),
                status,
            });
        }

        if options.dry_run {
            info!(files = report.files.len(), "Dry run, nothing written");
            return Ok(report);
        }

        // 3. Write with rollback
        let mut journal = WriteJournal::default();
        let written = tree
            .files()
            .zip(&report.files)
            .try_for_each(|(file, row)| {
                self.write_one(&row.path, file, &mut journal)?;
                on_written(row);
                Ok::<_, StrataError>(())
            });

        match written {
            Ok(()) => {
                info!(
                    created = report.count(FileStatus::Created),
                    overwritten = report.count(FileStatus::Overwritten),
                    "Scaffold written"
                );
                Ok(report)
            }
            Err(e) => {
                warn!(error = %e, "Write failed, attempting rollback");
                self.rollback(journal, source_root, e)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn write_one(
        &self,
        path: &Path,
        file: &SourceFile,
        journal: &mut WriteJournal,
    ) -> StrataResult<()> {
        // Journal before acting: a failed call may still leave something behind.
        if let Some(parent) = path.parent() {
            journal.dirs.extend(
                parent
                    .ancestors()
                    .take_while(|dir| !dir.as_os_str().is_empty() && !self.filesystem.exists(dir))
                    .map(Path::to_path_buf),
            );
            self.filesystem.create_dir_all(parent)?;
        }

        if !self.filesystem.exists(path) {
            journal.files.push(path.to_path_buf());
        }
        self.filesystem.write_file(path, &file.content)?;
        debug!(path = %path.display(), bytes = file.size(), "Wrote file");
        Ok(())
    }

    /// Best-effort removal of everything this run created. Overwritten files
    /// are not restored.
    fn rollback(
        &self,
        mut journal: WriteJournal,
        source_root: &Path,
        cause: StrataError,
    ) -> StrataResult<GenerationReport> {
        let mut failures = Vec::new();

        // Journaled entries that never materialized are skipped.
        for path in journal.files.iter().rev() {
            if !self.filesystem.exists(path) {
                continue;
            }
            if let Err(e) = self.filesystem.remove_file(path) {
                failures.push(format!("{}: {}", path.display(), e));
            }
        }

        // Deepest directories first.
        journal.dirs.sort_by(|a, b| {
            b.components()
                .count()
                .cmp(&a.components().count())
                .then_with(|| a.cmp(b))
        });
        journal.dirs.dedup();
        for dir in &journal.dirs {
            if !self.filesystem.exists(dir) {
                continue;
            }
            if let Err(e) = self.filesystem.remove_dir(dir) {
                failures.push(format!("{}: {}", dir.display(), e));
            }
        }

        if failures.is_empty() {
            info!(removed = journal.files.len(), "Rollback successful");
            return Err(cause);
        }

        warn!(failures = failures.len(), "Rollback failed");
        Err(ApplicationError::RollbackFailed {
            path: source_root.to_path_buf(),
            reason: format!("{cause}; cleanup failed for {}", failures.join(", ")),
        }
        .into())
    }
}

/// Paths created during one run, in creation order.
#[derive(Debug, Default)]
struct WriteJournal {
    files: Vec<PathBuf>,
    dirs: Vec<PathBuf>,
}
