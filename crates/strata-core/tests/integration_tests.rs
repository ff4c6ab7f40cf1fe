//! Integration tests for strata-core's public API.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use strata_core::{
    application::ApplicationError,
    domain::{BLUEPRINT, DomainError, Layer, SOURCE_EXTENSION},
    prelude::*,
};

/// Filesystem fake sharing its state with the test through an `Arc`.
#[derive(Clone, Default)]
struct SharedFs {
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
}

impl Filesystem for SharedFs {
    fn create_dir_all(&self, _path: &Path) -> StrataResult<()> {
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> StrataResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap();
        files.contains_key(path) || files.keys().any(|f| f.starts_with(path))
    }

    fn remove_file(&self, path: &Path) -> StrataResult<()> {
        self.files.lock().unwrap().remove(path);
        Ok(())
    }

    fn remove_dir(&self, _path: &Path) -> StrataResult<()> {
        Ok(())
    }
}

/// Renders a one-line marker per descriptor.
struct MarkerRenderer;

impl SourceRenderer for MarkerRenderer {
    fn extension(&self) -> &str {
        SOURCE_EXTENSION
    }

    fn class_name(&self, fqn: &Fqn) -> String {
        format!("\\App\\{fqn}")
    }

    fn render(&self, descriptor: &TypeDescriptor) -> StrataResult<SourceFile> {
        let fqn = descriptor.fqn().clone();
        let path = fqn.to_relative_path(SOURCE_EXTENSION);
        Ok(SourceFile::new(fqn, path, format!("{descriptor}\n")))
    }
}

fn service(fs: &SharedFs) -> ScaffoldService {
    ScaffoldService::new(Box::new(MarkerRenderer), Box::new(fs.clone()))
}

#[test]
fn full_generation_workflow() {
    let fs = SharedFs::default();
    let scaffold = DescriptorFactory::new().build("Product").unwrap();

    let report = service(&fs)
        .generate(&scaffold, Path::new("/app/src"), WriteOptions::default())
        .unwrap();

    assert_eq!(report.count(FileStatus::Created), 13);
    let files = fs.files.lock().unwrap();
    assert_eq!(files.len(), 13);
    assert_eq!(
        files
            .get(Path::new(
                "/app/src/Infrastructure/Product/DbalProductRepository.php"
            ))
            .map(String::as_str),
        Some(
            "class Infrastructure\\Product\\DbalProductRepository implements Domain\\Product\\ProductRepositoryInterface\n"
        )
    );
}

#[test]
fn second_run_is_refused_then_forced() {
    let fs = SharedFs::default();
    let scaffold = DescriptorFactory::new().build("Invoice").unwrap();
    let root = Path::new("/app/src");

    service(&fs)
        .generate(&scaffold, root, WriteOptions::default())
        .unwrap();

    let err = service(&fs)
        .generate(&scaffold, root, WriteOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        StrataError::Application(ApplicationError::FilesExist { ref paths }) if paths.len() == 13
    ));

    let report = service(&fs)
        .generate(
            &scaffold,
            root,
            WriteOptions {
                overwrite: true,
                dry_run: false,
            },
        )
        .unwrap();
    assert_eq!(report.count(FileStatus::Overwritten), 13);
}

#[test]
fn invalid_entity_never_reaches_the_filesystem() {
    let err = DescriptorFactory::new().build("  ").unwrap_err();
    assert!(matches!(err, DomainError::InvalidEntityName { .. }));
    assert_eq!(
        StrataError::from(err).category(),
        strata_core::error::ErrorCategory::Validation
    );
}

#[test]
fn dry_run_reports_planned_files() {
    let fs = SharedFs::default();
    let scaffold = DescriptorFactory::new().build("Order").unwrap();
    let report = service(&fs)
        .generate(
            &scaffold,
            Path::new("/app/src"),
            WriteOptions {
                overwrite: false,
                dry_run: true,
            },
        )
        .unwrap();

    assert!(fs.files.lock().unwrap().is_empty());
    assert_eq!(report.entity.as_str(), "Order");
    assert!(report.files.iter().all(|f| f.status == FileStatus::Planned));
}

#[test]
fn blueprint_layers_cover_every_layer() {
    for layer in Layer::ALL {
        assert!(BLUEPRINT.iter().any(|def| def.layer == layer));
    }
}
