//! Integration tests for the `strata` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// `strata` running in `dir`, isolated from the user's global config.
fn strata(dir: &Path) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("strata");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("STRATA__PROJECT__ROOT_NAMESPACE");
    cmd
}

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Strata"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_generate_writes_thirteen_files() {
    let temp = TempDir::new().unwrap();

    strata(temp.path())
        .args(["generate", "Product"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You passed an argument: Product"))
        .stdout(predicate::str::contains("| path"))
        .stdout(predicate::str::contains("\\App\\Infrastructure\\Product\\DbalProductRepository"));

    let src = temp.path().join("src");
    let count = [
        "Domain/Product/ProductEntity.php",
        "Domain/Product/ProductRepositoryInterface.php",
        "Application/Product/ProductModel.php",
        "Application/Product/ProductFinderInterface.php",
        "Application/Product/Command/CreateProductCommand.php",
        "Application/Product/Command/UpdateProductCommand.php",
        "Application/Product/CommandHandler/CreateProductCommandHandler.php",
        "Application/Product/CommandHandler/UpdateProductCommandHandler.php",
        "Infrastructure/Product/DbalProductFinder.php",
        "Infrastructure/Product/DbalProductRepository.php",
        "Framework/Product/Controller/ProductController.php",
        "Framework/Product/Form/CreateProductForm.php",
        "Framework/Product/Form/UpdateProductForm.php",
    ]
    .iter()
    .filter(|rel| src.join(rel).is_file())
    .count();
    assert_eq!(count, 13);

    let repository =
        fs::read_to_string(src.join("Infrastructure/Product/DbalProductRepository.php")).unwrap();
    assert!(repository.contains("namespace App\\Infrastructure\\Product;"));
    assert!(repository.contains(
        "class DbalProductRepository implements \\App\\Domain\\Product\\ProductRepositoryInterface"
    ));
}

#[test]
fn test_generate_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();

    strata(temp.path())
        .args(["generate", "Order", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!temp.path().join("src").exists());
}

#[test]
fn test_generate_into_project_dir() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("shop");

    strata(temp.path())
        .args(["g", "Invoice", "--project-dir"])
        .arg(&project)
        .args(["--namespace", "Shop"])
        .assert()
        .success();

    let handler = fs::read_to_string(
        project.join("src/Application/Invoice/CommandHandler/CreateInvoiceCommandHandler.php"),
    )
    .unwrap();
    assert!(handler.contains("namespace Shop\\Application\\Invoice\\CommandHandler;"));
    assert!(handler.contains(
        "private readonly \\Shop\\Domain\\Invoice\\InvoiceRepositoryInterface $invoiceRepositoryInterface"
    ));
}

#[test]
fn test_second_run_needs_force() {
    let temp = TempDir::new().unwrap();

    strata(temp.path())
        .args(["generate", "Product"])
        .assert()
        .success();

    strata(temp.path())
        .args(["generate", "Product"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("13 file(s) already exist"))
        .stderr(predicate::str::contains("--force"));

    strata(temp.path())
        .args(["generate", "Product", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("13 overwritten"));
}

#[test]
fn test_generate_json_report() {
    let temp = TempDir::new().unwrap();

    let out = strata(temp.path())
        .args(["generate", "Product", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(report["entity"], "Product");
    assert_eq!(report["dry_run"], false);
    assert_eq!(report["files"].as_array().unwrap().len(), 13);
    assert_eq!(report["files"][0]["status"], "created");
    assert_eq!(report["files"][0]["kind"], "class");
}

#[test]
fn test_show_single_role() {
    let temp = TempDir::new().unwrap();

    strata(temp.path())
        .args(["show", "Product", "--role", "repository-interface"])
        .assert()
        .success()
        .stdout(predicate::str::contains("interface ProductRepositoryInterface\n{\n}"))
        .stdout(predicate::str::contains("__construct").not());

    assert!(!temp.path().join("src").exists());
}

#[test]
fn test_list_csv() {
    let temp = TempDir::new().unwrap();

    strata(temp.path())
        .args(["list", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("role,layer,kind,pattern\n"))
        .stdout(predicate::str::contains("controller,Framework,class"));
}

#[test]
fn test_env_overrides_root_namespace() {
    let temp = TempDir::new().unwrap();

    strata(temp.path())
        .env("STRATA__PROJECT__ROOT_NAMESPACE", "Acme")
        .args(["config", "get", "project.root_namespace"])
        .assert()
        .success()
        .stdout("Acme\n");

    strata(temp.path())
        .env("STRATA__PROJECT__ROOT_NAMESPACE", "Acme")
        .args(["generate", "Product"])
        .assert()
        .success();

    let entity =
        fs::read_to_string(temp.path().join("src/Domain/Product/ProductEntity.php")).unwrap();
    assert!(entity.contains("namespace Acme\\Domain\\Product;"));
}

#[test]
fn test_init_local_then_config_is_read() {
    let temp = TempDir::new().unwrap();

    strata(temp.path())
        .args(["init", "--local"])
        .assert()
        .success();
    let path = temp.path().join(".strata.toml");
    assert!(path.is_file());

    fs::write(&path, "[project]\nsource_dir = \"lib\"\n").unwrap();

    // without --force the edited file is kept
    strata(temp.path())
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    strata(temp.path())
        .args(["config", "get", "project.source_dir"])
        .assert()
        .success()
        .stdout("lib\n");

    strata(temp.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(".strata.toml\n");
}

#[test]
fn test_completions_bash() {
    let temp = TempDir::new().unwrap();

    strata(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("strata"));
}
