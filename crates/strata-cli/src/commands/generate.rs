//! Implementation of the `strata generate` command.
//!
//! Responsibility: translate CLI arguments and config into a factory, a
//! renderer and a target directory, call the core scaffold service, and
//! display results. No business logic lives here.

use tracing::{debug, info, instrument};

use strata_adapters::{LocalFilesystem, PhpRenderer};
use strata_core::application::{FileStatus, GenerationReport, ScaffoldService, WriteOptions};

use crate::{
    cli::{GenerateArgs, OutputFormat, ReportFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `strata generate` command.
///
/// 1. Resolve namespace, base controller and source root
/// 2. Build the scaffold (invalid names stop here)
/// 3. Render and write through `ScaffoldService`
/// 4. Print the `path | class` table, or the JSON report
#[instrument(skip_all, fields(entity = %args.entity))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let json = args.format == ReportFormat::Json || output.format() == OutputFormat::Json;

    let root = super::root_namespace(args.namespace.as_deref(), &config)?;
    let factory = super::descriptor_factory(&config)?;
    let source_root = config.project.source_root(args.project_dir.as_deref());

    if !json {
        output.note(&format!("You passed an argument: {}", args.entity))?;
        output.note(&source_root.display().to_string())?;
    }

    let scaffold = factory
        .build(&args.entity)
        .map_err(|e| CliError::Core(e.into()))?;

    debug!(
        root = %root,
        source_root = %source_root.display(),
        files = scaffold.len(),
        "Scaffold built"
    );

    let service = ScaffoldService::new(
        Box::new(PhpRenderer::new(root)),
        Box::new(LocalFilesystem::new()),
    );
    let options = WriteOptions {
        overwrite: args.force,
        dry_run: args.dry_run,
    };

    let progress = if json || args.dry_run {
        indicatif::ProgressBar::hidden()
    } else {
        output.progress_bar(scaffold.len() as u64)
    };
    let report = service.generate_with_progress(&scaffold, &source_root, options, |file| {
        progress.set_message(file.class.clone());
        progress.inc(1);
    });
    progress.finish_and_clear();
    let report = report?;

    info!(
        entity = %report.entity,
        created = report.count(FileStatus::Created),
        overwritten = report.count(FileStatus::Overwritten),
        dry_run = report.dry_run,
        "Generation finished"
    );

    if json {
        output.json(&report)?;
        return Ok(());
    }

    output.table(&["path", "class"], &report_rows(&report))?;
    print_summary(&report, &output)?;
    Ok(())
}

fn report_rows(report: &GenerationReport) -> Vec<Vec<String>> {
    report
        .files
        .iter()
        .map(|file| vec![file.path.display().to_string(), file.class.clone()])
        .collect()
}

fn print_summary(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    if report.dry_run {
        output.info(&format!(
            "Dry run: {} files would be written below {}",
            report.count(FileStatus::Planned),
            report.source_root.display()
        ))?;
        return Ok(());
    }

    let overwritten = report.count(FileStatus::Overwritten);
    let mut msg = format!(
        "Scaffold for '{}' created ({} files)",
        report.entity,
        report.files.len()
    );
    if overwritten > 0 {
        msg.push_str(&format!(", {overwritten} overwritten"));
    }
    output.success(&msg)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use strata_core::domain::TypeKind;
    use strata_core::application::GeneratedFile;

    fn report(dry_run: bool) -> GenerationReport {
        let status = if dry_run {
            FileStatus::Planned
        } else {
            FileStatus::Created
        };
        GenerationReport {
            entity: strata_core::domain::EntityName::parse("Product").unwrap(),
            source_root: PathBuf::from("src"),
            dry_run,
            files: vec![GeneratedFile {
                path: PathBuf::from("src/Domain/Product/ProductEntity.php"),
                class: "\\App\\Domain\\Product\\ProductEntity".into(),
                kind: TypeKind::Class,
                status,
            }],
        }
    }

    #[test]
    fn rows_are_path_then_class() {
        let rows = report_rows(&report(false));
        assert_eq!(
            rows,
            vec![vec![
                "src/Domain/Product/ProductEntity.php".to_string(),
                "\\App\\Domain\\Product\\ProductEntity".to_string(),
            ]]
        );
    }
}
