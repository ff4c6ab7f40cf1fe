//! `strata show`: print rendered sources without writing them.

use std::path::Path;

use tracing::instrument;

use strata_adapters::{MemoryFilesystem, PhpRenderer};
use strata_core::{
    application::ScaffoldService,
    domain::{DescriptorFactory, Namespace, ScaffoldRole, SourceFile},
};

use crate::{
    cli::{ShowArgs, global::OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(entity = %args.entity))]
pub fn execute(args: ShowArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let role = args.role.as_deref().map(parse_role).transpose()?;
    let root = super::root_namespace(args.namespace.as_deref(), &config)?;
    let factory = super::descriptor_factory(&config)?;

    let files = render(&factory, root, &args.entity, role)?;

    if output.format() == OutputFormat::Json {
        output.json(&files)?;
        return Ok(());
    }

    let headed = files.len() > 1;
    for file in &files {
        if headed {
            output.header(&format!("// {}", file.path))?;
        }
        output.emit(&file.content)?;
    }
    Ok(())
}

/// Render the scaffold for `entity`, or just the file for `role`.
fn render(
    factory: &DescriptorFactory,
    root: Namespace,
    entity: &str,
    role: Option<ScaffoldRole>,
) -> CliResult<Vec<SourceFile>> {
    let scaffold = factory.build(entity).map_err(|e| CliError::Core(e.into()))?;

    // Nothing is written, so the target filesystem is never consulted.
    let service = ScaffoldService::new(
        Box::new(PhpRenderer::new(root)),
        Box::new(MemoryFilesystem::new()),
    );
    let tree = service.render(&scaffold, Path::new(""))?;

    let wanted = role.and_then(|r| scaffold.get(r)).map(|d| d.fqn().clone());
    Ok(tree
        .files()
        .filter(|file| wanted.as_ref().is_none_or(|fqn| *fqn == file.fqn))
        .cloned()
        .collect())
}

fn parse_role(raw: &str) -> CliResult<ScaffoldRole> {
    raw.parse().map_err(|_| CliError::UnknownRole {
        role: raw.to_string(),
    })
}
