//! `strata config`: inspect configuration values.

use std::path::PathBuf;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    config_file: Option<&PathBuf>,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.emit(&value)?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised = toml::to_string_pretty(&config)
                .map_err(|e| CliError::config("Failed to serialise config", e))?;
            output.emit(&serialised)?;
        }

        ConfigCommands::Path => {
            output.emit(&AppConfig::active_path(config_file).display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let path_value = |p: &std::path::Path| p.display().to_string();
    match key {
        "project.dir" => Ok(path_value(&config.project.dir)),
        "project.source_dir" => Ok(path_value(&config.project.source_dir)),
        "project.root_namespace" => Ok(config.project.root_namespace.clone()),
        "generator.base_controller" => Ok(config.generator.base_controller.clone()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        "log.file" => Ok(config.log.file.as_deref().map(path_value).unwrap_or_default()),
        _ => Err(CliError::UnknownConfigKey { key: key.into() }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
