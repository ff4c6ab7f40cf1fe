//! `strata init`: create a default configuration file.

use std::path::{Path, PathBuf};

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Create a default Strata configuration file.
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    output.info("Initialising configuration...")?;

    let config_path = target_path(&args);

    // Bail early if the file already exists and --force was not given.
    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    write_defaults(&config_path)?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}

/// `--local` writes `.strata.toml` in the CWD; anything else goes global.
fn target_path(args: &InitArgs) -> PathBuf {
    if args.local {
        AppConfig::local_config_path()
    } else {
        AppConfig::config_path()
    }
}

fn write_defaults(path: &Path) -> CliResult<()> {
    let toml = toml::to_string_pretty(&AppConfig::default())
        .map_err(|e| CliError::config("Failed to serialise default config", e))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(path, toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))
}
