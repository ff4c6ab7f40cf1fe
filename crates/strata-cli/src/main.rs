//! `strata`: generate a layered PHP feature slice for one entity.
//!
//! `main` loads `.env`, parses arguments, loads configuration and installs
//! the tracing subscriber before dispatching. A configuration failure is
//! reported only after logging is up, so `-v` still shows its cause.
//!
//! Exit codes: 0 success, 1 internal, 2 bad input or existing files,
//! 3 not found, 4 configuration.

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help / --version land here too; clap picks the exit code.
        Err(e) => e.exit(),
    };
    let verbose = cli.global.verbose > 0;

    // Logging needs `log.file`, so fall back to defaults and report later.
    let (config, config_err) = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    let _log_guard = match init_logging(&cli.global, config.log.file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialise logging: {e:#}");
            return ExitCode::from(1);
        }
    };

    let color = error_color(cli.global.no_color || config.output.no_color);

    if let Some(e) = config_err {
        let err = CliError::config("Failed to load configuration", e);
        return handle_error(err, verbose, color);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let output = OutputManager::new(&cli.global, &config);

    match run(cli, config, output) {
        Ok(()) => {
            info!("Strata completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, color),
    }
}

/// Route the parsed subcommand to its handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Generate(cmd) => commands::generate::execute(cmd, config, output),
        Commands::Show(cmd) => commands::show::execute(cmd, config, output),
        Commands::List(cmd) => commands::list::execute(cmd, output),
        Commands::Init(cmd) => commands::init::execute(cmd, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
        Commands::Config(cmd) => {
            commands::config::execute(cmd, config, cli.global.config.as_ref(), output)
        }
    }
}

/// Log `err`, print it to stderr and turn it into the process exit code.
fn handle_error(err: CliError, verbose: bool, color: bool) -> ExitCode {
    err.log();
    eprint!("{}", err.render(verbose, color));

    ExitCode::from(err.exit_code())
}

/// Color error reports only on a terminal, and never when disabled.
fn error_color(no_color: bool) -> bool {
    !no_color && std::io::IsTerminal::is_terminal(&std::io::stderr())
}
