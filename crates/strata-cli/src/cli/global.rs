//! Flags accepted by every subcommand.
//!
//! Flattened into [`super::Cli`]; `strata -v generate X` and
//! `strata generate X -v` mean the same thing.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// `-v` info, `-vv` debug, `-vvv` trace. Default is warnings only.
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Only errors and requested payload (JSON, sources, listings).
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Plain output without ANSI codes; honours `NO_COLOR`.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Read this TOML file instead of the global and `.strata.toml` files.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format (auto uses output.format from config, then the terminal)"
    )]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Tracing level for our crates, as an `EnvFilter` directive value.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// How reports and listings are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Auto,
    /// Colours, tables, progress bar.
    Human,
    /// Tables without colour or progress.
    Plain,
    /// Machine-readable documents only.
    Json,
}

impl OutputFormat {
    /// `Auto` becomes `Human` on a terminal and `Plain` otherwise.
    pub fn resolve(self, stdout_is_terminal: bool) -> Self {
        match self {
            Self::Auto if stdout_is_terminal => Self::Human,
            Self::Auto => Self::Plain,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn verbosity_maps_to_levels() {
        let levels: Vec<_> = (0..=4).map(|v| args_with(v, false).log_level()).collect();
        assert_eq!(levels, ["warn", "info", "debug", "trace", "trace"]);
    }

    // quiet takes precedence over verbose
    #[test]
    fn quiet_is_errors_only() {
        assert_eq!(args_with(0, true).log_level(), "error");
        assert_eq!(args_with(3, true).log_level(), "error");
    }

    #[test]
    fn auto_resolves_by_terminal() {
        assert_eq!(OutputFormat::Auto.resolve(true), OutputFormat::Human);
        assert_eq!(OutputFormat::Auto.resolve(false), OutputFormat::Plain);
        assert_eq!(OutputFormat::Json.resolve(true), OutputFormat::Json);
    }
}
