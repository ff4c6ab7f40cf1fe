//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "strata",
    bin_name = "strata",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Layered entity scaffolding for PHP projects",
    long_about = "Strata generates the Domain, Application, Infrastructure and \
                  Framework skeleton classes for one entity of a Symfony-style \
                  PHP project.",
    after_help = "EXAMPLES:\n\
        \x20 strata generate Product\n\
        \x20 strata generate Invoice --project-dir ../shop --dry-run\n\
        \x20 strata show Product --role dbal-repository\n\
        \x20 strata completions bash > /usr/share/bash-completion/completions/strata",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the source files for an entity.
    #[command(
        visible_aliases = ["g", "make"],
        about = "Generate the scaffold for an entity",
        after_help = "EXAMPLES:\n\
            \x20 strata generate Product\n\
            \x20 strata g Invoice --namespace Acme --force\n\
            \x20 strata make Order --dry-run --format json"
    )]
    Generate(GenerateArgs),

    /// Print rendered sources without writing them.
    #[command(
        about = "Preview rendered sources",
        after_help = "EXAMPLES:\n\
            \x20 strata show Product\n\
            \x20 strata show Product --role controller"
    )]
    Show(ShowArgs),

    /// List the types a scaffold contains.
    #[command(
        visible_alias = "ls",
        about = "List scaffold roles",
        after_help = "EXAMPLES:\n\
            \x20 strata list\n\
            \x20 strata list --format csv"
    )]
    List(ListArgs),

    /// Initialise a Strata configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 strata init           # default location\n\
            \x20 strata init --global  # global config\n\
            \x20 strata init --local   # .strata.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 strata completions bash > ~/.local/share/bash-completion/completions/strata\n\
            \x20 strata completions zsh  > ~/.zfunc/_strata\n\
            \x20 strata completions fish > ~/.config/fish/completions/strata.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Strata configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 strata config get project.root_namespace\n\
            \x20 strata config list\n\
            \x20 strata config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `strata generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Entity name, e.g. `Product`.
    #[arg(value_name = "ENTITY", help = "Entity name, e.g. Product")]
    pub entity: String,

    /// Project root; files land in `<DIR>/<project.source_dir>`.
    #[arg(
        short = 'p',
        long = "project-dir",
        value_name = "DIR",
        help = "Project root directory (default: project.dir from config)"
    )]
    pub project_dir: Option<PathBuf>,

    /// Root namespace of the source directory.
    #[arg(
        short = 'n',
        long = "namespace",
        value_name = "NS",
        help = "Root namespace (default: project.root_namespace from config)"
    )]
    pub namespace: Option<String>,

    /// Overwrite files that already exist (destructive).
    #[arg(long = "force", help = "Overwrite existing files")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Report format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Report format"
    )]
    pub format: ReportFormat,
}

/// Output format for the `generate` report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// `path | class` table.
    Table,
    /// JSON document.
    Json,
}

// ── show ──────────────────────────────────────────────────────────────────────

/// Arguments for `strata show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Entity name, e.g. `Product`.
    #[arg(value_name = "ENTITY", help = "Entity name, e.g. Product")]
    pub entity: String,

    /// Only print the file for this role (see `strata list`).
    #[arg(
        short = 'r',
        long = "role",
        value_name = "ROLE",
        help = "Only show one role, e.g. dbal-repository"
    )]
    pub role: Option<String>,

    /// Root namespace of the source directory.
    #[arg(
        short = 'n',
        long = "namespace",
        value_name = "NS",
        help = "Root namespace (default: project.root_namespace from config)"
    )]
    pub namespace: Option<String>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `strata list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One role per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `strata init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the global config location.
    #[arg(long = "global", help = "Create global configuration")]
    pub global: bool,

    /// Write to `.strata.toml` in the current directory.
    #[arg(
        long = "local",
        conflicts_with = "global",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `strata completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `strata config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `project.root_namespace`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_generate_command() {
        let cli = Cli::parse_from([
            "strata",
            "generate",
            "Product",
            "--project-dir",
            "/srv/shop",
            "--force",
        ]);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.entity, "Product");
                assert_eq!(args.project_dir, Some(PathBuf::from("/srv/shop")));
                assert!(args.force);
                assert!(!args.dry_run);
                assert_eq!(args.format, ReportFormat::Table);
            }
            other => panic!("expected Generate, got {other:?}"),
        }
    }

    #[test]
    fn generate_aliases() {
        for alias in ["g", "make"] {
            let cli = Cli::parse_from(["strata", alias, "Invoice", "--dry-run"]);
            assert!(matches!(cli.command, Commands::Generate(ref a) if a.dry_run));
        }
    }

    #[test]
    fn generate_requires_entity() {
        assert!(Cli::try_parse_from(["strata", "generate"]).is_err());
    }

    #[test]
    fn show_accepts_role() {
        let cli = Cli::parse_from(["strata", "show", "Product", "--role", "controller"]);
        match cli.command {
            Commands::Show(args) => assert_eq!(args.role.as_deref(), Some("controller")),
            other => panic!("expected Show, got {other:?}"),
        }
    }

    #[test]
    fn init_global_and_local_conflict() {
        assert!(Cli::try_parse_from(["strata", "init", "--global", "--local"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["strata", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
