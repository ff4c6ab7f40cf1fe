//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`STRATA__PROJECT__ROOT_NAMESPACE=Acme`)
//! 3. `--config FILE`, or else `.strata.toml` in the CWD over the global file
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use strata_core::domain::{DEFAULT_BASE_CONTROLLER, Namespace};

/// Environment variable prefix; sections and keys are separated by `__`.
pub const ENV_PREFIX: &str = "STRATA";

/// Name of the per-project configuration file.
pub const LOCAL_CONFIG_FILE: &str = ".strata.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where generated files go.
    pub project: ProjectConfig,
    /// Generator options.
    pub generator: GeneratorConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Log file settings.
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Project root.
    pub dir: PathBuf,
    /// Source directory relative to the project root (PSR-4 base).
    pub source_dir: PathBuf,
    /// Namespace mapped to `source_dir`.
    pub root_namespace: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            source_dir: PathBuf::from("src"),
            root_namespace: Namespace::DEFAULT.into(),
        }
    }
}

impl ProjectConfig {
    /// `<dir>/<source_dir>`, with `dir` optionally overridden.
    pub fn source_root(&self, project_dir: Option<&Path>) -> PathBuf {
        project_dir.unwrap_or(&self.dir).join(&self.source_dir)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Base class of generated controllers.
    pub base_controller: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_controller: DEFAULT_BASE_CONTROLLER.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`; `--output-format` wins.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Append JSON log lines to this file in addition to stderr.
    pub file: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration: defaults, then config files, then environment.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist.  Without it, the global and local files are both optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&Self::default()).context("Invalid built-in defaults")?);

        builder = match config_file {
            Some(path) => builder.add_source(File::from(path.as_path()).required(true)),
            None => builder
                .add_source(File::from(Self::config_path()).required(false))
                .add_source(File::from(Self::local_config_path()).required(false)),
        };

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize::<Self>()
            .context("Configuration has invalid values")?;

        tracing::debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.strata.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "strata", "strata")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(Self::local_config_path)
    }

    /// Path to the per-project configuration file.
    pub fn local_config_path() -> PathBuf {
        PathBuf::from(LOCAL_CONFIG_FILE)
    }

    /// The file whose values win: explicit, else local if present, else global.
    pub fn active_path(config_file: Option<&PathBuf>) -> PathBuf {
        match config_file {
            Some(path) => path.clone(),
            None if Self::local_config_path().exists() => Self::local_config_path(),
            None => Self::config_path(),
        }
    }
}
