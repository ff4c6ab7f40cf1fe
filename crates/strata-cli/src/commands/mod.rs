//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod list;
pub mod show;

use strata_core::{
    domain::{DescriptorFactory, Namespace},
    error::StrataError,
};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Root namespace: `--namespace` wins over `project.root_namespace`.
///
/// A bad flag is a user error; a bad config value is a configuration error.
pub(crate) fn root_namespace(flag: Option<&str>, config: &AppConfig) -> CliResult<Namespace> {
    match flag {
        Some(raw) => Namespace::parse(raw).map_err(|e| CliError::Core(e.into())),
        None => Namespace::parse(&config.project.root_namespace).map_err(|e| {
            CliError::Core(StrataError::Configuration {
                message: format!("project.root_namespace: {e}"),
            })
        }),
    }
}

/// Factory using `generator.base_controller`.
pub(crate) fn descriptor_factory(config: &AppConfig) -> CliResult<DescriptorFactory> {
    DescriptorFactory::with_base_controller(&config.generator.base_controller).map_err(|e| {
        CliError::Core(StrataError::Configuration {
            message: format!("generator.base_controller: {e}"),
        })
    })
}
