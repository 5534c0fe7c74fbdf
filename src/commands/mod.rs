//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod check;
pub mod fields;
pub mod send;

pub use check::run_check;
pub use fields::run_fields;
pub use send::run_send;

use crate::cli::Cli;
use crate::config::{ConfigBuilder, Configuration};
use crate::error::Result;

/// Resolve the configuration from defaults, the config file and CLI flags
pub fn load_configuration(cli: &Cli) -> Result<Configuration> {
    let config = ConfigBuilder::new()
        .with_file(cli.config.as_deref())?
        .with_nicks(cli.nicks.clone())
        .with_host(cli.host.clone())
        .with_port(cli.port)
        .with_filelog(cli.filelog.clone())
        .without_filelog(cli.no_filelog)
        .build();

    log::debug!("Resolved configuration: {:?}", config.source());
    Ok(config)
}
