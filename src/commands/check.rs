//! Check command implementation
//!
//! Runs the pre-flight validation a host performs before activating the
//! callback.

use crate::cli::output::{print_output, SettingsReport};
use crate::cli::Cli;
use crate::commands::load_configuration;
use crate::config::{self, CallbackSettings};
use crate::error::Result;

/// Execute the check command
pub fn run_check(cli: &Cli) -> Result<()> {
    let configuration = load_configuration(cli)?;

    config::validate(&configuration)?;
    let settings = CallbackSettings::from_configuration(&configuration)?;

    let report = SettingsReport {
        valid: true,
        settings,
    };
    print_output(&report, cli.format)?;

    Ok(())
}
