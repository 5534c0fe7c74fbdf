//! Send command implementation
//!
//! Fires one alert through the callback, the way a host would.

use crate::alerts::AlertEvent;
use crate::callback::{AlarmCallback, TelegramAlarmCallback};
use crate::cli::args::SendArgs;
use crate::cli::output::{print_output, OutcomeReport};
use crate::cli::Cli;
use crate::commands::load_configuration;
use crate::error::Result;

/// Execute the send command
pub fn run_send(cli: &Cli, args: &SendArgs) -> Result<()> {
    let configuration = load_configuration(cli)?;

    let mut callback = TelegramAlarmCallback::new();
    callback.initialize(configuration)?;
    callback.check_configuration()?;

    let event = AlertEvent {
        stream_title: args.title.clone(),
        description: Some(args.description.clone()),
        matching_messages: args.count,
    };

    let outcome = callback.call(&event);
    let recipients = callback.settings().map(|s| s.nicks.len()).unwrap_or(0);

    print_output(&OutcomeReport::new(&outcome, recipients), cli.format)?;

    Ok(())
}
