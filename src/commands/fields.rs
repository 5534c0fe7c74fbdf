//! Fields command implementation
//!
//! Lists the configuration fields the callback asks the host for.

use crate::callback::{AlarmCallback, TelegramAlarmCallback};
use crate::cli::args::OutputFormat;
use crate::cli::output::{print_output, FieldList};
use crate::error::Result;

/// Execute the fields command
pub fn run_fields(format: OutputFormat) -> Result<()> {
    let callback = TelegramAlarmCallback::new();
    let list = FieldList::new(callback.name(), &callback.requested_configuration());

    print_output(&list, format)?;

    Ok(())
}
