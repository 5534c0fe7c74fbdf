//! Alert text composition

use super::types::AlertContext;
use crate::error::CompositionError;
use std::error::Error;
use std::fmt::Write as _;

/// Token in the description that the stream title replaces
const STREAM_TOKEN: &str = "Stream";

/// Substitute the stream title into the description
///
/// Only the first occurrence of `Stream` is replaced. Without a title, or
/// without the token, the description is returned unchanged.
pub fn compose(stream_title: Option<&str>, description: &str) -> String {
    match stream_title {
        Some(title) => description.replacen(STREAM_TOKEN, title, 1),
        None => description.to_string(),
    }
}

/// Compose the alert text from a host alert context
pub fn compose_event(event: &dyn AlertContext) -> Result<String, CompositionError> {
    let description = event.result_description()?;
    Ok(compose(event.stream_title(), description))
}

/// Render an error and its source chain
pub fn render_trace(err: &dyn Error) -> String {
    let mut trace = format!("{:?}\n", err);
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(trace, "Caused by: {}", cause);
        source = cause.source();
    }
    trace
}

/// Message delivered in place of the alert text when composition fails
pub fn error_message(err: &dyn Error) -> String {
    format!("Error: {}\n{}\n", err, render_trace(err))
}
