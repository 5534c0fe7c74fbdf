//! Alert message composition
//!
//! Turns the host's alert context into the text delivered to recipients and
//! the wire request sent to the recipient daemon.

mod composer;
mod request;
mod types;

pub use composer::{compose, compose_event, error_message, render_trace};
pub use request::{format_request, parse_recipients};
pub use types::{AlertContext, AlertEvent};
