//! tgalarm - Telegram alarm callback library
//!
//! This library delivers monitoring alerts to a tg-cli style recipient
//! daemon over a plain TCP text protocol. A host monitoring system drives it
//! through the [`callback::AlarmCallback`] trait.
//!
//! # Modules
//!
//! - [`alerts`]: Alert context, message composition and request formatting
//! - [`callback`]: Plugin interface and the Telegram callback
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`debug_log`]: Debug log file and report sinks
//! - [`delivery`]: TCP client for the recipient daemon
//! - [`error`]: Error types

pub mod alerts;
pub mod callback;
pub mod cli;
pub mod commands;
pub mod config;
pub mod debug_log;
pub mod delivery;
pub mod error;

#[cfg(test)]
pub mod mock;

pub use callback::{AlarmCallback, TelegramAlarmCallback};
pub use error::{AppError, Result};
