//! Alarm callback plugin interface
//!
//! A host monitoring system drives callbacks through [`AlarmCallback`]:
//! it asks for the fields it should collect, validates and hands over the
//! configuration, then invokes [`AlarmCallback::call`] once per fired alert.

mod telegram;

pub use telegram::TelegramAlarmCallback;

use crate::alerts::AlertContext;
use crate::config::{ConfigValue, Configuration, ConfigurationRequest};
use crate::delivery::DeliveryOutcome;
use crate::error::{CallbackError, ConfigError};
use std::collections::BTreeMap;

/// Capabilities a host expects from an alarm callback
///
/// `call` may run concurrently from several host threads on a shared
/// instance, and must never fail: problems are recorded, not returned.
pub trait AlarmCallback: Send + Sync {
    /// Capture the configuration and acquire long-lived resources
    fn initialize(&mut self, configuration: Configuration) -> Result<(), CallbackError>;

    /// Deliver one fired alert
    fn call(&self, event: &dyn AlertContext) -> DeliveryOutcome;

    /// Fields the host should collect from the operator
    fn requested_configuration(&self) -> ConfigurationRequest;

    /// Pre-flight validation of the captured configuration
    fn check_configuration(&self) -> Result<(), ConfigError>;

    /// Callback name shown by the host
    fn name(&self) -> &str;

    /// Configuration as captured at initialization
    fn attributes(&self) -> &BTreeMap<String, ConfigValue>;
}
