//! Telegram alarm callback
//!
//! Sends alert text to a tg-cli style daemon, one `msg` line per recipient.

use super::AlarmCallback;
use crate::alerts::{compose_event, error_message, format_request, render_trace, AlertContext};
use crate::config::{
    self, fields, CallbackSettings, ConfigValue, Configuration, ConfigurationRequest,
};
use crate::debug_log::{ConsoleSink, DebugLog, ReportSink};
use crate::delivery::{DeliveryClient, DeliveryOutcome};
use crate::error::{CallbackError, ConfigError, DeliveryError};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Name reported to the host
pub const CALLBACK_NAME: &str = "TelegramAlarmCallback";

/// Alarm callback delivering alerts through a recipient daemon
pub struct TelegramAlarmCallback {
    configuration: Configuration,
    settings: Result<CallbackSettings, ConfigError>,
    debug_log: Option<DebugLog>,
    client: DeliveryClient,
    sink: Arc<dyn ReportSink>,
}

impl TelegramAlarmCallback {
    /// Create an uninitialized callback reporting to the console
    pub fn new() -> Self {
        Self {
            configuration: Configuration::new(),
            settings: Err(ConfigError::MissingField(config::NICKS.to_string())),
            debug_log: None,
            client: DeliveryClient::new(),
            sink: Arc::new(ConsoleSink),
        }
    }

    /// Replace the sink used when no debug log is configured
    pub fn with_sink(mut self, sink: Arc<dyn ReportSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Replace the delivery client
    pub fn with_client(mut self, client: DeliveryClient) -> Self {
        self.client = client;
        self
    }

    /// Settings derived at initialization
    pub fn settings(&self) -> Result<&CallbackSettings, &ConfigError> {
        self.settings.as_ref()
    }

    /// Debug log, if one is open
    pub fn debug_log(&self) -> Option<&DebugLog> {
        self.debug_log.as_ref()
    }

    /// Alert text to deliver, or the error rendering if composition fails
    fn compose_message(&self, event: &dyn AlertContext) -> String {
        match compose_event(event) {
            Ok(text) => format!("{}\n", text),
            Err(e) => {
                log::debug!("Composition failed, delivering error instead: {}", e);
                error_message(&e)
            }
        }
    }

    fn deliver(&self, message: &str) -> DeliveryOutcome {
        let settings = match &self.settings {
            Ok(settings) => settings,
            Err(e) => return DeliveryOutcome::TransportError(DeliveryError::Config(e.clone())),
        };

        let body = format_request(message, &settings.nicks);
        log::debug!(
            "Delivering to {} recipient(s) via {}:{}",
            settings.nicks.len(),
            settings.host,
            settings.port
        );
        self.client.deliver(&settings.host, settings.port, &body)
    }

    /// Record anything other than a success in exactly one place
    fn record(&self, outcome: &DeliveryOutcome) {
        match outcome {
            DeliveryOutcome::Success => {}
            DeliveryOutcome::MalformedReply { response } => {
                log::debug!("Daemon replied with unexpected answer");
                match &self.debug_log {
                    Some(_) => self.log_entry(&format!("Wrong answer:\n{}\n", response)),
                    None => self.sink.info(&format!("Wrong answer:\n{}\n", response)),
                }
            }
            DeliveryOutcome::TransportError(e) => {
                log::debug!("Delivery failed: {}", e);
                let trace = render_trace(e);
                match &self.debug_log {
                    Some(_) => self.log_entry(&trace),
                    None => self.sink.error(&trace),
                }
            }
        }
    }

    fn log_entry(&self, entry: &str) {
        if let Some(debug_log) = &self.debug_log {
            if let Err(e) = debug_log.append(entry) {
                log::warn!(
                    "Failed to write debug log {}: {}",
                    debug_log.path().display(),
                    e
                );
            }
        }
    }
}

impl Default for TelegramAlarmCallback {
    fn default() -> Self {
        Self::new()
    }
}

impl AlarmCallback for TelegramAlarmCallback {
    fn initialize(&mut self, configuration: Configuration) -> Result<(), CallbackError> {
        self.settings = CallbackSettings::from_configuration(&configuration);
        self.debug_log = match config::filelog_path(&configuration) {
            Some(path) => match DebugLog::open(&path) {
                Ok(debug_log) => Some(debug_log),
                Err(e) => {
                    log::debug!("Debug log disabled: {}", e);
                    self.sink.error(&format!(
                        "Unable to open debug log {}: {}",
                        path.display(),
                        e
                    ));
                    None
                }
            },
            None => None,
        };
        self.configuration = configuration;
        Ok(())
    }

    fn call(&self, event: &dyn AlertContext) -> DeliveryOutcome {
        log::debug!(
            "Alert fired with {} matching message(s)",
            event.matching_message_count()
        );

        let message = self.compose_message(event);
        self.log_entry(&format!("{}\n", message));

        let outcome = self.deliver(&message);
        self.record(&outcome);
        outcome
    }

    fn requested_configuration(&self) -> ConfigurationRequest {
        fields::telegram_fields()
    }

    fn check_configuration(&self) -> Result<(), ConfigError> {
        config::validate(&self.configuration)
    }

    fn name(&self) -> &str {
        CALLBACK_NAME
    }

    fn attributes(&self) -> &BTreeMap<String, ConfigValue> {
        self.configuration.source()
    }
}
