//! Configuration system
//!
//! Host-style key/value configuration, the typed settings snapshot derived
//! from it, TOML file loading and CLI argument merging.

pub mod builder;
pub mod fields;
pub mod file;

pub use builder::ConfigBuilder;
pub use fields::{ConfigurationField, ConfigurationRequest, FieldKind};
pub use file::ConfigFile;

use crate::alerts::parse_recipients;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Recipient list key
pub const NICKS: &str = "nicks";
/// Daemon host key
pub const HOST: &str = "host";
/// Daemon port key
pub const PORT: &str = "port";
/// Debug log path key
pub const FILELOG: &str = "filelog";

/// A single configuration value as supplied by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// Integer value
    Number(i64),
    /// Text value
    Text(String),
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<u16> for ConfigValue {
    fn from(value: u16) -> Self {
        Self::Number(i64::from(value))
    }
}

/// Key/value configuration handed over by the host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration {
    source: BTreeMap<String, ConfigValue>,
}

impl Configuration {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from an existing map
    pub fn from_source(source: BTreeMap<String, ConfigValue>) -> Self {
        Self { source }
    }

    /// Set a value, replacing any previous one
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.source.insert(key.into(), value.into());
    }

    /// Remove a value
    pub fn remove(&mut self, key: &str) -> Option<ConfigValue> {
        self.source.remove(key)
    }

    /// Builder-style `set`
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Text value for `key`, if it is stored as text
    pub fn string(&self, key: &str) -> Option<&str> {
        match self.source.get(key) {
            Some(ConfigValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Integer value for `key`, if it is stored as a number
    pub fn int(&self, key: &str) -> Option<i64> {
        match self.source.get(key) {
            Some(ConfigValue::Number(n)) => Some(*n),
            _ => None,
        }
    }

    /// Whether `key` holds non-blank text
    pub fn string_is_set(&self, key: &str) -> bool {
        self.string(key).is_some_and(|s| !s.trim().is_empty())
    }

    /// Whether `key` holds a number
    pub fn int_is_set(&self, key: &str) -> bool {
        self.int(key).is_some()
    }

    /// Raw key/value map
    pub fn source(&self) -> &BTreeMap<String, ConfigValue> {
        &self.source
    }

    /// Overlay every value of `other` on top of this configuration
    pub fn merge(&mut self, other: &Configuration) {
        for (key, value) in &other.source {
            self.source.insert(key.clone(), value.clone());
        }
    }
}

/// Typed, validated snapshot of the callback configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallbackSettings {
    /// Ordered recipient identifiers
    pub nicks: Vec<String>,
    /// Recipient daemon host
    pub host: String,
    /// Recipient daemon port
    pub port: u16,
    /// Optional debug log file
    pub filelog: Option<PathBuf>,
}

impl CallbackSettings {
    /// Derive settings from a host configuration
    ///
    /// Fails when a required field is unset or the port does not fit in
    /// 1-65535.
    pub fn from_configuration(config: &Configuration) -> Result<Self, ConfigError> {
        validate(config)?;

        let raw_nicks = config.string(NICKS).unwrap_or_default();
        let host = config.string(HOST).unwrap_or_default().trim().to_string();
        let raw_port = config.int(PORT).unwrap_or_default();

        let port = u16::try_from(raw_port)
            .ok()
            .filter(|p| *p != 0)
            .ok_or_else(|| ConfigError::InvalidValue {
                key: PORT.to_string(),
                message: format!("{} is not between 1 and 65535", raw_port),
            })?;

        Ok(Self {
            nicks: parse_recipients(raw_nicks),
            host,
            port,
            filelog: filelog_path(config),
        })
    }
}

/// Pre-flight validation: every required field must be set
///
/// Checks `nicks`, `host` and `port` in that order and reports the first
/// missing one.
pub fn validate(config: &Configuration) -> Result<(), ConfigError> {
    if !config.string_is_set(NICKS) {
        return Err(ConfigError::MissingField(NICKS.to_string()));
    }

    if !config.string_is_set(HOST) {
        return Err(ConfigError::MissingField(HOST.to_string()));
    }

    if !config.int_is_set(PORT) {
        return Err(ConfigError::MissingField(PORT.to_string()));
    }

    Ok(())
}

/// Debug log path, if one is configured and non-empty
pub fn filelog_path(config: &Configuration) -> Option<PathBuf> {
    config
        .string(FILELOG)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> Configuration {
        Configuration::new()
            .with(NICKS, "Bob, Alice")
            .with(HOST, "localhost")
            .with(PORT, 4458)
    }

    #[test]
    fn test_validate_complete() {
        assert!(validate(&complete()).is_ok());
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let err = validate(&Configuration::new()).unwrap_err();
        assert_eq!(err, ConfigError::MissingField("nicks".to_string()));

        let mut config = complete();
        config.remove(HOST);
        config.remove(PORT);
        assert_eq!(
            validate(&config).unwrap_err().to_string(),
            "Assign host"
        );
    }

    #[test]
    fn test_validate_blank_nicks() {
        let config = complete().with(NICKS, "   ");
        assert_eq!(validate(&config).unwrap_err().to_string(), "Assign nicks");
    }

    #[test]
    fn test_validate_port_as_text_is_unset() {
        let config = complete().with(PORT, "4458");
        assert_eq!(validate(&config).unwrap_err().to_string(), "Assign port");
    }

    #[test]
    fn test_settings_from_configuration() {
        let settings = CallbackSettings::from_configuration(&complete()).unwrap();
        assert_eq!(settings.nicks, vec!["Bob", "Alice"]);
        assert_eq!(settings.host, "localhost");
        assert_eq!(settings.port, 4458);
        assert!(settings.filelog.is_none());
    }

    #[test]
    fn test_settings_reject_out_of_range_port() {
        for port in [0, -1, 65536] {
            let config = complete().with(PORT, port);
            let err = CallbackSettings::from_configuration(&config).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { .. }), "port {}", port);
        }
    }

    #[test]
    fn test_empty_filelog_disables_logging() {
        let config = complete().with(FILELOG, "");
        assert!(filelog_path(&config).is_none());

        let config = complete().with(FILELOG, "/tmp/tgalarm.log");
        assert_eq!(filelog_path(&config), Some(PathBuf::from("/tmp/tgalarm.log")));
    }

    #[test]
    fn test_merge_overrides() {
        let mut base = complete();
        base.merge(&Configuration::new().with(HOST, "daemon.internal"));
        assert_eq!(base.string(HOST), Some("daemon.internal"));
        assert_eq!(base.int(PORT), Some(4458));
    }
}
