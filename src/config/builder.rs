//! Configuration builder
//!
//! Merges field defaults, configuration files and CLI arguments.

use crate::config::{fields, ConfigFile, Configuration, FILELOG, HOST, NICKS, PORT};
use crate::error::ConfigError;

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Configuration,
}

impl ConfigBuilder {
    /// Create a new builder seeded with the requested field defaults
    pub fn new() -> Self {
        Self {
            config: fields::telegram_fields().defaults(),
        }
    }

    /// Overlay configuration from a file
    ///
    /// An explicit path must load; without one the default locations are
    /// searched and a missing file is not an error.
    pub fn with_file(mut self, path: Option<&str>) -> Result<Self, ConfigError> {
        let file_config = match path {
            Some(path) => Some(ConfigFile::load(path)?),
            None => ConfigFile::load_default(),
        };

        if let Some(cfg) = file_config {
            self.config.merge(&cfg);
        }

        Ok(self)
    }

    /// Override with CLI recipient list
    pub fn with_nicks(mut self, nicks: Option<String>) -> Self {
        if let Some(n) = nicks {
            self.config.set(NICKS, n);
        }
        self
    }

    /// Override with CLI daemon host
    pub fn with_host(mut self, host: Option<String>) -> Self {
        if let Some(h) = host {
            self.config.set(HOST, h);
        }
        self
    }

    /// Override with CLI daemon port
    pub fn with_port(mut self, port: Option<u16>) -> Self {
        if let Some(p) = port {
            self.config.set(PORT, p);
        }
        self
    }

    /// Override with CLI debug log path
    pub fn with_filelog(mut self, filelog: Option<String>) -> Self {
        if let Some(f) = filelog {
            self.config.set(FILELOG, f);
        }
        self
    }

    /// Disable the debug log regardless of other sources
    pub fn without_filelog(mut self, disable: bool) -> Self {
        if disable {
            self.config.remove(FILELOG);
        }
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Configuration {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builder_defaults() {
        let config = ConfigBuilder::new().build();
        assert_eq!(config.string(NICKS), Some("Bob, Alice"));
        assert_eq!(config.int(PORT), Some(80));
    }

    #[test]
    fn test_builder_overrides() {
        let config = ConfigBuilder::new()
            .with_nicks(Some("Carol".to_string()))
            .with_host(Some("tg.internal".to_string()))
            .with_port(Some(4458))
            .without_filelog(true)
            .build();

        assert_eq!(config.string(NICKS), Some("Carol"));
        assert_eq!(config.string(HOST), Some("tg.internal"));
        assert_eq!(config.int(PORT), Some(4458));
        assert!(config.string(FILELOG).is_none());
    }

    #[test]
    fn test_builder_file_then_cli() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[callback]\nhost = \"file-host\"\nport = 1234").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = ConfigBuilder::new()
            .with_file(Some(path.as_str()))
            .unwrap()
            .with_port(Some(4321))
            .build();

        assert_eq!(config.string(HOST), Some("file-host"));
        assert_eq!(config.int(PORT), Some(4321));
        assert_eq!(config.string(NICKS), Some("Bob, Alice"));
    }

    #[test]
    fn test_builder_explicit_missing_file_fails() {
        let result = ConfigBuilder::new().with_file(Some("/nonexistent/tgalarm.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
