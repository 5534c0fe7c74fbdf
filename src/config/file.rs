//! Configuration file loading
//!
//! Handles loading the callback configuration from TOML files.
//!
//! ```toml
//! [callback]
//! nicks = "Bob, Alice"
//! host = "localhost"
//! port = 4458
//! filelog = "/tmp/telegramalarmcallback.log"
//! ```

use crate::config::Configuration;
use crate::error::ConfigError;
use serde::Deserialize;

use std::path::{Path, PathBuf};

/// On-disk layout
#[derive(Debug, Default, Deserialize)]
struct FileLayout {
    #[serde(default)]
    callback: Configuration,
}

/// Configuration file handler
pub struct ConfigFile;

impl ConfigFile {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Configuration, ConfigError> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Configuration, ConfigError> {
        let layout: FileLayout = toml::from_str(content)?;
        Ok(layout.callback)
    }

    /// Load configuration from default locations
    pub fn load_default() -> Option<Configuration> {
        for path in Self::default_paths() {
            if path.exists() {
                match Self::load(&path) {
                    Ok(config) => {
                        log::info!("Loaded config from {}", path.display());
                        return Some(config);
                    }
                    Err(e) => log::warn!("Ignoring {}: {}", path.display(), e),
                }
            }
        }
        None
    }

    /// Get default configuration file paths
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // System-wide config
        paths.push(PathBuf::from("/etc/tgalarm/config.toml"));

        // User config
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("tgalarm").join("config.toml"));
        }

        // Current directory
        paths.push(PathBuf::from("tgalarm.toml"));

        paths
    }
}
