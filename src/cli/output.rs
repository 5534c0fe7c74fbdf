//! Output formatting utilities
//!
//! Provides table and JSON output formatting for CLI commands.

use crate::cli::args::OutputFormat;
use crate::config::{CallbackSettings, ConfigurationField, ConfigurationRequest};
use crate::delivery::DeliveryOutcome;
use crate::error::Result;
use serde::Serialize;
use std::io::{self, Write};

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Table => {
            writeln!(handle, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data)?;
            writeln!(handle, "{}", json)?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;
}

/// Requested configuration fields for display
#[derive(Debug, Clone, Serialize)]
pub struct FieldList {
    pub callback: String,
    pub fields: Vec<ConfigurationField>,
}

impl FieldList {
    /// Build from a callback's requested configuration
    pub fn new(callback: &str, request: &ConfigurationRequest) -> Self {
        Self {
            callback: callback.to_string(),
            fields: request.fields().to_vec(),
        }
    }
}

impl TableDisplay for FieldList {
    fn to_table(&self) -> String {
        let mut out = format!("{}\n", self.callback);
        out.push_str(&format!(
            "  {:<10} {:<8} {:<9} {:<34} {}\n",
            "NAME", "KIND", "REQUIRED", "DEFAULT", "DESCRIPTION"
        ));
        for field in &self.fields {
            out.push_str(&format!(
                "  {:<10} {:<8} {:<9} {:<34} {}\n",
                field.name,
                field.kind.to_string(),
                if field.required { "yes" } else { "no" },
                field.default_value.to_string(),
                field.description
            ));
        }
        out.trim_end().to_string()
    }
}

/// Effective settings for display
#[derive(Debug, Clone, Serialize)]
pub struct SettingsReport {
    pub valid: bool,
    pub settings: CallbackSettings,
}

impl TableDisplay for SettingsReport {
    fn to_table(&self) -> String {
        let filelog = self
            .settings
            .filelog
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(disabled)".to_string());

        format!(
            "Configuration OK\n  Recipients: {}\n  Daemon:     {}:{}\n  Debug log:  {}",
            self.settings.nicks.join(", "),
            self.settings.host,
            self.settings.port,
            filelog
        )
    }
}

/// Delivery outcome for display
#[derive(Debug, Clone, Serialize)]
pub struct OutcomeReport {
    pub outcome: String,
    pub recipients: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl OutcomeReport {
    /// Summarize an outcome
    pub fn new(outcome: &DeliveryOutcome, recipients: usize) -> Self {
        let detail = match outcome {
            DeliveryOutcome::Success => None,
            DeliveryOutcome::MalformedReply { response } => Some(response.clone()),
            DeliveryOutcome::TransportError(e) => Some(e.to_string()),
        };

        Self {
            outcome: outcome.label().to_string(),
            recipients,
            detail,
        }
    }
}

impl TableDisplay for OutcomeReport {
    fn to_table(&self) -> String {
        match &self.detail {
            None => format!("Delivered to {} recipient(s)", self.recipients),
            Some(detail) => format!("Delivery {}: {}", self.outcome, detail.trim_end()),
        }
    }
}
