//! Requested configuration fields
//!
//! Describes the options the callback asks the host for, with defaults.

use super::{ConfigValue, Configuration, FILELOG, HOST, NICKS, PORT};
use serde::Serialize;
use std::fmt;

/// Kind of value a field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Free-form text
    Text,
    /// Integer number
    Number,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Number => write!(f, "number"),
        }
    }
}

/// Descriptor for a single configuration option
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigurationField {
    /// Configuration key
    pub name: String,
    /// Label shown to operators
    pub human_name: String,
    /// Default value
    pub default_value: ConfigValue,
    /// Help text
    pub description: String,
    /// Whether the host must supply a value
    pub required: bool,
    /// Value kind
    pub kind: FieldKind,
}

impl ConfigurationField {
    /// Required text field
    pub fn text(name: &str, human_name: &str, default_value: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            human_name: human_name.to_string(),
            default_value: ConfigValue::from(default_value),
            description: description.to_string(),
            required: true,
            kind: FieldKind::Text,
        }
    }

    /// Required number field
    pub fn number(name: &str, human_name: &str, default_value: i64, description: &str) -> Self {
        Self {
            name: name.to_string(),
            human_name: human_name.to_string(),
            default_value: ConfigValue::Number(default_value),
            description: description.to_string(),
            required: true,
            kind: FieldKind::Number,
        }
    }

    /// Mark the field as optional
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// Set of fields a callback requests from the host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigurationRequest {
    fields: Vec<ConfigurationField>,
}

impl ConfigurationRequest {
    /// Create an empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field
    pub fn add_field(&mut self, field: ConfigurationField) {
        self.fields.push(field);
    }

    /// Fields in declaration order
    pub fn fields(&self) -> &[ConfigurationField] {
        &self.fields
    }

    /// Look up a field by key
    pub fn field(&self, name: &str) -> Option<&ConfigurationField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Configuration populated with every field's default
    pub fn defaults(&self) -> Configuration {
        let mut config = Configuration::new();
        for field in &self.fields {
            config.set(field.name.clone(), field.default_value.clone());
        }
        config
    }
}

/// Fields requested by the Telegram alarm callback
pub fn telegram_fields() -> ConfigurationRequest {
    let mut request = ConfigurationRequest::new();
    request.add_field(ConfigurationField::text(
        NICKS,
        "Nicks",
        "Bob, Alice",
        "Nicks of notified developers (Firstname_Lastname Firstname2_Lastname2)",
    ));
    request.add_field(ConfigurationField::text(
        HOST,
        "Host",
        "localhost",
        "Host of tg-cli daemon",
    ));
    request.add_field(ConfigurationField::number(
        PORT,
        "Port",
        80,
        "Port of tg-cli daemon",
    ));
    request.add_field(
        ConfigurationField::text(
            FILELOG,
            "File log",
            "/tmp/telegramalarmcallback.log",
            "File path for debug logging",
        )
        .optional(),
    );
    request
}
