//! Alert event types
//!
//! The data a host hands to the callback when an alert fires.

use crate::error::CompositionError;
use serde::{Deserialize, Serialize};

/// Read access to the context of a fired alert
///
/// Hosts implement this for their own event types. Reading the description
/// may fail; the callback turns such failures into an error message instead
/// of dropping the alert.
pub trait AlertContext: Send + Sync {
    /// Title of the stream the alert belongs to, if it has one
    fn stream_title(&self) -> Option<&str>;

    /// Human-readable description of the check result
    fn result_description(&self) -> Result<&str, CompositionError>;

    /// Number of messages that matched the alert condition
    fn matching_message_count(&self) -> usize;
}

/// Plain alert event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertEvent {
    /// Stream title
    pub stream_title: Option<String>,
    /// Result description
    pub description: Option<String>,
    /// Matching message count
    #[serde(default)]
    pub matching_messages: usize,
}

impl AlertEvent {
    /// Create an event with a description and no stream title
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            stream_title: None,
            description: Some(description.into()),
            matching_messages: 0,
        }
    }

    /// Set the stream title
    pub fn with_stream_title(mut self, title: impl Into<String>) -> Self {
        self.stream_title = Some(title.into());
        self
    }

    /// Set the matching message count
    pub fn with_matching_messages(mut self, count: usize) -> Self {
        self.matching_messages = count;
        self
    }
}

impl AlertContext for AlertEvent {
    fn stream_title(&self) -> Option<&str> {
        self.stream_title.as_deref()
    }

    fn result_description(&self) -> Result<&str, CompositionError> {
        self.description
            .as_deref()
            .ok_or(CompositionError::MissingDescription)
    }

    fn matching_message_count(&self) -> usize {
        self.matching_messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_builder() {
        let event = AlertEvent::new("Stream had 3 messages")
            .with_stream_title("nginx")
            .with_matching_messages(3);

        assert_eq!(event.stream_title(), Some("nginx"));
        assert_eq!(event.result_description(), Ok("Stream had 3 messages"));
        assert_eq!(event.matching_message_count(), 3);
    }

    #[test]
    fn test_missing_description() {
        let event = AlertEvent::default();
        assert_eq!(
            event.result_description(),
            Err(CompositionError::MissingDescription)
        );
    }
}
