//! Loading of server-rendered messages.
//!
//! This module provides the [`MessageLoader`] reading the messages a page was
//! rendered with, and the [`ServerMessage`] they are made of. The page host
//! converts them into alerts once the page is ready.

use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::notifications::Severity;

/// A message rendered by the server into the page.
///
/// `tags` holds the CSS classes of the rendered block, for instance
/// `alert alert-danger`. The severity is read from them.
///
/// # Examples
///
/// ```
/// # use toaster::notifications::{ServerMessage, Severity};
/// let message = ServerMessage {
///     tags: "alert-danger".to_string(),
///     text: "  Payment failed ".to_string(),
/// };
/// assert_eq!(message.severity(), Severity::Error);
/// assert_eq!(message.text(), "Payment failed");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerMessage {
    /// CSS classes of the rendered block.
    #[serde(default)]
    pub tags: String,
    /// Text content of the rendered block.
    pub text: String,
}

impl ServerMessage {
    /// Returns the severity named by the tags, [`Severity::Info`] if none.
    pub fn severity(&self) -> Severity {
        Severity::from_css_classes(&self.tags)
    }

    /// Returns the text without surrounding whitespace.
    pub fn text(&self) -> &str {
        self.text.trim()
    }
}

/// Handles loading server-rendered messages from disk.
///
/// Messages are stored as a JSON array:
///
/// ```json
/// [
///   { "tags": "alert alert-success", "text": "Order placed" },
///   { "tags": "alert alert-danger", "text": "Payment failed" }
/// ]
/// ```
///
/// Loading never fails: a missing or corrupted file yields no messages, so a
/// page always becomes ready.
#[derive(Clone)]
pub struct MessageLoader {
    /// Path to the JSON file holding the messages.
    path: String,
}

impl MessageLoader {
    /// Creates a new `MessageLoader` for the specified file path.
    pub fn new(path: String) -> Self {
        MessageLoader { path }
    }

    /// Loads the messages from disk.
    ///
    /// # Error Handling
    ///
    /// - If the file doesn't exist: logs a warning and returns no messages
    /// - If deserialization fails: logs an error and returns no messages
    pub async fn load(&self) -> Vec<ServerMessage> {
        let Ok(serialized_messages) = fs::read_to_string(&self.path).await else {
            warn!("no server messages found at {}", self.path);
            return Vec::new();
        };

        let messages: Vec<ServerMessage> = match serde_json::from_str(&serialized_messages) {
            Ok(messages) => messages,
            Err(e) => {
                error!("failed to deserialize server messages: {}", e);
                return Vec::new();
            }
        };

        info!("loaded {} server messages", messages.len());

        messages
    }
}
