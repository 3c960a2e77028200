//! Terminal rendering of the notification container.
//!
//! This module provides the [`TerminalRenderer`], which prints one line per
//! container event on the standard output. It is the sink used by the host
//! binary.

use log::debug;

use crate::{
    notifications::{Alert, AlertId},
    render::Renderer,
};

/// Renderer printing container events on the standard output.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use toaster::render::TerminalRenderer;
///
/// let renderer = Arc::new(TerminalRenderer::new());
/// ```
#[derive(Default)]
pub struct TerminalRenderer;

impl TerminalRenderer {
    /// Creates a new [`TerminalRenderer`].
    pub fn new() -> Self {
        TerminalRenderer
    }
}

impl Renderer for TerminalRenderer {
    fn create_container(&self) {
        debug!("notification container created");
    }

    fn append(&self, alert: &Alert) {
        println!("{}", format_alert(alert));
    }

    fn pause_progress(&self, id: AlertId) {
        println!("{}", format_event(id, "paused"));
    }

    fn resume_progress(&self, id: AlertId) {
        println!("{}", format_event(id, "resumed"));
    }

    fn start_removal(&self, id: AlertId) {
        println!("{}", format_event(id, "removing"));
    }

    fn detach(&self, id: AlertId) {
        println!("{}", format_event(id, "removed"));
    }

    fn hide_server_messages(&self) {
        debug!("server-rendered messages hidden");
    }
}

/// Formats a newly mounted alert: `[#id] ✓ Success: message`.
pub fn format_alert(alert: &Alert) -> String {
    format!(
        "[#{}] {} {}: {}",
        alert.id,
        alert.icon(),
        alert.title(),
        alert.message
    )
}

/// Formats a lifecycle event of an alert: `[#id] removing`.
pub fn format_event(id: AlertId, event: &str) -> String {
    format!("[#{}] {}", id, event)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::notifications::Severity;

    #[test]
    fn test_format_alert() {
        let alert = Alert::new(
            AlertId(3),
            Severity::Error,
            "Payment failed".to_string(),
            Duration::from_millis(5000),
        );

        assert_eq!(format_alert(&alert), "[#3] ✕ Error: Payment failed");
    }

    #[test]
    fn test_format_alert_with_empty_message() {
        let alert = Alert::new(
            AlertId(1),
            Severity::Info,
            String::new(),
            Duration::from_millis(5000),
        );

        assert_eq!(format_alert(&alert), "[#1] i Information: ");
    }

    #[test]
    fn test_format_event() {
        assert_eq!(format_event(AlertId(12), "removing"), "[#12] removing");
    }
}
