//! Text response formatters for console commands.
//!
//! This module provides functions to format the host responses printed on
//! the console after each command.

use crate::notifications::{Alert, AlertId, AlertState};

/// Formats the help message showing available commands.
///
/// # Examples
///
/// ```
/// # use toaster::commands::text_response::format_help;
/// let help = format_help();
/// assert!(help.contains("Commands:"));
/// ```
pub fn format_help() -> String {
    let body = "Commands:\n\
        - `!toast show <severity> <message>`: show an alert\n\
        - `!toast timed <duration_ms> <severity> <message>`: show an alert with a custom duration\n\
        - `!toast legacy <severity> <message>`: show an alert through the legacy entry point\n\
        - `!toast enter <id>`: move the pointer over an alert\n\
        - `!toast leave <id>`: move the pointer away from an alert\n\
        - `!toast close <id>`: close an alert\n\
        - `!toast list`: list the displayed alerts\n\
        - `!toast wait <ms>`: let the page idle\n\
        - `!toast help`: show this help message\n\n\
        Severities are `success`, `error` (or `danger`), `warning` and `info`. Alerts dismiss themselves after their duration, \
        hovering pauses the countdown and leaving restarts a short one.";

    body.to_owned()
}

/// Formats a response for an unknown command.
pub fn format_unknown_command() -> String {
    "Unknown command. Type `!toast help` for more information.".to_owned()
}

/// Formats an error message for an invalid show command.
pub fn format_invalid_show() -> String {
    "Invalid show command. Usage: `!toast show <severity> <message>`".to_owned()
}

/// Formats an error message for an invalid timed command.
pub fn format_invalid_timed() -> String {
    "Invalid timed command. Usage: `!toast timed <duration_ms> <severity> <message>`".to_owned()
}

/// Formats an error message for an invalid legacy command.
pub fn format_invalid_legacy() -> String {
    "Invalid legacy command. Usage: `!toast legacy <severity> <message>`".to_owned()
}

/// Formats an error message for an invalid enter, leave or close command.
pub fn format_invalid_pointer() -> String {
    "Invalid alert command. Usage: `!toast enter|leave|close <id>`".to_owned()
}

/// Formats an error message for an invalid wait command.
pub fn format_invalid_wait() -> String {
    "Invalid wait command. Usage: `!toast wait <ms>`".to_owned()
}

/// Formats the response once an alert was shown.
pub fn format_alert_shown(id: AlertId) -> String {
    format!("Alert #{} shown.", id)
}

/// Formats the response when a command targets an alert that is not displayed.
pub fn format_alert_not_found(id: AlertId) -> String {
    format!("No alert #{} is displayed.", id)
}

/// Formats the response when no legacy entry point exists on the page.
pub fn format_legacy_missing() -> String {
    "No legacy entry point on this page.".to_owned()
}

/// Formats the list of displayed alerts, oldest first.
///
/// # Examples
///
/// ```
/// # use toaster::commands::text_response::format_alerts;
/// assert_eq!(format_alerts(&[]), "No alerts displayed.");
/// ```
pub fn format_alerts(alerts: &[Alert]) -> String {
    if alerts.is_empty() {
        return "No alerts displayed.".to_owned();
    }

    let lines: Vec<String> = alerts
        .iter()
        .map(|alert| {
            let state = match alert.state {
                AlertState::Visible if alert.progress_paused => "paused",
                AlertState::Visible => "visible",
                AlertState::Removing => "removing",
                AlertState::Removed => "removed",
            };
            format!(
                "- #{} {} {}: {} ({}, {} ms)",
                alert.id,
                alert.icon(),
                alert.title(),
                alert.message,
                state,
                alert.duration.as_millis()
            )
        })
        .collect();

    format!("Displayed alerts:\n{}", lines.join("\n"))
}
