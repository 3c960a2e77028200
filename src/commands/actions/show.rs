//! Show, timed and legacy command handlers.
//!
//! These commands request a new alert. `show` and `timed` go straight to the
//! notification manager, `legacy` goes through the page's legacy entry point
//! so that an entry point installed by the page itself is honored.

use std::time::Duration;

use log::debug;

use crate::commands::{
    CommandContext, CommandResult, PageAction, command::Command,
    text_response::format_legacy_missing,
};

/// Requests a new alert.
///
/// # Returns
///
/// - `Some(CommandResult)` with a [`PageAction::Show`] or [`PageAction::Legacy`]
/// - `Some(CommandResult)` with an explanation when the page has no legacy
///   entry point
/// - `None` if the command is not `Show`, `Timed` or `Legacy`
pub fn handle_show(context: &CommandContext, command: &Command) -> Option<CommandResult> {
    debug!("handling show command: {:?}", command);

    let action = match command {
        Command::Show(severity, message) => PageAction::Show {
            severity: *severity,
            message: message.clone(),
            duration: None,
        },
        Command::Timed(duration_ms, severity, message) => PageAction::Show {
            severity: *severity,
            message: message.clone(),
            duration: Some(Duration::from_millis(*duration_ms)),
        },
        Command::Legacy(marker, message) => {
            let Some(entry_point) = &context.legacy_entry_point else {
                return Some(CommandResult {
                    response: Some(format_legacy_missing()),
                    action: None,
                });
            };

            PageAction::Legacy {
                entry_point: entry_point.clone(),
                marker: marker.clone(),
                message: message.clone(),
            }
        }
        _ => return None,
    };

    Some(CommandResult {
        response: None,
        action: Some(action),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::Severity;

    fn create_test_context() -> CommandContext {
        CommandContext {
            alerts: Vec::new(),
            legacy_entry_point: Some("showMessage".to_string()),
        }
    }

    #[test]
    fn test_handle_show_uses_default_duration() {
        let command = Command::Show(Severity::Success, "Order placed".to_string());

        let result = handle_show(&create_test_context(), &command).unwrap();

        assert!(result.response.is_none());
        assert_eq!(
            result.action,
            Some(PageAction::Show {
                severity: Severity::Success,
                message: "Order placed".to_string(),
                duration: None,
            })
        );
    }

    #[test]
    fn test_handle_timed_carries_duration() {
        let command = Command::Timed(750, Severity::Info, "Saved".to_string());

        let result = handle_show(&create_test_context(), &command).unwrap();

        assert_eq!(
            result.action,
            Some(PageAction::Show {
                severity: Severity::Info,
                message: "Saved".to_string(),
                duration: Some(Duration::from_millis(750)),
            })
        );
    }

    #[test]
    fn test_handle_legacy_targets_entry_point() {
        let command = Command::Legacy("danger".to_string(), "Payment failed".to_string());

        let result = handle_show(&create_test_context(), &command).unwrap();

        assert_eq!(
            result.action,
            Some(PageAction::Legacy {
                entry_point: "showMessage".to_string(),
                marker: "danger".to_string(),
                message: "Payment failed".to_string(),
            })
        );
    }

    #[test]
    fn test_handle_legacy_without_entry_point() {
        let command = Command::Legacy("success".to_string(), "Saved".to_string());

        let result = handle_show(&CommandContext::default(), &command).unwrap();

        assert!(result.action.is_none());
        assert!(result.response.unwrap().contains("entry point"));
    }

    #[test]
    fn test_handle_show_wrong_command() {
        assert!(handle_show(&create_test_context(), &Command::List).is_none());
    }
}
