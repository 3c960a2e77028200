//! List command handler.

use log::debug;

use crate::commands::{CommandContext, CommandResult, text_response::format_alerts};

/// Lists the alerts of the container, oldest first, with their state.
pub fn handle_list(context: &CommandContext) -> CommandResult {
    debug!("handling list command");

    CommandResult {
        response: Some(format_alerts(&context.alerts)),
        action: None,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::notifications::{Alert, AlertId, Severity};

    #[test]
    fn test_handle_list_empty() {
        let result = handle_list(&CommandContext::default());

        assert_eq!(result.response.unwrap(), "No alerts displayed.");
        assert!(result.action.is_none());
    }

    #[test]
    fn test_handle_list_keeps_order() {
        let context = CommandContext {
            alerts: vec![
                Alert::new(
                    AlertId(4),
                    Severity::Success,
                    "Order placed".to_string(),
                    Duration::from_millis(5000),
                ),
                Alert::new(
                    AlertId(5),
                    Severity::Error,
                    "Payment failed".to_string(),
                    Duration::from_millis(5000),
                ),
            ],
            legacy_entry_point: None,
        };

        let response = handle_list(&context).response.unwrap();

        let first = response.find("#4").unwrap();
        let second = response.find("#5").unwrap();
        assert!(first < second);
    }
}
