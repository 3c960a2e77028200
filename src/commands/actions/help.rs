//! Help command handler.
//!
//! This is a stateless command that always returns the same help message.

use log::debug;

use crate::commands::{CommandResult, text_response::format_help};

/// Returns help information about available commands.
pub fn handle_help() -> CommandResult {
    debug!("handling help command");

    CommandResult {
        response: Some(format_help()),
        action: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_help() {
        let result = handle_help();

        assert!(result.action.is_none());
        assert!(!result.response.unwrap().is_empty());
    }
}
