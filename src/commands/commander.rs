//! Command orchestration and execution.
//!
//! This module provides the [`Commander`] struct, the entry point for console
//! commands. It parses lines and routes the resulting commands to their
//! handlers.
//!
//! # Flow
//!
//! ```text
//! Console line → parse() → Command → parse_command() → CommandResult
//! ```

use command_parser::Parser;

use crate::commands::{
    CommandContext, CommandParseError, CommandResult,
    actions::{handle_help, handle_list, handle_pointer, handle_show, handle_wait},
    command::{Command, format_command_error},
};

/// Parses console lines and dispatches them to the action handlers.
pub struct Commander {
    parser: Parser,
}

impl Commander {
    /// Creates a commander expecting `!`-prefixed commands.
    pub fn new() -> Self {
        let parser = Parser::new('!', '-');
        Commander { parser }
    }

    /// Parses a console line into a [`Command`].
    ///
    /// # Errors
    ///
    /// * [`CommandParseError::NotForHost`] - the line should be ignored
    /// * [`CommandParseError::InvalidCommand`] - the line is a broken `!toast`
    ///   command, the message explains why
    pub fn parse(&self, body: &str) -> Result<Command, CommandParseError> {
        Command::parse(&self.parser, body).map_err(|error| match format_command_error(error) {
            Some(message) => CommandParseError::InvalidCommand(message),
            None => CommandParseError::NotForHost,
        })
    }

    /// Runs the handler of a parsed command.
    ///
    /// Returns `None` when the handler does not apply to the command.
    pub fn parse_command(
        &self,
        command: &Command,
        context: &CommandContext,
    ) -> Option<CommandResult> {
        let result = match command {
            Command::Help => handle_help(),
            Command::List => handle_list(context),
            Command::Show(..) | Command::Timed(..) | Command::Legacy(..) => {
                handle_show(context, command)?
            }
            Command::Enter(_) | Command::Leave(_) | Command::Close(_) => {
                handle_pointer(context, command)?
            }
            Command::Wait(_) => handle_wait(command)?,
        };

        Some(result)
    }
}

impl Default for Commander {
    fn default() -> Self {
        Self::new()
    }
}
