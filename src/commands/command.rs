//! Command parsing and handling.
//!
//! This module provides command parsing functionality for the host, converting
//! console lines into structured [`Command`] enums that can be processed by
//! the page.

use command_parser::{Command as ParserCommand, Parser};
use log::debug;

use crate::{
    commands::text_response::{
        format_invalid_legacy, format_invalid_pointer, format_invalid_show, format_invalid_timed,
        format_invalid_wait, format_unknown_command,
    },
    notifications::{AlertId, Severity},
};

/// Represents a parsed console command.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Display help information
    Help,
    /// List the displayed alerts
    List,
    /// Show an alert with the default duration
    ///
    /// # Fields
    ///
    /// * `Severity` - Severity of the alert
    /// * `String` - Message of the alert
    Show(Severity, String),
    /// Show an alert with a custom duration
    ///
    /// # Fields
    ///
    /// * `u64` - Duration in milliseconds
    /// * `Severity` - Severity of the alert
    /// * `String` - Message of the alert
    Timed(u64, Severity, String),
    /// Call the legacy entry point
    ///
    /// # Fields
    ///
    /// * `String` - Severity marker, passed through untouched
    /// * `String` - Message of the alert
    Legacy(String, String),
    /// Move the pointer over an alert
    Enter(AlertId),
    /// Move the pointer away from an alert
    Leave(AlertId),
    /// Activate the close affordance of an alert
    Close(AlertId),
    /// Let the page idle, in milliseconds
    Wait(u64),
}

/// Errors that can occur during command parsing.
#[derive(Debug)]
pub enum CommandParsingError {
    /// The line could not be parsed as a command
    UnableToParse,
    /// The command is not for this host (wrong name)
    NotToaster,
    /// The command is not recognized
    Unknown,
    /// The show command has invalid syntax or arguments
    InvalidShow,
    /// The timed command has invalid syntax or arguments
    InvalidTimed,
    /// The legacy command has invalid syntax or arguments
    InvalidLegacy,
    /// An enter, leave or close command has an invalid alert id
    InvalidPointer,
    /// The wait command has an invalid delay
    InvalidWait,
}

impl Command {
    /// Parses a console line into a Command.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The line is not a command - [`CommandParsingError::UnableToParse`]
    /// - The command is for another program - [`CommandParsingError::NotToaster`]
    /// - The command is not recognized - [`CommandParsingError::Unknown`]
    /// - Arguments are missing or invalid - one of the `Invalid*` variants
    ///
    /// # Examples
    ///
    /// ```
    /// # use command_parser::Parser;
    /// # use toaster::commands::command::Command;
    /// let parser = Parser::new('!', '-');
    /// let result = Command::parse(&parser, "!toast list");
    /// assert!(result.is_ok());
    /// ```
    pub fn parse(parser: &Parser, body: &str) -> Result<Self, CommandParsingError> {
        // The parser drops the last word, pad the line so nothing is lost
        let body = body.to_string() + " dummy";

        let command = match parser.parse(&body) {
            Ok(cmd) => cmd,
            Err(_) => return Err(CommandParsingError::UnableToParse),
        };

        if command.name != "toast" {
            return Err(CommandParsingError::NotToaster);
        }

        debug!("parsing command: {:?}", command);

        if command.arguments.is_empty() {
            return Ok(Command::Help);
        }

        match command.arguments[0].as_str() {
            "help" => Ok(Command::Help),
            "list" => Ok(Command::List),
            "show" => {
                let (severity, message) = Self::parse_show(&command)?;
                Ok(Command::Show(severity, message))
            }
            "timed" => {
                let (duration_ms, severity, message) = Self::parse_timed(&command)?;
                Ok(Command::Timed(duration_ms, severity, message))
            }
            "legacy" => {
                let (marker, message) = Self::parse_legacy(&command)?;
                Ok(Command::Legacy(marker, message))
            }
            "enter" => Ok(Command::Enter(Self::parse_alert_id(&command)?)),
            "leave" => Ok(Command::Leave(Self::parse_alert_id(&command)?)),
            "close" => Ok(Command::Close(Self::parse_alert_id(&command)?)),
            "wait" => Ok(Command::Wait(Self::parse_wait(&command)?)),
            _ => Err(CommandParsingError::Unknown),
        }
    }

    fn parse_show(command: &ParserCommand) -> Result<(Severity, String), CommandParsingError> {
        // show, severity, then at least one word of message
        if command.arguments.len() < 3 {
            return Err(CommandParsingError::InvalidShow);
        }

        let severity = Severity::from(command.arguments[1].as_str());
        let message = command.arguments[2..].join(" ");

        debug!(
            "parsed show command - severity: {}, message: {}",
            severity, message
        );

        Ok((severity, message))
    }

    fn parse_timed(
        command: &ParserCommand,
    ) -> Result<(u64, Severity, String), CommandParsingError> {
        // timed, duration, severity, then at least one word of message
        if command.arguments.len() < 4 {
            return Err(CommandParsingError::InvalidTimed);
        }

        let duration_ms = match command.arguments[1].parse::<u64>() {
            Ok(duration_ms) => duration_ms,
            Err(_) => return Err(CommandParsingError::InvalidTimed),
        };
        let severity = Severity::from(command.arguments[2].as_str());
        let message = command.arguments[3..].join(" ");

        debug!(
            "parsed timed command - duration: {}ms, severity: {}, message: {}",
            duration_ms, severity, message
        );

        Ok((duration_ms, severity, message))
    }

    fn parse_legacy(command: &ParserCommand) -> Result<(String, String), CommandParsingError> {
        if command.arguments.len() < 3 {
            return Err(CommandParsingError::InvalidLegacy);
        }

        let marker = command.arguments[1].clone();
        let message = command.arguments[2..].join(" ");

        Ok((marker, message))
    }

    fn parse_alert_id(command: &ParserCommand) -> Result<AlertId, CommandParsingError> {
        let Some(raw_id) = command.arguments.get(1) else {
            return Err(CommandParsingError::InvalidPointer);
        };

        // Accept the `#3` form printed by the renderer
        match raw_id.trim_start_matches('#').parse::<u64>() {
            Ok(id) => Ok(AlertId(id)),
            Err(_) => Err(CommandParsingError::InvalidPointer),
        }
    }

    fn parse_wait(command: &ParserCommand) -> Result<u64, CommandParsingError> {
        let Some(raw_delay) = command.arguments.get(1) else {
            return Err(CommandParsingError::InvalidWait);
        };

        raw_delay
            .parse::<u64>()
            .map_err(|_| CommandParsingError::InvalidWait)
    }
}

/// Formats a command error into a user-friendly message.
///
/// `UnableToParse` and `NotToaster` return `None`: lines that are not for the
/// host are ignored silently.
///
/// # Examples
///
/// ```
/// # use toaster::commands::command::{format_command_error, CommandParsingError};
/// assert!(format_command_error(CommandParsingError::Unknown).is_some());
/// assert!(format_command_error(CommandParsingError::NotToaster).is_none());
/// ```
pub fn format_command_error(error: CommandParsingError) -> Option<String> {
    match error {
        CommandParsingError::Unknown => Some(format_unknown_command()),
        CommandParsingError::InvalidShow => Some(format_invalid_show()),
        CommandParsingError::InvalidTimed => Some(format_invalid_timed()),
        CommandParsingError::InvalidLegacy => Some(format_invalid_legacy()),
        CommandParsingError::InvalidPointer => Some(format_invalid_pointer()),
        CommandParsingError::InvalidWait => Some(format_invalid_wait()),
        _ => None,
    }
}
