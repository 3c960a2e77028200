//! Console command parsing and response formatting.
//!
//! This module provides the command processing pipeline of the host binary,
//! letting an operator drive a page from the console: show alerts, move the
//! pointer over them, close them and let time pass.
//!
//! # Overview
//!
//! 1. **Parsing** - Converting console lines into structured [`command::Command`] enums
//! 2. **Validation** - Ensuring commands have correct syntax and valid arguments
//! 3. **Execution** - Routing commands to handlers that return a [`CommandResult`]
//! 4. **Application** - The page applies the requested [`PageAction`]
//!
//! # Architecture
//!
//! ```text
//! Console line
//!      │
//!      ▼
//! ┌─────────────┐
//! │  Commander  │  ← Entry point: parse() + parse_command()
//! └─────────────┘
//!      │
//!      ├── parse() ──────────► command::Command
//!      │
//!      └── parse_command() ──► Action handlers ──► CommandResult
//!                               - handle_help          - response
//!                               - handle_list          - action
//!                               - handle_show
//!                               - handle_pointer
//!                               - handle_wait
//! ```
//!
//! # Command Structure
//!
//! All commands follow the format: `!toast <subcommand> [args...]`
//!
//! | Command | Arguments | Description |
//! |---------|-----------|-------------|
//! | `help` | None | Display help information |
//! | `show` | `<severity> <message...>` | Show an alert with the default duration |
//! | `timed` | `<duration_ms> <severity> <message...>` | Show an alert with a custom duration |
//! | `legacy` | `<severity> <message...>` | Call the legacy entry point |
//! | `enter` | `<id>` | Pointer enters an alert |
//! | `leave` | `<id>` | Pointer leaves an alert |
//! | `close` | `<id>` | Close an alert |
//! | `list` | None | List the displayed alerts |
//! | `wait` | `<ms>` | Let the page idle |
//!
//! # Examples
//!
//! ```no_run
//! use toaster::commands::{CommandContext, Commander};
//!
//! let commander = Commander::new();
//!
//! match commander.parse("!toast list") {
//!     Ok(command) => {
//!         let context = CommandContext {
//!             alerts: Vec::new(),
//!             legacy_entry_point: None,
//!         };
//!         if let Some(result) = commander.parse_command(&command, &context) {
//!             println!("{:?}", result.response);
//!         }
//!     }
//!     Err(error) => eprintln!("{:?}", error),
//! }
//! ```

use std::time::Duration;

mod actions;
pub mod command;
mod commander;
pub mod text_response;

pub use crate::commands::commander::Commander;
use crate::notifications::{Alert, AlertId, Severity};

/// Runtime context for command execution.
///
/// A snapshot of the page taken before the command runs. Handlers only read
/// it.
#[derive(Debug, Default)]
pub struct CommandContext {
    /// Alerts currently in the container, oldest first
    pub alerts: Vec<Alert>,
    /// Name of the legacy entry point, if the page has one
    pub legacy_entry_point: Option<String>,
}

impl CommandContext {
    /// Returns the alert with the given id, if it is displayed.
    pub fn alert(&self, id: AlertId) -> Option<&Alert> {
        self.alerts.iter().find(|alert| alert.id == id)
    }
}

/// A change the page has to apply after a command.
///
/// Command handlers don't drive the notification manager themselves. They
/// describe what should happen and the page performs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAction {
    /// Show an alert, with the default duration when `duration` is `None`
    Show {
        severity: Severity,
        message: String,
        duration: Option<Duration>,
    },
    /// Call the named legacy entry point with `(message, marker)`
    Legacy {
        entry_point: String,
        marker: String,
        message: String,
    },
    /// The pointer enters the alert
    PointerEnter(AlertId),
    /// The pointer leaves the alert
    PointerLeave(AlertId),
    /// The close affordance of the alert is activated
    Close(AlertId),
    /// Let the page idle
    Wait(Duration),
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Text printed on the console, if any
    pub response: Option<String>,
    /// Change requested on the page, if any
    pub action: Option<PageAction>,
}

/// Errors that can occur during command parsing.
///
/// # Variants
///
/// * `NotForHost` - Line is not a command or is for another program.
///   Should be ignored silently.
///
/// * `InvalidCommand` - Command syntax or arguments are invalid.
///   Contains a user-friendly error message to display.
///
/// # Examples
///
/// ```
/// # use toaster::commands::{Commander, CommandParseError};
/// let commander = Commander::new();
///
/// assert!(matches!(
///     commander.parse("Just chatting"),
///     Err(CommandParseError::NotForHost)
/// ));
/// assert!(matches!(
///     commander.parse("!toast invalid"),
///     Err(CommandParseError::InvalidCommand(_))
/// ));
/// ```
#[derive(Debug)]
pub enum CommandParseError {
    /// Line is not a command or not addressed to the host (ignore silently)
    NotForHost,
    /// Command is invalid (contains the message to print)
    InvalidCommand(String),
}
