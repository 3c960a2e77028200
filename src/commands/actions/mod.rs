//! Command action handlers.
//!
//! Individual handler functions for each console command. Each handler
//! receives a [`CommandContext`](crate::commands::CommandContext), processes
//! the command, and returns a [`CommandResult`](crate::commands::CommandResult).
//!
//! # Available Handlers
//!
//! - [`handle_help`] - Display help information
//! - [`handle_list`] - List the displayed alerts
//! - [`handle_show`] - Request a new alert, directly or through the legacy entry point
//! - [`handle_pointer`] - Request a pointer or close interaction on an alert
//! - [`handle_wait`] - Request the page to idle
//!
//! # State Changes
//!
//! Handlers don't touch the notification manager. They return a
//! [`PageAction`](crate::commands::PageAction) the page applies afterwards.

mod help;
mod list;
mod pointer;
mod show;
mod wait;

pub use crate::commands::actions::{
    help::handle_help, list::handle_list, pointer::handle_pointer, show::handle_show,
    wait::handle_wait,
};
