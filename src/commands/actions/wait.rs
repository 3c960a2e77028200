//! Wait command handler.

use std::time::Duration;

use log::debug;

use crate::commands::{CommandResult, PageAction, command::Command};

/// Requests the page to idle so that timers can fire.
///
/// Returns `None` if the command is not a `Wait` variant.
pub fn handle_wait(command: &Command) -> Option<CommandResult> {
    debug!("handling wait command: {:?}", command);

    let Command::Wait(delay_ms) = command else {
        return None;
    };

    Some(CommandResult {
        response: None,
        action: Some(PageAction::Wait(Duration::from_millis(*delay_ms))),
    })
}
