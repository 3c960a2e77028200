//! Pointer and close command handlers.
//!
//! `enter`, `leave` and `close` target an alert by id. Alerts that are no
//! longer in the container are reported instead of silently ignored, which
//! helps when an alert was dismissed while the operator was typing.

use log::debug;

use crate::commands::{
    CommandContext, CommandResult, PageAction, command::Command,
    text_response::format_alert_not_found,
};

/// Requests a pointer or close interaction on an alert.
///
/// Returns `None` if the command is not `Enter`, `Leave` or `Close`.
pub fn handle_pointer(context: &CommandContext, command: &Command) -> Option<CommandResult> {
    debug!("handling pointer command: {:?}", command);

    let (id, action) = match command {
        Command::Enter(id) => (*id, PageAction::PointerEnter(*id)),
        Command::Leave(id) => (*id, PageAction::PointerLeave(*id)),
        Command::Close(id) => (*id, PageAction::Close(*id)),
        _ => return None,
    };

    if context.alert(id).is_none() {
        return Some(CommandResult {
            response: Some(format_alert_not_found(id)),
            action: None,
        });
    }

    Some(CommandResult {
        response: None,
        action: Some(action),
    })
}
