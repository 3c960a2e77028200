//! Alert entity shown by the notification manager.
//!
//! This module provides the [`Alert`] struct, its identifier [`AlertId`] and
//! its lifecycle [`AlertState`]. An alert is created `Visible`, becomes
//! `Removing` when dismissed and `Removed` once detached from the container.

use std::{
    fmt,
    hash::{Hash, Hasher},
    time::Duration,
};

use crate::notifications::Severity;

/// Handle of an alert, unique for the lifetime of a manager.
///
/// Identifiers are handed out in increasing order, so an identifier that is no
/// longer in the container always belongs to a removed alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlertId(pub u64);

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertState {
    /// Displayed, waiting for its dismissal timer or a user action
    Visible,
    /// Playing the removal transition, detached once it completes
    Removing,
    /// Detached from the container for good
    Removed,
}

/// A notification displayed in the container.
///
/// # Equality and Hashing
///
/// Two alerts are equal if they share the same [`AlertId`], whatever their
/// state. The identifier is the only thing callers hold on to, so it is what
/// collections key on.
///
/// # Examples
///
/// ```
/// # use std::time::Duration;
/// # use toaster::notifications::{Alert, AlertId, AlertState, Severity};
/// let alert = Alert::new(
///     AlertId(1),
///     Severity::Success,
///     "Order placed".to_string(),
///     Duration::from_millis(5000),
/// );
/// assert_eq!(alert.title(), "Success");
/// assert_eq!(alert.state, AlertState::Visible);
/// ```
#[derive(Clone, Debug)]
pub struct Alert {
    /// Handle returned to the caller of `show`.
    pub id: AlertId,
    /// Severity driving the icon and title.
    pub severity: Severity,
    /// Text content, rendered as is.
    pub message: String,
    /// Delay before the alert dismisses itself when left alone.
    pub duration: Duration,
    /// Current lifecycle state.
    pub state: AlertState,
    /// Whether the progress indicator is frozen because the pointer is over it.
    pub progress_paused: bool,
}

impl Alert {
    /// Creates a visible alert.
    pub fn new(id: AlertId, severity: Severity, message: String, duration: Duration) -> Self {
        Alert {
            id,
            severity,
            message,
            duration,
            state: AlertState::Visible,
            progress_paused: false,
        }
    }

    /// Returns the glyph of the icon slot.
    pub fn icon(&self) -> &'static str {
        self.severity.icon()
    }

    /// Returns the title shown above the message.
    pub fn title(&self) -> &'static str {
        self.severity.title()
    }

    /// Returns whether the alert is still displayed and interactive.
    pub fn is_visible(&self) -> bool {
        self.state == AlertState::Visible
    }
}

impl PartialEq for Alert {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Alert {}

impl Hash for Alert {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
