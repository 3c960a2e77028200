//! Rendering sink abstraction.
//!
//! This module provides the [`Renderer`] trait the notification manager uses
//! to reflect container changes in whatever view hosts the alerts.

use mockall::automock;

use crate::notifications::{Alert, AlertId};

/// Trait for displaying the notification container.
///
/// Calls happen while the manager holds its container lock, so
/// implementations must return quickly and must not call back into the
/// manager.
///
/// This trait abstracts the view for easier testing with mocks.
#[automock]
pub trait Renderer: Send + Sync {
    /// Creates the shared container. Called once, on first use.
    fn create_container(&self);
    /// Mounts a new alert as the last element of the container.
    fn append(&self, alert: &Alert);
    /// Freezes the progress indicator of an alert.
    fn pause_progress(&self, id: AlertId);
    /// Restarts the progress indicator of an alert.
    fn resume_progress(&self, id: AlertId);
    /// Starts the removal transition of an alert.
    fn start_removal(&self, id: AlertId);
    /// Detaches an alert from the container.
    fn detach(&self, id: AlertId);
    /// Hides the block of server-rendered messages once they were converted.
    fn hide_server_messages(&self);
}
