//! Transient notification system for storefront pages.
//!
//! This module provides the alert/toast manager of a page. Alerts are shown in
//! a single container created on first use, dismiss themselves after a delay,
//! pause while hovered and are evicted oldest first past the visible limit.
//!
//! - [`Severity`]: Severity levels and their icon/title lookup table
//! - [`Alert`]: One displayed notification and its lifecycle state
//! - [`NotificationManager`]: Shows, schedules, evicts and removes alerts
//! - [`MessageLoader`]: Loads the server-rendered messages of a page
//!
//! # Lifecycle
//!
//! ```text
//! show() ──► Visible ──(timer / close / eviction)──► Removing ──(400 ms)──► Removed
//!              │  ▲
//!   pointer    │  │ pointer leave: new 2000 ms timer
//!   enter:     ▼  │
//!   timer    (paused)
//!   cancelled
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use toaster::config::Notifications;
//! use toaster::notifications::{NotificationManager, Severity};
//! use toaster::render::TerminalRenderer;
//!
//! # async fn example() {
//! let manager = NotificationManager::new(Arc::new(TerminalRenderer::new()), Notifications::default());
//!
//! let id = manager.show("Order placed", Severity::Success).await;
//! manager.pointer_enter(id).await;
//! manager.pointer_leave(id).await;
//! # }
//! ```

mod alert;
mod message_loader;
mod notification_manager;
mod severity;

pub use crate::notifications::{
    alert::{Alert, AlertId, AlertState},
    message_loader::{MessageLoader, ServerMessage},
    notification_manager::NotificationManager,
    severity::Severity,
};
