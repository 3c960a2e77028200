//! Notification manager owning the alert lifecycle and the shared container.
//!
//! This module provides the [`NotificationManager`] which shows alerts,
//! schedules their dismissal, reacts to pointer and close interactions,
//! enforces the visible limit and detaches removed alerts.

use std::{
    collections::{HashMap, VecDeque},
    sync::Arc,
    time::Duration,
};

use log::{debug, info};
use tokio::{
    sync::Mutex,
    task::JoinHandle,
    time::{self, Instant},
};

use crate::{
    config,
    notifications::{Alert, AlertId, AlertState, Severity},
    render::Renderer,
};

/// Pending dismissal of an alert.
///
/// The token tells a firing timer whether it is still the current one: a
/// timer replaced or cancelled in the meantime finds a different token (or
/// none) and does nothing.
struct DismissTimer {
    token: u64,
    handle: JoinHandle<()>,
}

/// Ordered alerts currently attached to the page, oldest first.
#[derive(Default)]
struct Container {
    alerts: VecDeque<Alert>,
    dismiss_timers: HashMap<AlertId, DismissTimer>,
}

impl Container {
    fn get_mut(&mut self, id: AlertId) -> Option<&mut Alert> {
        self.alerts.iter_mut().find(|alert| alert.id == id)
    }

    fn visible_count(&self) -> usize {
        self.alerts.iter().filter(|alert| alert.is_visible()).count()
    }

    fn oldest_visible(&self) -> Option<AlertId> {
        self.alerts
            .iter()
            .find(|alert| alert.is_visible())
            .map(|alert| alert.id)
    }

    fn cancel_dismissal(&mut self, id: AlertId) {
        if let Some(timer) = self.dismiss_timers.remove(&id) {
            timer.handle.abort();
        }
    }
}

/// State shared between the manager and its timer tasks.
#[derive(Default)]
struct ManagerState {
    /// Created on first use, kept until the manager is dropped
    container: Option<Container>,
    next_alert_id: u64,
    next_timer_token: u64,
}

/// Manages the lifecycle of every alert displayed on a page.
///
/// The `NotificationManager` coordinates several key responsibilities:
/// - Creating the shared container on first use
/// - Appending alerts in call order
/// - Scheduling, pausing and replacing dismissal timers
/// - Evicting the oldest visible alert past the visible limit
/// - Running the removal transition and detaching alerts
///
/// The manager is a cheap handle: clones share the same container, so it can
/// be handed to every component that needs to enqueue notifications.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use toaster::config::Notifications;
/// use toaster::notifications::{NotificationManager, Severity};
/// use toaster::render::TerminalRenderer;
///
/// # async fn example() {
/// let manager = NotificationManager::new(Arc::new(TerminalRenderer::new()), Notifications::default());
/// let id = manager.show("Order placed", Severity::Success).await;
/// manager.close(id).await;
/// # }
/// ```
#[derive(Clone)]
pub struct NotificationManager {
    /// Thread-safe reference to the container and counters
    state: Arc<Mutex<ManagerState>>,
    /// Sink reflecting every container change
    renderer: Arc<dyn Renderer>,
    /// Timings and visible limit
    settings: config::Notifications,
}

impl NotificationManager {
    /// Creates a new `NotificationManager`.
    ///
    /// The container is not created until the first alert is shown.
    ///
    /// # Arguments
    ///
    /// * `renderer` - Sink receiving container changes
    /// * `settings` - Timings and visible limit
    pub fn new(renderer: Arc<dyn Renderer>, settings: config::Notifications) -> Self {
        NotificationManager {
            state: Arc::new(Mutex::new(ManagerState::default())),
            renderer,
            settings,
        }
    }

    /// Shows an alert dismissed after the default duration.
    ///
    /// See [`Self::show_for`].
    pub async fn show(&self, message: impl Into<String>, severity: Severity) -> AlertId {
        self.show_for(message, severity, self.settings.default_duration())
            .await
    }

    /// Shows an alert dismissed after `duration`.
    ///
    /// The alert is appended after every alert already displayed and its
    /// dismissal timer starts right away. When more alerts than the visible
    /// limit are visible afterwards, the oldest visible one is removed.
    ///
    /// Never fails: an empty message is rendered as an empty body.
    ///
    /// # Returns
    ///
    /// The handle of the new alert, accepted by every other operation.
    pub async fn show_for(
        &self,
        message: impl Into<String>,
        severity: Severity,
        duration: Duration,
    ) -> AlertId {
        let mut state = self.state.lock().await;

        let id = AlertId(state.next_alert_id);
        state.next_alert_id += 1;

        let alert = Alert::new(id, severity, message.into(), duration);

        if state.container.is_none() {
            debug!("creating notification container");
            self.renderer.create_container();
        }
        let container = state.container.get_or_insert_with(Container::default);

        self.renderer.append(&alert);
        container.alerts.push_back(alert);

        info!(
            "showing {} alert {} for {} ms",
            severity,
            id,
            duration.as_millis()
        );

        self.schedule_dismissal(&mut state, id, duration);
        self.evict_overflow(&mut state);

        id
    }

    /// Removes an alert.
    ///
    /// The alert enters the removal transition and is detached once it
    /// completes. Its pending dismissal timer, if any, is cancelled.
    ///
    /// Calling it for an alert that is unknown, already removing or already
    /// detached does nothing.
    pub async fn remove(&self, id: AlertId) {
        let mut state = self.state.lock().await;
        self.begin_removal(&mut state, id);
    }

    /// Close affordance of an alert. Removes it right away.
    pub async fn close(&self, id: AlertId) {
        debug!("closing alert {}", id);
        self.remove(id).await;
    }

    /// Pointer entered an alert.
    ///
    /// Cancels the pending dismissal without scheduling a new one and freezes
    /// the progress indicator. The alert stays until the pointer leaves or it
    /// is closed.
    pub async fn pointer_enter(&self, id: AlertId) {
        let mut state = self.state.lock().await;
        let Some(container) = state.container.as_mut() else {
            return;
        };
        let Some(alert) = container.get_mut(id).filter(|alert| alert.is_visible()) else {
            return;
        };

        alert.progress_paused = true;
        container.cancel_dismissal(id);
        self.renderer.pause_progress(id);

        debug!("dismissal of alert {} paused", id);
    }

    /// Pointer left an alert.
    ///
    /// Schedules a fresh dismissal after the hover grace delay. What remained
    /// of the original duration is discarded.
    pub async fn pointer_leave(&self, id: AlertId) {
        let mut state = self.state.lock().await;
        let Some(container) = state.container.as_mut() else {
            return;
        };
        let Some(alert) = container.get_mut(id).filter(|alert| alert.is_visible()) else {
            return;
        };

        alert.progress_paused = false;
        self.renderer.resume_progress(id);

        let grace = self.settings.hover_grace();
        self.schedule_dismissal(&mut state, id, grace);

        debug!("alert {} dismissed in {} ms", id, grace.as_millis());
    }

    /// Returns the lifecycle state of an alert.
    ///
    /// An alert no longer in the container is reported as
    /// [`AlertState::Removed`].
    #[cfg(test)]
    pub async fn state(&self, id: AlertId) -> AlertState {
        let mut state = self.state.lock().await;
        state
            .container
            .as_mut()
            .and_then(|container| container.get_mut(id))
            .map_or(AlertState::Removed, |alert| alert.state)
    }

    /// Returns a snapshot of the container, oldest first.
    pub async fn alerts(&self) -> Vec<Alert> {
        let state = self.state.lock().await;
        state
            .container
            .as_ref()
            .map(|container| container.alerts.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Returns the number of alerts attached to the container, removing ones
    /// included.
    pub async fn len(&self) -> usize {
        let state = self.state.lock().await;
        state
            .container
            .as_ref()
            .map_or(0, |container| container.alerts.len())
    }

    /// Returns whether no alert is attached to the container.
    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Returns the number of alerts in the `Visible` state.
    pub async fn visible_count(&self) -> usize {
        let state = self.state.lock().await;
        state
            .container
            .as_ref()
            .map_or(0, |container| container.visible_count())
    }

    /// Returns whether the shared container was created.
    #[cfg(test)]
    pub async fn has_container(&self) -> bool {
        self.state.lock().await.container.is_some()
    }

    /// Returns whether a dismissal timer is pending for an alert.
    #[cfg(test)]
    pub async fn has_pending_dismissal(&self, id: AlertId) -> bool {
        let state = self.state.lock().await;
        state
            .container
            .as_ref()
            .is_some_and(|container| container.dismiss_timers.contains_key(&id))
    }

    /// Replaces the dismissal timer of an alert.
    ///
    /// The deadline is fixed now, not when the spawned task first runs.
    fn schedule_dismissal(&self, state: &mut ManagerState, id: AlertId, delay: Duration) {
        let token = state.next_timer_token;
        state.next_timer_token += 1;

        let Some(container) = state.container.as_mut() else {
            return;
        };
        container.cancel_dismissal(id);

        let deadline = Instant::now() + delay;
        let manager = self.clone();
        let handle = tokio::spawn(async move {
            time::sleep_until(deadline).await;
            manager.dismiss_expired(id, token).await;
        });

        container
            .dismiss_timers
            .insert(id, DismissTimer { token, handle });
    }

    /// Called by a dismissal timer when its deadline is reached.
    async fn dismiss_expired(&self, id: AlertId, token: u64) {
        let mut state = self.state.lock().await;
        let Some(container) = state.container.as_mut() else {
            return;
        };

        // Stale timer, replaced or cancelled after it fired
        if container
            .dismiss_timers
            .get(&id)
            .is_none_or(|timer| timer.token != token)
        {
            return;
        }
        // Our own handle: drop it without aborting the running task
        container.dismiss_timers.remove(&id);

        debug!("alert {} expired", id);
        self.begin_removal(&mut state, id);
    }

    /// Removes the oldest visible alerts until the visible limit holds.
    ///
    /// Alerts already in their removal transition are skipped: they leave the
    /// container on their own and no longer count toward the limit.
    fn evict_overflow(&self, state: &mut ManagerState) {
        let max_visible = self.settings.max_visible();

        loop {
            let Some(container) = state.container.as_ref() else {
                return;
            };
            if container.visible_count() <= max_visible {
                return;
            }
            let Some(oldest) = container.oldest_visible() else {
                return;
            };

            info!("evicting alert {}, more than {} visible", oldest, max_visible);
            self.begin_removal(state, oldest);
        }
    }

    /// Moves a visible alert to `Removing` and schedules its detachment.
    ///
    /// # Returns
    ///
    /// `true` if the alert was visible and is now removing.
    fn begin_removal(&self, state: &mut ManagerState, id: AlertId) -> bool {
        let Some(container) = state.container.as_mut() else {
            return false;
        };
        let Some(alert) = container.get_mut(id).filter(|alert| alert.is_visible()) else {
            return false;
        };

        alert.state = AlertState::Removing;
        container.cancel_dismissal(id);
        self.renderer.start_removal(id);

        let deadline = Instant::now() + self.settings.removal_delay();
        let manager = self.clone();
        tokio::spawn(async move {
            time::sleep_until(deadline).await;
            manager.detach(id).await;
        });

        debug!("removing alert {}", id);

        true
    }

    /// Detaches an alert at the end of its removal transition.
    async fn detach(&self, id: AlertId) {
        let mut state = self.state.lock().await;
        let Some(container) = state.container.as_mut() else {
            return;
        };
        let Some(position) = container.alerts.iter().position(|alert| alert.id == id) else {
            return;
        };

        if let Some(mut alert) = container.alerts.remove(position) {
            alert.state = AlertState::Removed;
            container.cancel_dismissal(id);
            self.renderer.detach(id);
            info!("removed alert {}", alert.id);
        }
    }
}
