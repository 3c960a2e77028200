//! Page host wiring the notification manager to a page.
//!
//! This module provides the [`Page`] which plays the role of the document the
//! manager lives in:
//!
//! - **Entry points**: named callables scripts use to raise notifications,
//!   including the legacy `showMessage(message, severity)` alias
//! - **Ready reconciliation**: server-rendered messages become alerts once
//!   the page is ready, then the server block is hidden
//! - **Console loop**: operator commands read line by line and applied to the
//!   manager
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌─────────────┐     ┌─────────────────────┐
//! │ ServerMessage[]  │────►│    Page     │────►│ NotificationManager │
//! └──────────────────┘     │  - ready()  │     └─────────────────────┘
//! ┌──────────────────┐     │  - run()    │                │
//! │ Console lines    │────►│  Commander  │                ▼
//! └──────────────────┘     └─────────────┘           Renderer
//! ```

use std::{collections::HashMap, sync::Arc};

use futures::{FutureExt, future::BoxFuture};
use log::{debug, info, warn};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt},
    time,
};

use crate::{
    commands::{
        CommandContext, CommandParseError, Commander, PageAction,
        text_response::{format_alert_shown, format_legacy_missing},
    },
    config,
    notifications::{AlertId, NotificationManager, ServerMessage, Severity},
    render::Renderer,
};

/// A named page callable taking `(message, severity marker)`.
///
/// Entry points installed by the page itself may not go through the
/// notification manager, so the alert id is optional.
pub type EntryPoint = Arc<dyn Fn(String, String) -> BoxFuture<'static, Option<AlertId>> + Send + Sync>;

/// Registry of the page's named entry points.
///
/// # Examples
///
/// ```
/// # use std::sync::Arc;
/// # use futures::FutureExt;
/// # use toaster::{notifications::AlertId, page::EntryPoints};
/// let mut entry_points = EntryPoints::new();
/// entry_points.register_if_absent(
///     "notify",
///     Arc::new(|_message: String, _marker: String| async { None::<AlertId> }.boxed()),
/// );
/// assert!(entry_points.contains("notify"));
/// ```
#[derive(Clone, Default)]
pub struct EntryPoints {
    entries: HashMap<String, EntryPoint>,
}

impl EntryPoints {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an entry point, replacing any previous one with that name.
    #[cfg(test)]
    pub fn register(&mut self, name: impl Into<String>, entry_point: EntryPoint) {
        self.entries.insert(name.into(), entry_point);
    }

    /// Registers an entry point only if the name is free.
    ///
    /// Returns `true` if the entry point was installed.
    pub fn register_if_absent(&mut self, name: impl Into<String>, entry_point: EntryPoint) -> bool {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return false;
        }
        self.entries.insert(name, entry_point);
        true
    }

    /// Returns the entry point registered under `name`.
    pub fn get(&self, name: &str) -> Option<EntryPoint> {
        self.entries.get(name).cloned()
    }

    /// Returns `true` if an entry point is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}

/// The page hosting the notification manager.
pub struct Page {
    manager: NotificationManager,
    renderer: Arc<dyn Renderer>,
    entry_points: EntryPoints,
    legacy_entry_point: String,
    commander: Commander,
    is_ready: bool,
}

impl Page {
    /// Creates a page around an existing manager.
    ///
    /// # Arguments
    ///
    /// * `manager` - Manager shared with every producer of notifications
    /// * `renderer` - Sink used to hide the server-rendered block
    /// * `entry_points` - Entry points the page already defines
    /// * `settings` - Page integration settings
    pub fn new(
        manager: NotificationManager,
        renderer: Arc<dyn Renderer>,
        entry_points: EntryPoints,
        settings: &config::Page,
    ) -> Self {
        Page {
            manager,
            renderer,
            entry_points,
            legacy_entry_point: settings.legacy_entry_point.clone(),
            commander: Commander::new(),
            is_ready: false,
        }
    }

    /// Returns the manager of this page.
    #[cfg(test)]
    pub fn manager(&self) -> &NotificationManager {
        &self.manager
    }

    /// Installs the legacy entry point when the page does not define one.
    ///
    /// The alias forwards `(message, marker)` to
    /// [`NotificationManager::show`]. An entry point already registered
    /// under the same name is left untouched.
    pub fn load(&mut self) {
        let manager = self.manager.clone();
        let alias: EntryPoint = Arc::new(move |message: String, marker: String| {
            let manager = manager.clone();
            async move {
                let severity = Severity::from(marker.as_str());
                Some(manager.show(message, severity).await)
            }
            .boxed()
        });

        if self
            .entry_points
            .register_if_absent(self.legacy_entry_point.clone(), alias)
        {
            info!("installed legacy entry point {}", self.legacy_entry_point);
        } else {
            info!(
                "keeping the page's own {} entry point",
                self.legacy_entry_point
            );
        }
    }

    /// Turns the server-rendered messages into alerts.
    ///
    /// Messages are shown in order with the default duration, then the
    /// server block is hidden. An empty list leaves the block untouched: the
    /// page rendered no block to hide. Calling this more than once has no
    /// effect.
    pub async fn ready(&mut self, messages: &[ServerMessage]) {
        if self.is_ready {
            debug!("page already ready, ignoring server messages");
            return;
        }
        self.is_ready = true;

        for message in messages {
            self.manager
                .show(message.text(), message.severity())
                .await;
        }

        if !messages.is_empty() {
            self.renderer.hide_server_messages();
        }

        info!("page ready with {} server messages", messages.len());
    }

    /// Calls a named entry point.
    ///
    /// Returns `None` if no entry point has that name, otherwise what the
    /// entry point returned.
    pub async fn call_entry_point(
        &self,
        name: &str,
        message: String,
        marker: String,
    ) -> Option<Option<AlertId>> {
        let entry_point = self.entry_points.get(name)?;
        Some(entry_point(message, marker).await)
    }

    /// Handles one console line.
    ///
    /// Returns the text to print, if any. Lines not addressed to the host
    /// produce nothing.
    pub async fn handle_line(&self, line: &str) -> Option<String> {
        let command = match self.commander.parse(line) {
            Ok(command) => command,
            Err(CommandParseError::NotForHost) => return None,
            Err(CommandParseError::InvalidCommand(message)) => return Some(message),
        };

        let legacy_entry_point = self
            .entry_points
            .contains(&self.legacy_entry_point)
            .then(|| self.legacy_entry_point.clone());
        let context = CommandContext {
            alerts: self.manager.alerts().await,
            legacy_entry_point,
        };

        let result = self.commander.parse_command(&command, &context)?;

        let action_response = match result.action {
            Some(action) => self.apply(action).await,
            None => None,
        };

        match (result.response, action_response) {
            (Some(response), Some(action_response)) => {
                Some(format!("{}\n{}", response, action_response))
            }
            (response, action_response) => response.or(action_response),
        }
    }

    async fn apply(&self, action: PageAction) -> Option<String> {
        debug!("applying page action: {:?}", action);

        match action {
            PageAction::Show {
                severity,
                message,
                duration,
            } => {
                let id = match duration {
                    Some(duration) => self.manager.show_for(message, severity, duration).await,
                    None => self.manager.show(message, severity).await,
                };
                Some(format_alert_shown(id))
            }
            PageAction::Legacy {
                entry_point,
                marker,
                message,
            } => match self.call_entry_point(&entry_point, message, marker).await {
                Some(Some(id)) => Some(format_alert_shown(id)),
                Some(None) => None,
                None => Some(format_legacy_missing()),
            },
            PageAction::PointerEnter(id) => {
                self.manager.pointer_enter(id).await;
                None
            }
            PageAction::PointerLeave(id) => {
                self.manager.pointer_leave(id).await;
                None
            }
            PageAction::Close(id) => {
                self.manager.close(id).await;
                None
            }
            PageAction::Wait(delay) => {
                time::sleep(delay).await;
                None
            }
        }
    }

    /// Reads console lines until the end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading a line or writing a response fails.
    pub async fn run<R, W>(&self, reader: R, mut writer: W) -> Result<(), anyhow::Error>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            let Some(response) = self.handle_line(&line).await else {
                continue;
            };

            writer.write_all(response.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }

        let remaining = self.manager.len().await;
        if remaining > 0 {
            warn!(
                "console closed with {} alerts still displayed, {} visible",
                remaining,
                self.manager.visible_count().await
            );
        } else {
            info!("console closed");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        time::Duration,
    };

    use super::*;
    use crate::{
        notifications::{AlertState, Severity},
        render::MockRenderer,
    };

    const DEFAULT: Duration = Duration::from_millis(5000);

    /// Renderer accepting any call and counting hide requests.
    fn counting_renderer(hidden: Arc<AtomicUsize>) -> MockRenderer {
        let mut renderer = MockRenderer::new();
        renderer.expect_create_container().returning(|| ());
        renderer.expect_append().returning(|_| ());
        renderer.expect_pause_progress().returning(|_| ());
        renderer.expect_resume_progress().returning(|_| ());
        renderer.expect_start_removal().returning(|_| ());
        renderer.expect_detach().returning(|_| ());
        renderer.expect_hide_server_messages().returning(move || {
            hidden.fetch_add(1, Ordering::SeqCst);
        });
        renderer
    }

    fn create_test_page(entry_points: EntryPoints) -> (Page, Arc<AtomicUsize>) {
        let hidden = Arc::new(AtomicUsize::new(0));
        let renderer: Arc<dyn Renderer> = Arc::new(counting_renderer(Arc::clone(&hidden)));
        let manager = NotificationManager::new(Arc::clone(&renderer), config::Notifications::default());
        let page = Page::new(manager, renderer, entry_points, &config::Page::default());
        (page, hidden)
    }

    fn server_message(tags: &str, text: &str) -> ServerMessage {
        ServerMessage {
            tags: tags.to_string(),
            text: text.to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_ready_shows_server_messages_in_order() {
        let (mut page, hidden) = create_test_page(EntryPoints::new());
        page.load();

        page.ready(&[
            server_message("alert alert-success", "Order placed"),
            server_message("alert alert-danger", "  Payment failed "),
        ])
        .await;

        let alerts = page.manager().alerts().await;
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].message, "Order placed");
        assert_eq!(alerts[0].icon(), "✓");
        assert_eq!(alerts[0].title(), "Success");
        assert_eq!(alerts[1].message, "Payment failed");
        assert_eq!(alerts[1].icon(), "✕");
        assert_eq!(alerts[1].title(), "Error");
        assert_eq!(hidden.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ready_without_messages_keeps_server_block() {
        let (mut page, hidden) = create_test_page(EntryPoints::new());

        page.ready(&[]).await;

        assert!(page.manager().is_empty().await);
        assert!(!page.manager().has_container().await);
        assert_eq!(hidden.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ready_runs_once() {
        let (mut page, hidden) = create_test_page(EntryPoints::new());
        let messages = [server_message("alert-info", "Welcome back")];

        page.ready(&messages).await;
        page.ready(&messages).await;

        assert_eq!(page.manager().len().await, 1);
        assert_eq!(hidden.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_legacy_alias_matches_show() {
        let (mut page, _) = create_test_page(EntryPoints::new());
        page.load();

        let legacy_id = page
            .call_entry_point("showMessage", "Saved".to_string(), "success".to_string())
            .await
            .flatten()
            .unwrap();
        let direct_id = page.manager().show("Saved", Severity::Success).await;

        let alerts = page.manager().alerts().await;
        let legacy = alerts.iter().find(|alert| alert.id == legacy_id).unwrap();
        let direct = alerts.iter().find(|alert| alert.id == direct_id).unwrap();

        assert_eq!(legacy.message, direct.message);
        assert_eq!(legacy.severity, direct.severity);
        assert_eq!(legacy.duration, DEFAULT);
        assert_eq!(direct.duration, DEFAULT);
    }

    #[tokio::test(start_paused = true)]
    async fn test_existing_legacy_entry_point_is_kept() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);

        let mut entry_points = EntryPoints::new();
        entry_points.register(
            "showMessage",
            Arc::new(move |_message: String, _marker: String| {
                calls_clone.fetch_add(1, Ordering::SeqCst);
                async { None::<AlertId> }.boxed()
            }),
        );

        let (mut page, _) = create_test_page(entry_points);
        page.load();

        let result = page
            .call_entry_point("showMessage", "Saved".to_string(), "success".to_string())
            .await;

        assert_eq!(result, Some(None));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(page.manager().is_empty().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_call_missing_entry_point() {
        let (page, _) = create_test_page(EntryPoints::new());

        let result = page
            .call_entry_point("showMessage", "Saved".to_string(), "success".to_string())
            .await;

        assert!(result.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_handle_line_ignores_other_lines() {
        let (page, _) = create_test_page(EntryPoints::new());

        assert!(page.handle_line("hello").await.is_none());
        assert!(page.handle_line("!other list").await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_handle_line_show_and_close() {
        let (page, _) = create_test_page(EntryPoints::new());

        let response = page.handle_line("!toast show success Order placed").await;
        assert_eq!(response.as_deref(), Some("Alert #0 shown."));

        let id = page.manager().alerts().await[0].id;
        assert!(page.handle_line(&format!("!toast close {}", id)).await.is_none());
        assert_eq!(page.manager().state(id).await, AlertState::Removing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_handle_line_legacy_before_load() {
        let (page, _) = create_test_page(EntryPoints::new());

        let response = page.handle_line("!toast legacy success Saved").await;

        assert_eq!(
            response.as_deref(),
            Some("No legacy entry point on this page.")
        );
        assert!(page.manager().is_empty().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_handle_line_pointer_on_unknown_alert() {
        let (page, _) = create_test_page(EntryPoints::new());

        let response = page.handle_line("!toast enter 42").await;

        assert_eq!(response.as_deref(), Some("No alert #42 is displayed."));
    }

    #[tokio::test(start_paused = true)]
    async fn test_handle_line_hover_keeps_alert() {
        let (page, _) = create_test_page(EntryPoints::new());
        page.handle_line("!toast timed 1000 info Hello").await;
        let id = page.manager().alerts().await[0].id;

        page.handle_line(&format!("!toast enter {}", id)).await;
        page.handle_line("!toast wait 3000").await;

        assert_eq!(page.manager().state(id).await, AlertState::Visible);
        assert!(!page.manager().has_pending_dismissal(id).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_handle_line_list_shows_durations() {
        let (page, _) = create_test_page(EntryPoints::new());
        page.handle_line("!toast show success Order placed").await;
        page.handle_line("!toast timed 1200 info Saved").await;

        let response = page.handle_line("!toast list").await;

        assert_eq!(
            response.as_deref(),
            Some(
                "Displayed alerts:\n\
                 - #0 ✓ Success: Order placed (visible, 5000 ms)\n\
                 - #1 i Information: Saved (visible, 1200 ms)"
            )
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_writes_responses() {
        let (mut page, _) = create_test_page(EntryPoints::new());
        page.load();

        let input: &[u8] = b"just chatting\n\
            !toast legacy warning Low stock\n\
            !toast list\n\
            !toast unknown\n";
        let mut output = Vec::new();

        page.run(input, &mut output).await.unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(
            output,
            "Alert #0 shown.\n\
             Displayed alerts:\n\
             - #0 ! Warning: Low stock (visible, 5000 ms)\n\
             Unknown command. Type `!toast help` for more information.\n"
        );
    }
}
