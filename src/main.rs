//! Toaster - Transient notifications for storefront pages.
//!
//! This is the entry point of the toaster host, which runs a page with its
//! notification manager and lets an operator drive it from the console.
//!
//! # Overview
//!
//! Alerts are short messages stacked in a single container. Each one carries
//! an icon and a title matching its severity, dismisses itself after a delay,
//! pauses while hovered and is evicted when too many are visible.
//!
//! # Features
//!
//! - **Severities**: success, error (or danger), warning and info
//! - **Auto-dismiss**: 5 seconds by default, configurable per alert
//! - **Hover pause**: no dismissal while the pointer is over an alert
//! - **Visible limit**: at most 5 alerts, the oldest is evicted first
//! - **Server messages**: messages rendered with the page become alerts
//! - **Legacy entry point**: `showMessage(message, severity)` for older scripts
//!
//! # Configuration
//!
//! An optional YAML file, see the [`config`] module:
//!
//! ```yaml
//! notifications:
//!   default_duration_ms: 5000
//!   max_visible: 5
//! ```
//!
//! # Usage
//!
//! ```bash
//! toaster --config config.yaml --messages messages.json
//! ```
//!
//! Then type commands on the standard input:
//!
//! - `!toast show success Order placed`
//! - `!toast enter 0`
//! - `!toast leave 0`
//! - `!toast list`
//! - `!toast help`
//!
//! # Architecture
//!
//! - [`commands`] - Console command parsing and handlers
//! - [`config`] - YAML configuration with environment variable overrides
//! - [`notifications`] - Alerts, severities and the notification manager
//! - [`page`] - Page host: entry points, ready reconciliation, console loop
//! - [`render`] - Renderer trait and the terminal renderer
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (default: `info`)
//! - `TOASTER_*` - Configuration overrides, e.g. `TOASTER_NOTIFICATIONS__MAX_VISIBLE=3`

use std::sync::Arc;

use clap::Parser;
use env_logger::Env;
use log::{error, info};
use tokio::io::{self, BufReader};

use crate::{
    config::Config,
    notifications::{MessageLoader, NotificationManager},
    page::{EntryPoints, Page},
    render::{Renderer, TerminalRenderer},
};

mod commands;
mod config;
mod notifications;
mod page;
mod render;

/// Command-line arguments for the toaster host.
///
/// # Examples
///
/// ```bash
/// toaster --config config.yaml --messages messages.json
/// ```
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file.
    ///
    /// Without it, every setting keeps its default value. Environment
    /// variables prefixed with `TOASTER_` override both.
    #[arg(short, long)]
    config: Option<String>,

    /// Path to the JSON file holding the server-rendered messages.
    ///
    /// The file is an array of `{ "tags": "...", "text": "..." }` objects.
    /// They are shown as alerts once the page is ready.
    #[arg(short, long)]
    messages: Option<String>,
}

/// Main entry point for the toaster host.
///
/// 1. **Logging Setup**: `info` level by default, `RUST_LOG` overrides it
/// 2. **Argument Parsing**: with `clap`
/// 3. **Configuration Loading**: defaults, YAML file, then environment
/// 4. **Page Load**: the legacy entry point is installed if absent
/// 5. **Page Ready**: server messages become alerts
/// 6. **Console Loop**: commands are read from the standard input until it closes
///
/// # Error Handling
///
/// Configuration and console errors are logged and the host returns without
/// panicking.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    info!("starting toaster {}...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let config = match Config::load(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("failed to load config: {}", e);
            return;
        }
    };

    let renderer: Arc<dyn Renderer> = Arc::new(TerminalRenderer::new());
    let manager = NotificationManager::new(Arc::clone(&renderer), config.notifications.clone());

    let mut page = Page::new(manager, renderer, EntryPoints::new(), &config.page);
    page.load();

    let messages = match args.messages {
        Some(path) => MessageLoader::new(path).load().await,
        None => Vec::new(),
    };
    page.ready(&messages).await;

    if let Err(e) = page.run(BufReader::new(io::stdin()), io::stdout()).await {
        error!("console loop failed: {}", e);
    }
}
