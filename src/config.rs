//! Configuration file structures for the toaster host.
//!
//! This module defines the configuration format. The configuration is split
//! into two sections: notification timings and page integration settings.
//! Every value has a default, so running without a configuration file is valid.
//!
//! # Configuration File Format
//!
//! ```yaml
//! # Notification timings
//! notifications:
//!   # Milliseconds before an alert dismisses itself
//!   default_duration_ms: 5000
//!   # Milliseconds before dismissal once the pointer leaves an alert
//!   hover_grace_ms: 2000
//!   # Milliseconds of the removal transition
//!   removal_delay_ms: 400
//!   # Maximum number of visible alerts
//!   max_visible: 5
//!
//! # Page integration
//! page:
//!   # Name of the legacy entry point installed when absent
//!   legacy_entry_point: showMessage
//! ```
//!
//! # Environment Variable Overrides
//!
//! Any value can be overridden with the `TOASTER_` prefix, `__` separating
//! sections from keys:
//!
//! ```bash
//! export TOASTER_NOTIFICATIONS__MAX_VISIBLE=3
//! export TOASTER_PAGE__LEGACY_ENTRY_POINT=notify
//! ```

use std::{path::Path, time::Duration};

use anyhow::bail;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::Deserialize;

/// Prefix of the environment variables overriding the configuration.
const ENV_PREFIX: &str = "TOASTER_";

/// Root configuration structure.
///
/// # Examples
///
/// ```no_run
/// # use toaster::config::Config;
/// let config = Config::load(Some("config.yaml")).unwrap();
/// println!("max visible alerts: {}", config.notifications.max_visible);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Notification timings
    pub notifications: Notifications,
    /// Page integration settings
    pub page: Page,
}

/// Notification timings and limits.
///
/// # YAML Section
///
/// ```yaml
/// notifications:
///   default_duration_ms: 5000
///   hover_grace_ms: 2000
///   removal_delay_ms: 400
///   max_visible: 5
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Notifications {
    /// Milliseconds an alert stays visible when nobody interacts with it.
    pub default_duration_ms: u64,

    /// Milliseconds before dismissal once the pointer leaves an alert.
    ///
    /// This delay replaces whatever remained of the original duration.
    pub hover_grace_ms: u64,

    /// Milliseconds between the start of the removal transition and the
    /// moment the alert is detached.
    pub removal_delay_ms: u64,

    /// Maximum number of visible alerts. Showing one more evicts the oldest.
    pub max_visible: usize,
}

impl Notifications {
    /// Returns the default auto-dismiss delay.
    pub fn default_duration(&self) -> Duration {
        Duration::from_millis(self.default_duration_ms)
    }

    /// Returns the dismissal delay applied when the pointer leaves an alert.
    pub fn hover_grace(&self) -> Duration {
        Duration::from_millis(self.hover_grace_ms)
    }

    /// Returns the duration of the removal transition.
    pub fn removal_delay(&self) -> Duration {
        Duration::from_millis(self.removal_delay_ms)
    }

    /// Returns the visible limit, never lower than one.
    pub fn max_visible(&self) -> usize {
        self.max_visible.max(1)
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Notifications {
            default_duration_ms: 5000,
            hover_grace_ms: 2000,
            removal_delay_ms: 400,
            max_visible: 5,
        }
    }
}

/// Page integration settings.
///
/// # YAML Section
///
/// ```yaml
/// page:
///   legacy_entry_point: showMessage
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Page {
    /// Name under which the legacy `(message, severity)` alias is installed.
    pub legacy_entry_point: String,
}

impl Default for Page {
    fn default() -> Self {
        Page {
            legacy_entry_point: "showMessage".to_string(),
        }
    }
}

impl Config {
    /// Loads the configuration.
    ///
    /// Values come from the defaults, then the YAML file if one is given, then
    /// the `TOASTER_` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the given file does not exist or if a value cannot
    /// be deserialized.
    pub fn load(path: Option<&str>) -> Result<Config, anyhow::Error> {
        let mut figment = Figment::new();

        if let Some(path) = path {
            if !Path::new(path).is_file() {
                bail!("config file {} not found", path);
            }
            figment = figment.merge(Yaml::file(path));
        }

        let config = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        Ok(config)
    }
}
