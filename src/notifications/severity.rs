//! Severity levels for notifications.
//!
//! This module provides the [`Severity`] enum together with the static lookup
//! table giving each level its icon and title. Parsing a severity never fails:
//! unknown markers fall back to [`Severity::Info`].

use std::fmt;

/// Prefix carried by the CSS classes of server-rendered message blocks.
const CSS_MARKER_PREFIX: &str = "alert-";

/// Severity of a notification.
///
/// The severity only drives presentation (icon, title and styling); it has no
/// influence on timing.
///
/// # Examples
///
/// ```
/// # use toaster::notifications::Severity;
/// assert_eq!(Severity::from_marker("danger"), Severity::Error);
/// assert_eq!(Severity::from_marker("alert-success"), Severity::Success);
/// assert_eq!(Severity::from_marker("something"), Severity::Info);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Operation completed successfully
    Success,
    /// Operation failed
    Error,
    /// Something needs attention but nothing failed
    Warning,
    /// Plain information, also the fallback for unknown markers
    #[default]
    Info,
}

impl Severity {
    /// Resolves a marker into a known severity.
    ///
    /// Accepts the bare level names, `danger` as a synonym of `error`, and the
    /// CSS form prefixed with `alert-`. Matching ignores case and surrounding
    /// whitespace.
    ///
    /// # Returns
    ///
    /// * `Some(Severity)` - The marker names a known severity
    /// * `None` - The marker is not recognized
    pub fn parse_known(marker: &str) -> Option<Self> {
        let lowered = marker.trim().to_ascii_lowercase();
        let marker = lowered
            .strip_prefix(CSS_MARKER_PREFIX)
            .unwrap_or(lowered.as_str());

        match marker {
            "success" => Some(Severity::Success),
            "error" | "danger" => Some(Severity::Error),
            "warning" => Some(Severity::Warning),
            "info" => Some(Severity::Info),
            _ => None,
        }
    }

    /// Resolves a marker, falling back to [`Severity::Info`] when unknown.
    pub fn from_marker(marker: &str) -> Self {
        Self::parse_known(marker).unwrap_or_default()
    }

    /// Resolves a whitespace separated CSS class list.
    ///
    /// Server-rendered blocks carry classes such as `alert alert-danger
    /// alert-dismissible`. The first class naming a known severity wins;
    /// without one the severity is [`Severity::Info`].
    pub fn from_css_classes(classes: &str) -> Self {
        classes
            .split_whitespace()
            .find_map(Self::parse_known)
            .unwrap_or_default()
    }

    /// Returns the glyph shown in the icon slot.
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Error => "✕",
            Severity::Warning => "!",
            Severity::Info => "i",
        }
    }

    /// Returns the title shown above the message.
    pub fn title(&self) -> &'static str {
        match self {
            Severity::Success => "Success",
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Info => "Information",
        }
    }
}

impl From<&str> for Severity {
    fn from(marker: &str) -> Self {
        Self::from_marker(marker)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        };
        f.write_str(name)
    }
}
