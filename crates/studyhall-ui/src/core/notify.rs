//! Toast notification model.
//!
//! # Design
//! - Notifications are plain data; the host component owns timers and markup.
//! - Ids are monotonic so dismissals never hit a newer toast.
//! - No queueing: every push is shown immediately at the shared anchor.

use crate::core::config::PortalConfig;
use std::fmt;

/// Visual severity of a notification.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    /// Informational message.
    #[default]
    Info,
    /// Completed action.
    Success,
    /// Failed action.
    Danger,
    /// Degraded or cautionary state.
    Warning,
    /// Severity token not known to the portal, rendered verbatim.
    Other(String),
}

impl Severity {
    /// Parse a severity token, keeping unknown values uninterpreted.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "info" => Self::Info,
            "success" => Self::Success,
            "danger" => Self::Danger,
            "warning" => Self::Warning,
            other => Self::Other(other.to_string()),
        }
    }

    /// Token used in the `alert-*` class.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Other(value) => value,
        }
    }

    /// Full alert class for this severity.
    #[must_use]
    pub fn alert_class(&self) -> String {
        format!("alert-{}", self.as_str())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single on-screen notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    /// Monotonic identifier.
    pub id: u64,
    /// Display text.
    pub message: String,
    /// Severity classification.
    pub severity: Severity,
    /// Time on screen before automatic removal.
    pub duration_ms: u32,
}

/// Message and severity requested by an action, before an id is assigned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationRequest {
    /// Display text.
    pub message: String,
    /// Severity classification.
    pub severity: Severity,
}

impl NotificationRequest {
    /// Build a request with an explicit severity.
    #[must_use]
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    /// Informational request.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    /// Success request.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    /// Danger request.
    #[must_use]
    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Danger)
    }
}

/// Ordered set of live notifications.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationCenter {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationCenter {
    /// Show a notification with an explicit severity and lifetime.
    pub fn push(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration_ms: u32,
    ) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            message: message.into(),
            severity,
            duration_ms,
        });
        id
    }

    /// Show an informational notification with the default lifetime.
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.push(
            message,
            Severity::Info,
            PortalConfig::DEFAULT.notification_ms,
        )
    }

    /// Show a prepared request with the default lifetime.
    pub fn show_request(&mut self, request: NotificationRequest) -> u64 {
        self.push(
            request.message,
            request.severity,
            PortalConfig::DEFAULT.notification_ms,
        )
    }

    /// Remove a notification; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
    }

    /// Live notifications in creation order.
    #[must_use]
    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_round_trips_known_tokens() {
        for token in ["info", "success", "danger", "warning"] {
            assert_eq!(Severity::parse(token).as_str(), token);
        }
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn unknown_severity_passes_through() {
        let severity = Severity::parse("primary");
        assert_eq!(severity, Severity::Other("primary".to_string()));
        assert_eq!(severity.alert_class(), "alert-primary");
    }

    #[test]
    fn show_uses_info_and_default_duration() {
        let mut center = NotificationCenter::default();
        let id = center.show("Filters cleared");
        let item = &center.items()[0];
        assert_eq!(item.id, id);
        assert_eq!(item.severity, Severity::Info);
        assert_eq!(item.duration_ms, 5_000);
    }

    #[test]
    fn concurrent_pushes_stack_without_queueing() {
        let mut center = NotificationCenter::default();
        let first = center.push("one", Severity::Success, 1_000);
        let second = center.show_request(NotificationRequest::danger("two"));
        assert_ne!(first, second);
        assert_eq!(center.items().len(), 2);

        center.dismiss(first);
        assert_eq!(center.items().len(), 1);
        assert_eq!(center.items()[0].message, "two");

        center.dismiss(first);
        assert_eq!(center.items().len(), 1);
    }
}
