//! Actions that are not backed by an endpoint yet.

use crate::core::notify::NotificationRequest;

/// Portal features announced but not implemented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComingSoon {
    /// In-page material preview.
    Preview,
    /// Material upload dialog.
    Upload,
    /// Notifications panel.
    Notifications,
}

impl ComingSoon {
    /// Informational notification announcing the feature.
    #[must_use]
    pub fn notification(self) -> NotificationRequest {
        let message = match self {
            Self::Preview => "Preview feature coming soon!",
            Self::Upload => "Upload feature coming soon!",
            Self::Notifications => "Notifications feature coming soon!",
        };
        NotificationRequest::info(message)
    }
}

#[cfg(test)]
mod tests {
    use super::ComingSoon;
    use crate::core::notify::Severity;

    #[test]
    fn stubs_announce_with_info() {
        for (stub, text) in [
            (ComingSoon::Preview, "Preview feature coming soon!"),
            (ComingSoon::Upload, "Upload feature coming soon!"),
            (ComingSoon::Notifications, "Notifications feature coming soon!"),
        ] {
            let note = stub.notification();
            assert_eq!(note.severity, Severity::Info);
            assert_eq!(note.message, text);
        }
    }
}
