//! What a finished action asks the page to do.

use crate::core::notify::NotificationRequest;

/// Browser side effect requested by an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Save a file through a temporary anchor.
    Download {
        /// File URL.
        url: String,
        /// Suggested file name.
        filename: String,
    },
    /// Navigate the current tab, used for `mailto:` links.
    Navigate {
        /// Target URL.
        url: String,
    },
    /// Open a new tab, used for WhatsApp intents.
    OpenWindow {
        /// Target URL.
        url: String,
    },
}

/// Notification plus optional side effect produced by one action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionOutcome {
    /// Message to show.
    pub notification: NotificationRequest,
    /// Side effect to perform before showing it.
    pub effect: Option<Effect>,
}

impl ActionOutcome {
    /// Outcome that only shows a message.
    #[must_use]
    pub const fn notify(notification: NotificationRequest) -> Self {
        Self {
            notification,
            effect: None,
        }
    }

    /// Outcome with a side effect.
    #[must_use]
    pub const fn with_effect(notification: NotificationRequest, effect: Effect) -> Self {
        Self {
            notification,
            effect: Some(effect),
        }
    }

    /// Whether the action reached its external side effect.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.effect.is_some()
    }
}
