//! Share response handling.

use crate::core::notify::NotificationRequest;
use crate::features::outcome::{ActionOutcome, Effect};
use crate::features::share::state::ShareChannel;
use studyhall_api_models::ShareResponse;

/// Fallback failure text per channel.
#[must_use]
pub const fn failure_message(channel: ShareChannel) -> &'static str {
    match channel {
        ShareChannel::Email => "Failed to open email app",
        ShareChannel::Whatsapp => "Failed to open WhatsApp",
    }
}

const fn success_fallback(channel: ShareChannel) -> &'static str {
    match channel {
        ShareChannel::Email => "Opening email app",
        ShareChannel::Whatsapp => "Opening WhatsApp",
    }
}

/// Decide what a decoded share response does.
///
/// Success needs both the flag and the channel URL; email navigates the
/// current tab to the `mailto:` link, WhatsApp opens a new tab.
#[must_use]
pub fn resolve_share(channel: ShareChannel, response: &ShareResponse) -> ActionOutcome {
    let url = match channel {
        ShareChannel::Email => response.mailto_url.as_ref(),
        ShareChannel::Whatsapp => response.whatsapp_url.as_ref(),
    };
    match (response.success, url) {
        (true, Some(url)) => {
            let message = response
                .message
                .clone()
                .unwrap_or_else(|| success_fallback(channel).to_string());
            let effect = match channel {
                ShareChannel::Email => Effect::Navigate { url: url.clone() },
                ShareChannel::Whatsapp => Effect::OpenWindow { url: url.clone() },
            };
            ActionOutcome::with_effect(NotificationRequest::success(message), effect)
        }
        _ => ActionOutcome::notify(NotificationRequest::danger(
            response
                .error
                .clone()
                .unwrap_or_else(|| failure_message(channel).to_string()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::notify::Severity;

    #[test]
    fn email_success_navigates_to_mailto() {
        let response = ShareResponse {
            success: true,
            message: Some("Opening email app to share \"Algebra\"".to_string()),
            mailto_url: Some("mailto:?subject=Algebra".to_string()),
            ..ShareResponse::default()
        };
        let outcome = resolve_share(ShareChannel::Email, &response);
        assert_eq!(
            outcome.effect,
            Some(Effect::Navigate {
                url: "mailto:?subject=Algebra".to_string()
            })
        );
        assert_eq!(outcome.notification.severity, Severity::Success);
        assert!(outcome.notification.message.contains("Algebra"));
    }

    #[test]
    fn whatsapp_success_opens_new_window() {
        let response = ShareResponse {
            success: true,
            whatsapp_url: Some("https://wa.me/?text=hi".to_string()),
            ..ShareResponse::default()
        };
        let outcome = resolve_share(ShareChannel::Whatsapp, &response);
        assert_eq!(
            outcome.effect,
            Some(Effect::OpenWindow {
                url: "https://wa.me/?text=hi".to_string()
            })
        );
        assert_eq!(outcome.notification.message, "Opening WhatsApp");
    }

    #[test]
    fn wrong_channel_url_is_a_failure() {
        let response = ShareResponse {
            success: true,
            whatsapp_url: Some("https://wa.me/?text=hi".to_string()),
            ..ShareResponse::default()
        };
        let outcome = resolve_share(ShareChannel::Email, &response);
        assert!(outcome.effect.is_none());
        assert_eq!(outcome.notification.message, "Failed to open email app");
    }

    #[test]
    fn server_error_wins_over_fallback() {
        let response = ShareResponse {
            success: false,
            error: Some("Not authenticated".to_string()),
            ..ShareResponse::default()
        };
        for channel in [ShareChannel::Email, ShareChannel::Whatsapp] {
            let outcome = resolve_share(channel, &response);
            assert!(outcome.effect.is_none());
            assert_eq!(outcome.notification.severity, Severity::Danger);
            assert_eq!(outcome.notification.message, "Not authenticated");
        }
    }
}
