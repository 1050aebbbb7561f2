//! Favorites response handling.

use crate::core::notify::NotificationRequest;
use studyhall_api_models::FavoriteResponse;

/// Shown when the favorites endpoint is unreachable.
pub const FAVORITES_UNAVAILABLE: &str = "Favorites feature coming soon!";
const FAVORITE_ADDED: &str = "Added to favorites";

/// Notification for a decoded favorites response.
#[must_use]
pub fn resolve_favorite(response: &FavoriteResponse) -> NotificationRequest {
    match (&response.message, &response.error) {
        (Some(message), _) => NotificationRequest::success(message.clone()),
        (None, Some(error)) => NotificationRequest::danger(error.clone()),
        (None, None) => NotificationRequest::success(FAVORITE_ADDED),
    }
}

/// Notification when the request failed outright.
#[must_use]
pub fn favorites_unavailable() -> NotificationRequest {
    NotificationRequest::info(FAVORITES_UNAVAILABLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::notify::Severity;

    #[test]
    fn server_message_is_a_success() {
        let response = FavoriteResponse {
            message: Some("Saved to favorites".to_string()),
            error: None,
        };
        let note = resolve_favorite(&response);
        assert_eq!(note.severity, Severity::Success);
        assert_eq!(note.message, "Saved to favorites");
    }

    #[test]
    fn error_only_body_is_a_danger() {
        let response = FavoriteResponse {
            message: None,
            error: Some("Already a favorite".to_string()),
        };
        assert_eq!(resolve_favorite(&response).severity, Severity::Danger);
    }

    #[test]
    fn unreachable_endpoint_reads_as_coming_soon() {
        let note = favorites_unavailable();
        assert_eq!(note.severity, Severity::Info);
        assert_eq!(note.message, FAVORITES_UNAVAILABLE);
    }
}
