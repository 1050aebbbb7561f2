//! Download response handling.

use crate::core::notify::NotificationRequest;
use crate::features::outcome::{ActionOutcome, Effect};
use studyhall_api_models::DownloadResponse;

/// Shown when the server declines without an `error` text.
pub const DOWNLOAD_FAILED: &str = "Download failed";
/// Shown after the request itself failed.
pub const DOWNLOAD_RETRY: &str = "Download failed. Please try again.";

/// File name used when the server does not suggest one.
#[must_use]
pub fn fallback_filename(material_name: &str) -> String {
    format!("{material_name}.pdf")
}

/// Decide what a decoded download response does.
#[must_use]
pub fn resolve_download(response: &DownloadResponse, material_name: &str) -> ActionOutcome {
    match (response.success, response.download_url.as_ref()) {
        (true, Some(url)) => ActionOutcome::with_effect(
            NotificationRequest::success(format!("Downloaded: {material_name}")),
            Effect::Download {
                url: url.clone(),
                filename: response
                    .filename
                    .clone()
                    .unwrap_or_else(|| fallback_filename(material_name)),
            },
        ),
        _ => ActionOutcome::notify(NotificationRequest::danger(
            response
                .error
                .clone()
                .unwrap_or_else(|| DOWNLOAD_FAILED.to_string()),
        )),
    }
}

/// Outcome when the download lookup never produced a usable body.
#[must_use]
pub fn download_request_failed() -> ActionOutcome {
    ActionOutcome::notify(NotificationRequest::danger(DOWNLOAD_RETRY))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::notify::Severity;

    #[test]
    fn success_triggers_named_download() {
        let response = DownloadResponse {
            success: true,
            download_url: Some("/files/42".to_string()),
            filename: Some("algebra.pdf".to_string()),
            error: None,
        };
        let outcome = resolve_download(&response, "Algebra Notes");
        assert_eq!(
            outcome.effect,
            Some(Effect::Download {
                url: "/files/42".to_string(),
                filename: "algebra.pdf".to_string(),
            })
        );
        assert_eq!(outcome.notification.severity, Severity::Success);
        assert!(outcome.notification.message.contains("Algebra Notes"));
    }

    #[test]
    fn missing_filename_uses_material_name() {
        let response = DownloadResponse {
            success: true,
            download_url: Some("/files/7".to_string()),
            ..DownloadResponse::default()
        };
        match resolve_download(&response, "Calculus").effect {
            Some(Effect::Download { filename, .. }) => assert_eq!(filename, "Calculus.pdf"),
            other => panic!("unexpected effect {other:?}"),
        }
    }

    #[test]
    fn server_error_is_shown_verbatim_without_download() {
        let response = DownloadResponse {
            success: false,
            error: Some("File removed".to_string()),
            ..DownloadResponse::default()
        };
        let outcome = resolve_download(&response, "Algebra Notes");
        assert!(outcome.effect.is_none());
        assert_eq!(outcome.notification.severity, Severity::Danger);
        assert_eq!(outcome.notification.message, "File removed");
    }

    #[test]
    fn success_without_url_falls_back_to_generic_failure() {
        let response = DownloadResponse {
            success: true,
            ..DownloadResponse::default()
        };
        let outcome = resolve_download(&response, "x");
        assert!(!outcome.succeeded());
        assert_eq!(outcome.notification.message, DOWNLOAD_FAILED);
    }

    #[test]
    fn request_failure_asks_for_retry() {
        let outcome = download_request_failed();
        assert!(outcome.effect.is_none());
        assert_eq!(outcome.notification.message, DOWNLOAD_RETRY);
    }
}
