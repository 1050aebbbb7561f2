//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Use small, focused slices so reducers stay predictable.

use crate::core::notify::{NotificationCenter, NotificationRequest};
use crate::core::request::{ApiError, REQUEST_FAILED_MESSAGE};
use crate::core::theme::ThemeMode;
use crate::features::catalog::state::CatalogState;
use crate::features::outcome::ActionOutcome;
use crate::features::search::state::SearchState;
use crate::features::share::state::ShareDialogState;
use yewdux::prelude::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Live toast notifications.
    pub notifications: NotificationCenter,
    /// Active theme.
    pub theme: ThemeMode,
    /// Share dialog draft and button states.
    pub share: ShareDialogState,
    /// Material catalog.
    pub catalog: CatalogState,
    /// Live search.
    pub search: SearchState,
}

impl AppStore {
    /// Show a notification with the default lifetime.
    pub fn notify(&mut self, request: NotificationRequest) -> u64 {
        self.notifications.show_request(request)
    }

    /// Switch between light and dark, returning the theme to persist.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Announce a failed request.
    ///
    /// Every failure kind raises the same notice; feature follow-ups are
    /// pushed after it by the caller.
    pub fn report_request_failure(&mut self, _err: &ApiError) -> u64 {
        self.notify(NotificationRequest::danger(REQUEST_FAILED_MESSAGE))
    }

    /// Show the notification part of an action outcome.
    pub fn notify_outcome(&mut self, outcome: &ActionOutcome) -> u64 {
        self.notify(outcome.notification.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::notify::Severity;
    use crate::features::download::logic::{DOWNLOAD_RETRY, download_request_failed};
    use crate::features::outcome::Effect;

    #[test]
    fn default_store_starts_empty_and_light() {
        let store = AppStore::default();
        assert!(store.notifications.items().is_empty());
        assert_eq!(store.theme, ThemeMode::Light);
        assert!(!store.share.is_open());
        assert!(store.catalog.materials.is_empty());
    }

    #[test]
    fn notify_outcome_uses_outcome_message() {
        let mut store = AppStore::default();
        let outcome = ActionOutcome::with_effect(
            NotificationRequest::success("Downloaded: Algebra Notes"),
            Effect::Download {
                url: "/files/42".to_string(),
                filename: "algebra.pdf".to_string(),
            },
        );
        store.notify_outcome(&outcome);
        let item = &store.notifications.items()[0];
        assert_eq!(item.severity, Severity::Success);
        assert_eq!(item.message, "Downloaded: Algebra Notes");
    }

    #[test]
    fn request_failure_raises_one_danger_notice() {
        let mut store = AppStore::default();
        store.report_request_failure(&ApiError::Status { status: 500 });
        let items = store.notifications.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].severity, Severity::Danger);
        assert_eq!(items[0].message, REQUEST_FAILED_MESSAGE);
    }

    #[test]
    fn download_follow_up_comes_after_failure_notice() {
        let mut store = AppStore::default();
        let first = store.report_request_failure(&ApiError::Transport("offline".to_string()));
        let second = store.notify_outcome(&download_request_failed());
        assert!(first < second);
        let messages: Vec<&str> = store
            .notifications
            .items()
            .iter()
            .map(|item| item.message.as_str())
            .collect();
        assert_eq!(messages, [REQUEST_FAILED_MESSAGE, DOWNLOAD_RETRY]);
    }

    #[test]
    fn toggle_theme_returns_the_new_choice() {
        let mut store = AppStore::default();
        assert_eq!(store.toggle_theme(), ThemeMode::Dark);
        assert_eq!(store.theme, ThemeMode::Dark);
        assert_eq!(store.toggle_theme(), ThemeMode::Light);
    }
}
