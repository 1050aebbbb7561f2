//! Static configuration for the portal front-end.
//!
//! # Design
//! - The portal talks only to its own origin, so there is no runtime config file.
//! - Timings and well-known paths live here so bindings and components agree.

/// Tunables shared by the app shell, bindings and feature actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortalConfig {
    /// Default lifetime of a toast notification, in milliseconds.
    pub notification_ms: u32,
    /// Delay before server-rendered alert banners close themselves.
    pub alert_auto_hide_ms: u32,
    /// Debounce applied to the search box.
    pub search_debounce_ms: u32,
    /// Shortest query forwarded to the search endpoint.
    pub min_search_chars: usize,
    /// Script registered as the background service worker.
    pub service_worker_path: &'static str,
    /// Local storage key holding the theme preference.
    pub theme_storage_key: &'static str,
    /// Element id the app mounts into, when present.
    pub mount_id: &'static str,
    /// Element id of the inline JSON material list rendered by the server.
    pub materials_script_id: &'static str,
    /// Element id receiving the selected-file preview.
    pub file_preview_id: &'static str,
}

impl PortalConfig {
    /// Default portal configuration.
    pub const DEFAULT: Self = Self {
        notification_ms: 5_000,
        alert_auto_hide_ms: 5_000,
        search_debounce_ms: 300,
        min_search_chars: 2,
        service_worker_path: "/sw.js",
        theme_storage_key: "theme",
        mount_id: "root",
        materials_script_id: "portal-materials",
        file_preview_id: "filePreview",
    };
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::PortalConfig;

    #[test]
    fn defaults_match_portal_timings() {
        let config = PortalConfig::default();
        assert_eq!(config.notification_ms, 5_000);
        assert_eq!(config.alert_auto_hide_ms, 5_000);
        assert_eq!(config.search_debounce_ms, 300);
        assert_eq!(config.service_worker_path, "/sw.js");
        assert_eq!(config.theme_storage_key, "theme");
    }
}
