//! Persistence and environment helpers for the app shell.

use crate::core::config::PortalConfig;
use crate::core::theme::ThemeMode;
use crate::features::catalog::state::parse_embedded_materials;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::{document, window};
use studyhall_api_models::MaterialSummary;

/// Stored theme, falling back to what the server rendered.
///
/// The key holds the bare token (`dark`), as the server-rendered pages write
/// it; a JSON-quoted value is accepted too.
pub(crate) fn load_theme() -> ThemeMode {
    LocalStorage::raw()
        .get_item(PortalConfig::DEFAULT.theme_storage_key)
        .ok()
        .flatten()
        .and_then(|value| ThemeMode::parse(value.trim_matches('"')))
        .unwrap_or_else(document_theme)
}

/// Theme the server rendered on `<html data-bs-theme>`, light when absent.
fn document_theme() -> ThemeMode {
    document()
        .document_element()
        .and_then(|root| root.get_attribute("data-bs-theme"))
        .and_then(|value| ThemeMode::parse(&value))
        .unwrap_or_default()
}

pub(crate) fn persist_theme(theme: ThemeMode) {
    let key = PortalConfig::DEFAULT.theme_storage_key;
    if let Err(err) = LocalStorage::raw().set_item(key, theme.as_str()) {
        log_storage_error("set", key, &format!("{err:?}"));
    }
}

/// Same-origin base URL for API calls.
pub(crate) fn api_base_url() -> String {
    window()
        .location()
        .origin()
        .unwrap_or_else(|_| String::new())
}

/// Materials embedded by the server, empty when the block is absent.
pub(crate) fn load_embedded_materials() -> Vec<MaterialSummary> {
    let Some(raw) = document()
        .get_element_by_id(PortalConfig::DEFAULT.materials_script_id)
        .and_then(|node| node.text_content())
    else {
        return Vec::new();
    };
    match parse_embedded_materials(&raw) {
        Ok(materials) => materials,
        Err(err) => {
            console::error!("embedded materials are malformed", err.to_string());
            Vec::new()
        }
    }
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
