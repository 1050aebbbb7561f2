//! Browser side effects requested by feature outcomes.

use crate::core::theme::ThemeMode;
use crate::features::outcome::Effect;
use gloo::console;
use gloo::utils::{document, window};
use wasm_bindgen::JsCast;
use web_sys::{HtmlAnchorElement, HtmlElement};

/// Carry out an action's side effect.
pub(crate) fn perform(effect: &Effect) {
    let result = match effect {
        Effect::Download { url, filename } => trigger_download(url, filename),
        Effect::Navigate { url } => window().location().set_href(url),
        Effect::OpenWindow { url } => window()
            .open_with_url_and_target(url, "_blank")
            .map(|_| ()),
    };
    if let Err(err) = result {
        console::error!("browser action failed", err);
    }
}

fn trigger_download(url: &str, filename: &str) -> Result<(), wasm_bindgen::JsValue> {
    let doc = document();
    let anchor: HtmlAnchorElement = doc.create_element("a")?.dyn_into()?;
    anchor.set_href(url);
    anchor.set_download(filename);
    let body = doc
        .body()
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("document has no body"))?;
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Ok(())
}

/// Apply the theme to the document root.
pub(crate) fn apply_theme(theme: ThemeMode) {
    if let Some(root) = document().document_element() {
        let _ = root.set_attribute("data-bs-theme", theme.as_str());
    }
}

/// Focus the page's search box, when it has one.
pub(crate) fn focus_search() {
    if let Ok(Some(input)) = document().query_selector("input[name=\"query\"]") {
        if let Some(input) = input.dyn_ref::<HtmlElement>() {
            let _ = input.focus();
        }
    }
}
