//! One-shot wiring over the server-rendered page.
//!
//! # Design
//! - Runs once when the app mounts; elements added later are not re-bound.
//! - Every listener, timer and observer is owned by [`PageBindings`] and
//!   released when the app unmounts.

use crate::core::config::PortalConfig;
use crate::core::format::format_file_size;
use crate::core::notify::NotificationRequest;
use crate::core::shortcuts::{Modifiers, ShortcutOutcome, interpret_shortcut};
use crate::core::store::AppStore;
use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use gloo::utils::{document, window};
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Element, ErrorEvent, HtmlFormElement, HtmlImageElement, HtmlInputElement,
    IntersectionObserver, IntersectionObserverEntry, KeyboardEvent, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};
use yew::Callback;
use yewdux::prelude::Dispatch;

/// Shown when an uncaught script error reaches the window.
pub(crate) const UNCAUGHT_ERROR_MESSAGE: &str = "An error occurred. Please refresh the page.";

/// Handles for everything installed at mount.
pub(crate) struct PageBindings {
    _listeners: Vec<EventListener>,
    _timers: Vec<Timeout>,
    _lazy_images: Option<LazyImages>,
}

struct LazyImages {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for LazyImages {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Wire the page. Shortcuts are forwarded to `on_shortcut`.
pub(crate) fn install(config: PortalConfig, on_shortcut: Callback<ShortcutOutcome>) -> PageBindings {
    log_page_load();
    native_tooltips();
    register_service_worker(config.service_worker_path);

    let mut listeners = Vec::new();
    listeners.extend(smooth_scroll_anchors());
    listeners.extend(validate_forms());
    listeners.extend(file_previews(config.file_preview_id));
    listeners.push(global_error_handler());
    listeners.push(keyboard_shortcuts(on_shortcut));

    PageBindings {
        _listeners: listeners,
        _timers: auto_hide_alerts(config.alert_auto_hide_ms),
        _lazy_images: lazy_images(),
    }
}

fn select_all(selector: &str) -> Vec<Element> {
    let Ok(list) = document().query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn log_page_load() {
    if let Some(performance) = window().performance() {
        console::log!(format!("Page loaded in {:.2}ms", performance.now()));
    }
}

/// Give Bootstrap-style tooltip triggers a native `title`.
fn native_tooltips() {
    for element in select_all("[data-bs-toggle=\"tooltip\"], [data-bs-toggle=\"popover\"]") {
        if element.has_attribute("title") {
            continue;
        }
        let text = element
            .get_attribute("data-bs-title")
            .or_else(|| element.get_attribute("data-bs-content"));
        if let Some(text) = text {
            let _ = element.set_attribute("title", &text);
        }
    }
}

fn auto_hide_alerts(delay_ms: u32) -> Vec<Timeout> {
    select_all(".alert:not([data-portal-toast])")
        .into_iter()
        .map(|alert| {
            Timeout::new(delay_ms, move || {
                let _ = alert.class_list().remove_1("show");
                alert.remove();
            })
        })
        .collect()
}

fn smooth_scroll_anchors() -> Vec<EventListener> {
    select_all("a[href^=\"#\"]")
        .into_iter()
        .map(|anchor| {
            let href = anchor.get_attribute("href").unwrap_or_default();
            EventListener::new_with_options(
                &anchor,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    event.prevent_default();
                    if href.len() < 2 {
                        return;
                    }
                    if let Ok(Some(target)) = document().query_selector(&href) {
                        let options = ScrollIntoViewOptions::new();
                        options.set_behavior(ScrollBehavior::Smooth);
                        options.set_block(ScrollLogicalPosition::Start);
                        target.scroll_into_view_with_scroll_into_view_options(&options);
                    }
                },
            )
        })
        .collect()
}

fn validate_forms() -> Vec<EventListener> {
    select_all(".needs-validation")
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlFormElement>().ok())
        .map(|form| {
            let target = form.clone();
            EventListener::new_with_options(
                &target,
                "submit",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    if !form.check_validity() {
                        event.prevent_default();
                        event.stop_propagation();
                    }
                    let _ = form.class_list().add_1("was-validated");
                },
            )
        })
        .collect()
}

fn file_previews(preview_id: &'static str) -> Vec<EventListener> {
    select_all("input[type=\"file\"]")
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlInputElement>().ok())
        .map(|input| {
            let target = input.clone();
            EventListener::new(&target, "change", move |_event| {
                if let Some(file) = input.files().and_then(|files| files.get(0)) {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    let size = file.size() as u64;
                    render_file_preview(preview_id, &file.name(), size);
                }
            })
        })
        .collect()
}

fn render_file_preview(preview_id: &str, name: &str, size: u64) {
    let doc = document();
    let Some(preview) = doc.get_element_by_id(preview_id) else {
        return;
    };
    let Ok(alert) = doc.create_element("div") else {
        return;
    };
    alert.set_class_name("alert alert-info");
    if let Ok(icon) = doc.create_element("i") {
        icon.set_class_name("bi bi-file-earmark me-2");
        let _ = alert.append_child(&icon);
    }
    let text = doc.create_text_node(&format!("Selected: {name} ({})", format_file_size(size)));
    let _ = alert.append_child(&text);
    preview.set_inner_html("");
    let _ = preview.append_child(&alert);
}

fn lazy_images() -> Option<LazyImages> {
    let images = select_all("img[data-src]");
    if images.is_empty() {
        return None;
    }
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    reveal_image(&target);
                    observer.unobserve(&target);
                }
            }
        },
    );
    match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => {
            for image in &images {
                observer.observe(image);
            }
            Some(LazyImages {
                observer,
                _callback: callback,
            })
        }
        Err(_) => {
            images.iter().for_each(reveal_image);
            None
        }
    }
}

fn reveal_image(target: &Element) {
    if let (Some(src), Some(image)) = (
        target.get_attribute("data-src"),
        target.dyn_ref::<HtmlImageElement>(),
    ) {
        image.set_src(&src);
    }
    let _ = target.class_list().remove_1("lazy");
}

fn register_service_worker(path: &'static str) {
    let navigator = window().navigator();
    let supported =
        js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker")).unwrap_or(false);
    if !supported {
        return;
    }
    let promise = navigator.service_worker().register(path);
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(registration) => console::log!("SW registered: ", registration),
            Err(err) => console::log!("SW registration failed: ", err),
        }
    });
}

fn global_error_handler() -> EventListener {
    EventListener::new(&window(), "error", |event| {
        let detail = event
            .dyn_ref::<ErrorEvent>()
            .map(ErrorEvent::message)
            .unwrap_or_default();
        console::error!("JavaScript error:", detail);
        Dispatch::<AppStore>::new().reduce_mut(|store| {
            store.notify(NotificationRequest::danger(UNCAUGHT_ERROR_MESSAGE));
        });
    })
}

fn keyboard_shortcuts(on_shortcut: Callback<ShortcutOutcome>) -> EventListener {
    EventListener::new_with_options(
        &document(),
        "keydown",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let modifiers = Modifiers {
                ctrl: event.ctrl_key(),
                meta: event.meta_key(),
            };
            if let Some(outcome) = interpret_shortcut(&event.key(), modifiers) {
                if outcome == ShortcutOutcome::FocusSearch {
                    event.prevent_default();
                }
                on_shortcut.emit(outcome);
            }
        },
    )
}
