//! Store-backed orchestration for user actions.
//!
//! # Design
//! - Pure resolvers decide the outcome; these helpers only fetch, apply the
//!   side effect and push the notification.
//! - Async work runs on `yew::platform::spawn_local`.

use super::preferences::persist_theme;
use crate::core::store::AppStore;
use crate::features::catalog::state::ViewMode;
use crate::features::download::api::download_material;
use crate::features::favorites::api::add_to_favorites;
use crate::features::outcome::ActionOutcome;
use crate::features::placeholders::ComingSoon;
use crate::features::search::api::search_materials;
use crate::features::search::state::SearchStep;
use crate::features::share::api::send_share;
use crate::features::share::state::{ShareChannel, ShareTarget};
use crate::services::api::PortalClient;
use crate::services::browser;
use gloo::console;
use std::rc::Rc;
use studyhall_api_models::MaterialSummary;
use yew::platform::spawn_local;
use yewdux::prelude::Dispatch;

fn dispatch() -> Dispatch<AppStore> {
    Dispatch::<AppStore>::new()
}

fn finish(outcome: &ActionOutcome) {
    if let Some(effect) = &outcome.effect {
        browser::perform(effect);
    }
    dispatch().reduce_mut(|store| {
        store.notify_outcome(outcome);
    });
}

pub(crate) fn download(client: Rc<PortalClient>, material: MaterialSummary) {
    spawn_local(async move {
        let outcome =
            download_material(&client, &material.material_id, &material.material_name).await;
        finish(&outcome);
    });
}

/// Load a material into the share dialog and show it.
pub(crate) fn open_share(material: &MaterialSummary) {
    let target = ShareTarget {
        id: material.material_id.clone(),
        name: material.material_name.clone(),
        link: material.material_link.clone(),
    };
    dispatch().reduce_mut(|store| store.share.open(target));
}

/// Submit the dialog's draft on `channel`.
///
/// The draft is captured before the request goes out, so reopening the dialog
/// meanwhile cannot change what is sent or which dialog gets closed.
pub(crate) fn share(client: Rc<PortalClient>, channel: ShareChannel) {
    let mut submission = None;
    dispatch().reduce_mut(|store| submission = store.share.begin_submit(channel));
    let Some(submission) = submission else {
        return;
    };
    spawn_local(async move {
        let outcome = send_share(&client, &submission).await;
        let close_dialog = outcome.as_ref().is_some_and(ActionOutcome::succeeded);
        dispatch().reduce_mut(|store| {
            store.share.complete(submission.token, close_dialog);
        });
        if let Some(outcome) = outcome {
            finish(&outcome);
        }
    });
}

pub(crate) fn favorite(client: Rc<PortalClient>, material: MaterialSummary) {
    spawn_local(async move {
        let note = add_to_favorites(&client, &material.material_id).await;
        dispatch().reduce_mut(|store| {
            store.notify(note);
        });
    });
}

pub(crate) fn coming_soon(stub: ComingSoon) {
    dispatch().reduce_mut(|store| {
        store.notify(stub.notification());
    });
}

pub(crate) fn close_dialogs() {
    dispatch().reduce_mut(|store| store.share.close());
}

pub(crate) fn clear_filters() {
    dispatch().reduce_mut(|store| {
        let note = store.catalog.clear_filters();
        store.notify(note);
    });
}

pub(crate) fn set_view(view: ViewMode) {
    dispatch().reduce_mut(|store| store.catalog.set_view(view));
}

pub(crate) fn set_sort(index: usize) {
    dispatch().reduce_mut(|store| store.catalog.set_sort(index));
}

pub(crate) fn toggle_category(name: &str) {
    dispatch().reduce_mut(|store| store.catalog.toggle_category(name));
}

pub(crate) fn dismiss_notification(id: u64) {
    dispatch().reduce_mut(|store| store.notifications.dismiss(id));
}

/// Flip the theme and store the choice.
pub(crate) fn toggle_theme() {
    let mut theme = None;
    dispatch().reduce_mut(|store| theme = Some(store.toggle_theme()));
    if let Some(theme) = theme {
        persist_theme(theme);
    }
}

/// Run a debounced query; only the newest response is kept.
pub(crate) fn search(client: Rc<PortalClient>, query: String) {
    console::log!(format!("Searching for: {query}"));
    let mut step = SearchStep::Skip;
    dispatch().reduce_mut(|store| step = store.search.begin(&query));
    let SearchStep::Fetch { generation, query } = step else {
        return;
    };
    spawn_local(async move {
        let result = search_materials(&client, &query).await;
        dispatch().reduce_mut(|store| {
            match result {
                Ok(materials) => store.search.apply(generation, materials),
                Err(_) => store.search.fail(generation),
            };
        });
    });
}
