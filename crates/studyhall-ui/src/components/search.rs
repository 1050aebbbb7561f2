use crate::app::actions;
use crate::app::api::ApiCtx;
use crate::components::catalog::render_list;
use crate::components::search_input::SearchInput;
use crate::core::store::AppStore;
use crate::features::search::state::SearchStatus;
use yew::prelude::*;
use yewdux::prelude::use_selector;

/// Search box with live results underneath.
#[function_component(SearchPanel)]
pub(crate) fn search_panel() -> Html {
    let search = use_selector(|store: &AppStore| store.search.clone());
    let api = use_context::<ApiCtx>();
    let on_search = Callback::from(move |query: String| {
        if let Some(api) = &api {
            actions::search(api.client.clone(), query);
        }
    });

    let results = match search.status {
        SearchStatus::Idle => html! {},
        SearchStatus::Loading => html! {
            <div class="d-flex align-items-center gap-2 text-muted small mt-2">
                <span class="spinner-border spinner-border-sm" role="status" aria-hidden="true"></span>
                {"Searching..."}
            </div>
        },
        SearchStatus::Failed => html! {
            <p class="text-danger small mt-2">{"Search is unavailable right now."}</p>
        },
        SearchStatus::Ready if search.results.is_empty() => html! {
            <p class="text-muted small mt-2">{format!("No materials found for \"{}\".", search.query.trim())}</p>
        },
        SearchStatus::Ready => html! {
            <div class="mt-2">{render_list(&search.results)}</div>
        },
    };

    html! {
        <section id="search">
            <SearchInput value={AttrValue::from(search.query.clone())} {on_search} />
            {results}
        </section>
    }
}
