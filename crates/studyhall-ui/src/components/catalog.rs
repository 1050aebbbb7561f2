//! Material catalog: toolbar, list/grid body and per-material actions.

use crate::app::actions;
use crate::app::api::ApiCtx;
use crate::components::tooltip::{Tooltip, TooltipPlacement};
use crate::core::store::AppStore;
use crate::features::catalog::state::{SortOrder, ViewMode, select_visible};
use crate::features::placeholders::ComingSoon;
use studyhall_api_models::MaterialSummary;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct MaterialActionsProps {
    pub material: MaterialSummary,
}

#[function_component(MaterialActions)]
pub(crate) fn material_actions(props: &MaterialActionsProps) -> Html {
    let api = use_context::<ApiCtx>();
    let material = props.material.clone();

    let on_download = {
        let api = api.clone();
        let material = material.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(api) = &api {
                actions::download(api.client.clone(), material.clone());
            }
        })
    };
    let on_share = {
        let material = material.clone();
        Callback::from(move |_: MouseEvent| actions::open_share(&material))
    };
    let on_favorite = Callback::from(move |_: MouseEvent| {
        if let Some(api) = &api {
            actions::favorite(api.client.clone(), material.clone());
        }
    });
    let on_preview = Callback::from(|_: MouseEvent| actions::coming_soon(ComingSoon::Preview));

    html! {
        <div class="btn-group btn-group-sm" role="group" aria-label="Material actions">
            <Tooltip tip="Download">
                <button type="button" class="btn btn-primary" onclick={on_download}>
                    <i class="bi bi-download"></i>
                </button>
            </Tooltip>
            <Tooltip tip="Share">
                <button type="button" class="btn btn-outline-secondary" onclick={on_share}>
                    <i class="bi bi-share"></i>
                </button>
            </Tooltip>
            <Tooltip tip="Add to favorites">
                <button type="button" class="btn btn-outline-danger" onclick={on_favorite}>
                    <i class="bi bi-heart"></i>
                </button>
            </Tooltip>
            <Tooltip tip="Preview" placement={TooltipPlacement::Left}>
                <button type="button" class="btn btn-outline-secondary" onclick={on_preview}>
                    <i class="bi bi-eye"></i>
                </button>
            </Tooltip>
        </div>
    }
}

#[function_component(CatalogView)]
pub(crate) fn catalog_view() -> Html {
    let catalog = use_selector(|store: &AppStore| store.catalog.clone());
    let visible = select_visible(&catalog);

    let view_button = |mode: ViewMode, icon: &'static str, label: &'static str| {
        let active = catalog.view == mode;
        html! {
            <button
                type="button"
                class={classes!("btn", "btn-outline-secondary", active.then_some("active"))}
                aria-pressed={active.to_string()}
                aria-label={label}
                onclick={Callback::from(move |_: MouseEvent| actions::set_view(mode))}
            >
                <i class={classes!("bi", icon)}></i>
            </button>
        }
    };

    let on_sort = Callback::from(|event: Event| {
        if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
            if let Ok(index) = usize::try_from(select.selected_index()) {
                actions::set_sort(index);
            }
        }
    });

    let categories = catalog.categories.iter().enumerate().map(|(index, filter)| {
        let id = format!("category-{index}");
        let name = filter.name.clone();
        html! {
            <div class="form-check form-check-inline">
                <input
                    class="form-check-input"
                    type="checkbox"
                    id={id.clone()}
                    checked={filter.checked}
                    onchange={Callback::from(move |_: Event| actions::toggle_category(&name))}
                />
                <label class="form-check-label" for={id}>{filter.name.clone()}</label>
            </div>
        }
    });

    let body = if visible.is_empty() {
        html! { <p class="text-muted my-4">{"No materials match the selected filters."}</p> }
    } else {
        match catalog.view {
            ViewMode::List => render_list(&visible),
            ViewMode::Grid => render_grid(&visible),
        }
    };

    html! {
        <section id="materials" class="mt-4">
            <div class="d-flex flex-wrap align-items-center gap-3 mb-3">
                <div class="btn-group btn-group-sm" role="group" aria-label="Layout">
                    {view_button(ViewMode::List, "bi-list-ul", "List view")}
                    {view_button(ViewMode::Grid, "bi-grid-3x3-gap", "Grid view")}
                </div>
                <div class="flex-grow-1">{for categories}</div>
                <select class="form-select form-select-sm w-auto" aria-label="Sort" onchange={on_sort}>
                    {for SortOrder::ALL.iter().enumerate().map(|(index, order)| html! {
                        <option value={index.to_string()} selected={index == catalog.sort_index()}>
                            {order.label()}
                        </option>
                    })}
                </select>
                <button
                    type="button"
                    class="btn btn-sm btn-link"
                    onclick={Callback::from(|_: MouseEvent| actions::clear_filters())}
                >
                    {"Clear filters"}
                </button>
            </div>
            {body}
        </section>
    }
}

/// One row per material.
pub(crate) fn render_list(materials: &[MaterialSummary]) -> Html {
    html! {
        <div class="list-group">
            {for materials.iter().map(|material| html! {
                <div
                    class="list-group-item d-flex justify-content-between align-items-center"
                    key={material.material_id.as_str().to_string()}
                >
                    <div>
                        <div class="fw-semibold">{material.material_name.clone()}</div>
                        {labels(material)}
                    </div>
                    <MaterialActions material={material.clone()} />
                </div>
            })}
        </div>
    }
}

fn render_grid(materials: &[MaterialSummary]) -> Html {
    html! {
        <div class="row row-cols-1 row-cols-md-3 g-3">
            {for materials.iter().map(|material| html! {
                <div class="col" key={material.material_id.as_str().to_string()}>
                    <div class="card h-100">
                        <div class="card-body">
                            <h5 class="card-title">{material.material_name.clone()}</h5>
                            {labels(material)}
                        </div>
                        <div class="card-footer bg-transparent">
                            <MaterialActions material={material.clone()} />
                        </div>
                    </div>
                </div>
            })}
        </div>
    }
}

fn labels(material: &MaterialSummary) -> Html {
    html! {
        <div class="small text-muted">
            {for material.category.iter().map(|category| html! {
                <span class="badge text-bg-secondary me-2">{category.clone()}</span>
            })}
            {for material.subject.iter().map(|subject| html! { <span>{subject.clone()}</span> })}
        </div>
    }
}
