use crate::app::api::ApiCtx;
use crate::components::catalog::CatalogView;
use crate::components::search::SearchPanel;
use crate::components::share_modal::ShareModal;
use crate::components::shell::AppShell;
use crate::components::toast::ToastHost;
use crate::core::config::PortalConfig;
use crate::core::shortcuts::ShortcutOutcome;
use crate::core::store::AppStore;
use crate::features::catalog::state::CatalogState;
use crate::services::browser;
use preferences::{api_base_url, load_embedded_materials, load_theme};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

pub(crate) mod actions;
pub(crate) mod api;
mod bindings;
mod preferences;

#[function_component(PortalApp)]
pub fn portal_app() -> Html {
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());
    let theme = use_selector(|store: &AppStore| store.theme);
    let notifications = use_selector(|store: &AppStore| store.notifications.items().to_vec());

    {
        use_effect_with_deps(
            move |theme| {
                browser::apply_theme(**theme);
                || ()
            },
            theme.clone(),
        );
    }

    {
        use_effect_with_deps(
            move |_| {
                let on_shortcut = Callback::from(|outcome: ShortcutOutcome| match outcome {
                    ShortcutOutcome::FocusSearch => browser::focus_search(),
                    ShortcutOutcome::CloseDialogs => actions::close_dialogs(),
                });
                let page = bindings::install(PortalConfig::DEFAULT, on_shortcut);
                move || drop(page)
            },
            (),
        );
    }

    let on_toggle_theme = Callback::from(|()| actions::toggle_theme());
    let on_dismiss = Callback::from(actions::dismiss_notification);

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <AppShell theme={*theme} {on_toggle_theme}>
                <SearchPanel />
                <CatalogView />
            </AppShell>
            <ShareModal />
            <ToastHost notifications={(*notifications).clone()} {on_dismiss} />
        </ContextProvider<ApiCtx>>
    }
}

/// Seed the store from the page, then mount.
///
/// The theme and catalog are loaded before the first render so the first
/// paint already uses the stored theme.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let theme = load_theme();
    let catalog = CatalogState::from_materials(load_embedded_materials());
    Dispatch::<AppStore>::new().reduce_mut(|store| {
        store.theme = theme;
        store.catalog = catalog;
    });
    match gloo::utils::document().get_element_by_id(PortalConfig::DEFAULT.mount_id) {
        Some(root) => yew::Renderer::<PortalApp>::with_root(root).render(),
        None => yew::Renderer::<PortalApp>::new().render(),
    };
}
