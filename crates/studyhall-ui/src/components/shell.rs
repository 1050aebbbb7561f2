use crate::app::actions;
use crate::components::tooltip::{Tooltip, TooltipPlacement};
use crate::core::theme::ThemeMode;
use crate::features::placeholders::ComingSoon;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
    pub theme: ThemeMode,
    pub on_toggle_theme: Callback<()>,
}

/// Navbar plus the main content container.
#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let (theme_icon, theme_tip) = match props.theme {
        ThemeMode::Light => ("bi-moon-stars", "Switch to dark theme"),
        ThemeMode::Dark => ("bi-sun", "Switch to light theme"),
    };
    let on_toggle_theme = {
        let cb = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_upload = Callback::from(|_: MouseEvent| actions::coming_soon(ComingSoon::Upload));
    let on_notifications =
        Callback::from(|_: MouseEvent| actions::coming_soon(ComingSoon::Notifications));

    html! {
        <>
            <nav class="navbar navbar-expand-lg bg-body-tertiary border-bottom">
                <div class="container">
                    <a class="navbar-brand fw-bold" href="#top">
                        <i class="bi bi-mortarboard me-2"></i>{"Studyhall"}
                    </a>
                    <div class="d-flex align-items-center gap-2 ms-auto">
                        <Tooltip tip="Upload material" placement={TooltipPlacement::Bottom}>
                            <button type="button" class="btn btn-sm btn-outline-primary" aria-label="Upload material" onclick={on_upload}>
                                <i class="bi bi-upload"></i>
                            </button>
                        </Tooltip>
                        <Tooltip tip="Notifications" placement={TooltipPlacement::Bottom}>
                            <button type="button" class="btn btn-sm btn-outline-secondary" aria-label="Notifications" onclick={on_notifications}>
                                <i class="bi bi-bell"></i>
                            </button>
                        </Tooltip>
                        <Tooltip tip={theme_tip} placement={TooltipPlacement::Bottom}>
                            <button type="button" class="btn btn-sm btn-outline-secondary" id="themeToggle" aria-label={theme_tip} onclick={on_toggle_theme}>
                                <i class={classes!("bi", theme_icon)}></i>
                            </button>
                        </Tooltip>
                    </div>
                </div>
            </nav>
            <main class="container py-4" id="top">
                { for props.children.iter() }
            </main>
        </>
    }
}
