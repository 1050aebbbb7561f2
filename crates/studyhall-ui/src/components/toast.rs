use crate::core::notify::Notification;
use gloo::timers::callback::Timeout;
use std::collections::HashMap;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    pub notifications: Vec<Notification>,
    pub on_dismiss: Callback<u64>,
}

/// Fixed top-right alerts, each removed after its own lifetime.
#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    let timers = use_mut_ref(HashMap::<u64, Timeout>::new);
    {
        let on_dismiss = props.on_dismiss.clone();
        let timers = timers.clone();
        use_effect_with_deps(
            move |list: &Vec<Notification>| {
                let mut timers = timers.borrow_mut();
                timers.retain(|id, _| list.iter().any(|item| item.id == *id));
                for item in list {
                    let on_dismiss = on_dismiss.clone();
                    let id = item.id;
                    timers
                        .entry(id)
                        .or_insert_with(|| Timeout::new(item.duration_ms, move || on_dismiss.emit(id)));
                }
                || ()
            },
            props.notifications.clone(),
        );
    }
    {
        let timers = timers.clone();
        use_effect_with_deps(move |_| move || timers.borrow_mut().clear(), ());
    }

    html! {
        <>
            {for props.notifications.iter().map(|item| render_toast(item, props.on_dismiss.clone()))}
        </>
    }
}

fn render_toast(item: &Notification, on_dismiss: Callback<u64>) -> Html {
    let id = item.id;
    let on_close = Callback::from(move |_| on_dismiss.emit(id));

    html! {
        <div
            class={classes!(
                "alert",
                item.severity.alert_class(),
                "alert-dismissible",
                "fade",
                "show",
                "position-fixed"
            )}
            style="top: 20px; right: 20px; z-index: 9999; min-width: 300px;"
            role="alert"
            data-portal-toast="true"
        >
            {item.message.clone()}
            <button type="button" class="btn-close" aria-label="Close" onclick={on_close}></button>
        </div>
    }
}
