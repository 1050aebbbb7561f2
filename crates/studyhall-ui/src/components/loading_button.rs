//! Button rendering a [`ButtonLoading`] state.

use crate::core::loading::ButtonLoading;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LoadingButtonProps {
    pub state: ButtonLoading,
    #[prop_or_default]
    pub icon: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<()>,
}

#[function_component(LoadingButton)]
pub(crate) fn loading_button(props: &LoadingButtonProps) -> Html {
    let onclick = {
        let onclick = props.onclick.clone();
        Callback::from(move |_: MouseEvent| onclick.emit(()))
    };
    let content = if props.state.is_loading() {
        html! {
            <>
                <span class="spinner-border spinner-border-sm me-2" role="status" aria-hidden="true"></span>
                {props.state.label().to_string()}
            </>
        }
    } else {
        html! {
            <>
                {for props.icon.iter().map(|icon| html! { <i class={classes!("bi", icon.to_string(), "me-2")}></i> })}
                {props.state.label().to_string()}
            </>
        }
    };

    html! {
        <button
            type="button"
            class={classes!("btn", props.class.clone())}
            disabled={props.state.disabled()}
            aria-busy={props.state.is_loading().to_string()}
            {onclick}
        >
            {content}
        </button>
    }
}
