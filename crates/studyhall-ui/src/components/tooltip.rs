use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum TooltipPlacement {
    #[default]
    Top,
    Bottom,
    Left,
}

impl TooltipPlacement {
    #[must_use]
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct TooltipProps {
    pub tip: AttrValue,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub placement: TooltipPlacement,
    #[prop_or_default]
    pub class: Classes,
}

/// Native `title` tooltip carrying Bootstrap's trigger markup.
#[function_component(Tooltip)]
pub(crate) fn tooltip(props: &TooltipProps) -> Html {
    html! {
        <span
            class={classes!("d-inline-block", props.class.clone())}
            data-bs-toggle="tooltip"
            data-bs-placement={props.placement.as_str()}
            title={props.tip.clone()}
        >
            { for props.children.iter() }
        </span>
    }
}
