pub(crate) mod catalog;
pub(crate) mod loading_button;
pub(crate) mod search;
pub(crate) mod search_input;
pub(crate) mod share_modal;
pub(crate) mod shell;
pub(crate) mod toast;
pub(crate) mod tooltip;
