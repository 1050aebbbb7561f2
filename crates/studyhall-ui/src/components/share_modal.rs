use crate::app::actions;
use crate::app::api::ApiCtx;
use crate::components::loading_button::LoadingButton;
use crate::core::store::AppStore;
use crate::features::share::state::ShareChannel;
use yew::prelude::*;
use yewdux::prelude::use_selector;

/// Share dialog offering the email and WhatsApp channels.
#[function_component(ShareModal)]
pub(crate) fn share_modal() -> Html {
    let share = use_selector(|store: &AppStore| store.share.clone());
    let api = use_context::<ApiCtx>();

    let Some(target) = share.target().filter(|_| share.is_open()) else {
        return html! {};
    };

    let submit = |channel: ShareChannel| {
        let api = api.clone();
        Callback::from(move |()| {
            if let Some(api) = &api {
                actions::share(api.client.clone(), channel);
            }
        })
    };
    let on_close = Callback::from(|_: MouseEvent| actions::close_dialogs());

    html! {
        <>
            <div class="modal fade show d-block" id="shareModal" tabindex="-1" role="dialog" aria-modal="true" aria-labelledby="shareModalLabel">
                <div class="modal-dialog modal-dialog-centered">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title" id="shareModalLabel">{"Share Material"}</h5>
                            <button type="button" class="btn-close" aria-label="Close" onclick={on_close.clone()}></button>
                        </div>
                        <div class="modal-body">
                            <p class="fw-semibold mb-1">{target.name.clone()}</p>
                            <p class="small text-muted text-break">{target.link.clone()}</p>
                            <div class="d-grid gap-2">
                                <LoadingButton
                                    state={share.button(ShareChannel::Email).clone()}
                                    icon="bi-envelope"
                                    class="btn-primary"
                                    onclick={submit(ShareChannel::Email)}
                                />
                                <LoadingButton
                                    state={share.button(ShareChannel::Whatsapp).clone()}
                                    icon="bi-whatsapp"
                                    class="btn-success"
                                    onclick={submit(ShareChannel::Whatsapp)}
                                />
                            </div>
                        </div>
                    </div>
                </div>
            </div>
            <div class="modal-backdrop fade show" onclick={on_close}></div>
        </>
    }
}
