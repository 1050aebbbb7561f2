//! Share dialog state and submission tokens.

use crate::core::loading::ButtonLoading;
use studyhall_api_models::{MaterialId, SEND_EMAIL_PATH, SEND_WHATSAPP_PATH, ShareRequest};

/// Channel a material is shared through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShareChannel {
    /// The user's email application via `mailto:`.
    Email,
    /// WhatsApp via a `wa.me` intent.
    Whatsapp,
}

impl ShareChannel {
    /// Endpoint preparing the channel URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Email => SEND_EMAIL_PATH,
            Self::Whatsapp => SEND_WHATSAPP_PATH,
        }
    }

    /// Button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Email => "Send via Email",
            Self::Whatsapp => "Send via WhatsApp",
        }
    }
}

/// Material currently loaded into the dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareTarget {
    /// Material identifier.
    pub id: MaterialId,
    /// Display name.
    pub name: String,
    /// Link to the material.
    pub link: String,
}

/// Identity of one in-flight submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitToken {
    session: u64,
    channel: ShareChannel,
}

impl SubmitToken {
    /// Channel the submission went out on.
    #[must_use]
    pub const fn channel(self) -> ShareChannel {
        self.channel
    }
}

/// Values sent for one submission, detached from the dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareSubmission {
    /// Token to hand back on completion.
    pub token: SubmitToken,
    /// Material the request is about.
    pub target: ShareTarget,
    /// Request body.
    pub request: ShareRequest,
}

/// How a completion was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// The dialog this submission came from is still showing.
    Current,
    /// The dialog was reopened or closed since; only notify.
    Stale,
}

/// Share dialog: open flag, draft and per-button loading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareDialogState {
    open: bool,
    session: u64,
    target: Option<ShareTarget>,
    email: ButtonLoading,
    whatsapp: ButtonLoading,
}

impl Default for ShareDialogState {
    fn default() -> Self {
        Self {
            open: false,
            session: 0,
            target: None,
            email: ButtonLoading::new(ShareChannel::Email.label()),
            whatsapp: ButtonLoading::new(ShareChannel::Whatsapp.label()),
        }
    }
}

impl ShareDialogState {
    /// Load a material into the dialog and show it.
    pub fn open(&mut self, target: ShareTarget) {
        self.session += 1;
        self.target = Some(target);
        self.open = true;
        self.email.finish();
        self.whatsapp.finish();
    }

    /// Hide the dialog and drop its draft.
    pub fn close(&mut self) {
        self.session += 1;
        self.target = None;
        self.open = false;
        self.email.finish();
        self.whatsapp.finish();
    }

    /// Whether the dialog is showing.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Current draft.
    #[must_use]
    pub const fn target(&self) -> Option<&ShareTarget> {
        self.target.as_ref()
    }

    /// Loading state of a channel's button.
    #[must_use]
    pub const fn button(&self, channel: ShareChannel) -> &ButtonLoading {
        match channel {
            ShareChannel::Email => &self.email,
            ShareChannel::Whatsapp => &self.whatsapp,
        }
    }

    const fn button_mut(&mut self, channel: ShareChannel) -> &mut ButtonLoading {
        match channel {
            ShareChannel::Email => &mut self.email,
            ShareChannel::Whatsapp => &mut self.whatsapp,
        }
    }

    /// Start a submission on `channel`.
    ///
    /// Returns `None` when the dialog has no draft or that button is already
    /// busy, which keeps one request per control.
    pub fn begin_submit(&mut self, channel: ShareChannel) -> Option<ShareSubmission> {
        if !self.open || self.button(channel).is_loading() {
            return None;
        }
        let target = self.target.clone()?;
        self.button_mut(channel).start();
        Some(ShareSubmission {
            token: SubmitToken {
                session: self.session,
                channel,
            },
            request: ShareRequest {
                material_name: target.name.clone(),
                material_link: target.link.clone(),
            },
            target,
        })
    }

    /// Apply a finished submission.
    ///
    /// A current completion always re-enables its button and closes the dialog
    /// when `close_dialog` is set.
    pub fn complete(&mut self, token: SubmitToken, close_dialog: bool) -> Completion {
        if token.session != self.session {
            return Completion::Stale;
        }
        self.button_mut(token.channel).finish();
        if close_dialog {
            self.close();
        }
        Completion::Current
    }
}
