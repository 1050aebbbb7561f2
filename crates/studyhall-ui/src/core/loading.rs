//! Busy state for action buttons.
//!
//! The original label is captured when the state is created, so controls built
//! after page load get the same restore behaviour as server-rendered ones.

/// Text shown next to the spinner while an action is in flight.
pub const LOADING_LABEL: &str = "Loading...";
/// Label restored when no original label was captured.
pub const FALLBACK_LABEL: &str = "Submit";

/// Loading flag plus the label to restore afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ButtonLoading {
    loading: bool,
    original_label: Option<String>,
}

impl ButtonLoading {
    /// Capture a control's label before first use.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            loading: false,
            original_label: Some(label.into()),
        }
    }

    /// Enter the loading state. A second call while loading changes nothing.
    pub const fn start(&mut self) {
        self.loading = true;
    }

    /// Leave the loading state and re-enable the control.
    pub const fn finish(&mut self) {
        self.loading = false;
    }

    /// Apply `setButtonLoading(button, loading)` semantics in one call.
    pub const fn set(&mut self, loading: bool) {
        if loading {
            self.start();
        } else {
            self.finish();
        }
    }

    /// Whether an action is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the control accepts clicks.
    #[must_use]
    pub const fn disabled(&self) -> bool {
        self.loading
    }

    /// Label to render right now.
    #[must_use]
    pub fn label(&self) -> &str {
        if self.loading {
            LOADING_LABEL
        } else {
            self.original_label.as_deref().unwrap_or(FALLBACK_LABEL)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_then_finish_restores_exact_label() {
        for label in ["Send via Email", "  WhatsApp  ", "<b>Go</b>", ""] {
            let mut state = ButtonLoading::new(label);
            state.set(true);
            assert!(state.disabled());
            assert_eq!(state.label(), LOADING_LABEL);
            state.set(false);
            assert!(!state.disabled());
            assert_eq!(state.label(), label);
        }
    }

    #[test]
    fn missing_label_falls_back_to_submit() {
        let mut state = ButtonLoading::default();
        state.start();
        state.finish();
        assert_eq!(state.label(), FALLBACK_LABEL);
    }

    #[test]
    fn nested_start_keeps_single_loading_state() {
        let mut state = ButtonLoading::new("Download");
        state.start();
        state.start();
        assert!(state.is_loading());
        state.finish();
        assert!(!state.is_loading());
        assert_eq!(state.label(), "Download");
    }
}
