//! Global keyboard shortcuts.

/// Semantic action produced by a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShortcutOutcome {
    /// Focus the search input (Ctrl/Cmd + K).
    FocusSearch,
    /// Close every open dialog (Escape).
    CloseDialogs,
}

/// Modifier state captured from a keyboard event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Control key held.
    pub ctrl: bool,
    /// Meta/Command key held.
    pub meta: bool,
}

/// Map a key press to a shortcut outcome.
#[must_use]
pub fn interpret_shortcut(key: &str, modifiers: Modifiers) -> Option<ShortcutOutcome> {
    match key {
        "k" if modifiers.ctrl || modifiers.meta => Some(ShortcutOutcome::FocusSearch),
        "Escape" => Some(ShortcutOutcome::CloseDialogs),
        _ => None,
    }
}
