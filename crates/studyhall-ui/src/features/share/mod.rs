//! Material sharing through the user's email client or WhatsApp.
//!
//! # Design
//! - The dialog draft is captured by value when a submission starts.
//! - Every open starts a new session; completions from an older session may
//!   notify but never close or re-enable the newer dialog.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub mod logic;
pub mod state;
