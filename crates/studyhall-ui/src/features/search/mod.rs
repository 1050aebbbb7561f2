//! Live material search.
//!
//! # Design
//! - The search box debounces input; this slice only decides whether to query.
//! - Generations discard responses that arrive after a newer query started.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub mod state;
