//! Material download feature.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub mod logic;
