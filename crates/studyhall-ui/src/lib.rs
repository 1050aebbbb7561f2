#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Studyhall portal web UI.
//!
//! DOM-free helpers live in [`core`] and the `logic`/`state` halves of
//! [`features`] so they can be tested natively; components, services and the
//! page bindings only build for `wasm32`.

pub mod core;
pub mod features;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod services;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
