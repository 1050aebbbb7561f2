//! Portal feature slices.
//!
//! # Design
//! - Each slice keeps decision logic DOM-free (`logic`/`state`) and confines
//!   HTTP calls to its wasm-only `api` module.
//! - Resolvers return an [`outcome::ActionOutcome`] instead of touching the
//!   page, so the app shell owns every side effect.

pub mod catalog;
pub mod download;
pub mod favorites;
pub mod outcome;
pub mod placeholders;
pub mod search;
pub mod share;
