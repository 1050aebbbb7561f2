//! Core, DOM-free primitives and helpers for the portal UI.
pub mod config;
pub mod format;
pub mod loading;
pub mod notify;
pub mod request;
pub mod shortcuts;
pub mod store;
pub mod theme;
