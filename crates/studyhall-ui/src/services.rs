//! HTTP client and browser side-effect helpers.

pub(crate) mod api;
pub(crate) mod browser;
