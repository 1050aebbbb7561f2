//! Material catalog: list/grid layout, category filters and sorting.
//!
//! # Design
//! - Materials come from the JSON block the server renders into the page.
//! - Filters only hide rows; they never re-query the backend.

pub mod state;
