//! Result records and their rendering.
//!
//! This module handles turning engine results into output:
//! - [`items`] - Result items and facts
//! - [`terminal`] - Terminal output with colors
//! - [`json`] - JSON output

pub mod items;
mod json;
mod terminal;

pub use items::{ordinal, Fact, ResultItem};
pub use json::to_json;
pub use terminal::{format_field, print_items, render_item};
