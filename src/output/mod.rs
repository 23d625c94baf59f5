//! Output module for Divar-Harvest
//!
//! A single sink: the collected listings rendered as one JSON document.

mod json;

pub use json::{to_json, write_json};
