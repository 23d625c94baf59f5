//! Field extraction and text normalization for listing pages

mod listing;
mod text;

pub use listing::{extract_listing, is_detail_page, Listing, DETAIL_MARKER};
pub use text::{digits_to_ascii, strip_to_alphanumeric};
