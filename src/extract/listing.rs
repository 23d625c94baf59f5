//! Listing extraction from detail pages
//!
//! Every selector here is tied to the current divar.ir page layout. The
//! positional price path and the nth-child coupling between consumption and
//! year are brittle on purpose: when the site reorders these blocks the
//! fields go empty rather than silently picking up the wrong value, and a
//! missing selector is never an error.

use crate::crawler::parser::{element_text, Document};
use crate::extract::text::{digits_to_ascii, strip_to_alphanumeric};
use serde::Serialize;

/// Structural marker identifying a page as a listing detail page
pub const DETAIL_MARKER: &str = "div#app";

const TITLE_SELECTOR: &str = ".kt-page-title__title.kt-page-title__title--responsive-sized";
const GROUP_ROW_SELECTOR: &str = "div.kt-group-row";
const CONSUMPTION_SELECTOR: &str = "div.kt-group-row-item:nth-child(1) > span.kt-group-row-item__value";
const YEAR_SELECTOR: &str = "div.kt-group-row-item:nth-child(2) > span.kt-group-row-item__value";
const PRICE_SELECTOR: &str = "div.kt-container > div > div.kt-col-5 > div:nth-child(6) > div:nth-child(15) > div.kt-base-row__end.kt-unexpandable-row__value-box > p";
const DESCRIPTION_SELECTOR: &str = ".kt-description-row__text";

/// Currency label removed from the price value before normalization
const CURRENCY_LABEL: &str = "تومان";

/// One extracted car listing
///
/// All fields are normalized strings; absent page data is represented by an
/// empty string, never by null. Field declaration order fixes the JSON key
/// order of the export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub title: String,
    pub url: String,
    pub year: String,
    pub consumption: String,
    pub description: String,
    pub price: String,
}

/// Returns whether a document has the detail-page shape
pub fn is_detail_page(doc: &Document) -> bool {
    doc.has_match(DETAIL_MARKER)
}

/// Extracts a [`Listing`] from a detail-page document
///
/// The document URL becomes the listing identity. Year and consumption are
/// read positionally from each attribute row in turn, later rows overwriting
/// earlier ones; the price has its currency label removed before
/// normalization; the description keeps its full text with only digit
/// transliteration applied.
pub fn extract_listing(doc: &Document) -> Listing {
    let mut listing = Listing {
        title: doc.first_text(TITLE_SELECTOR),
        url: doc.url().to_string(),
        year: String::new(),
        consumption: String::new(),
        description: String::new(),
        price: String::new(),
    };

    for row in doc.select_all(GROUP_ROW_SELECTOR) {
        listing.consumption = normalize_token(&element_text(row, CONSUMPTION_SELECTOR));
        listing.year = normalize_token(&element_text(row, YEAR_SELECTOR));
    }

    let price = doc.first_text(PRICE_SELECTOR).replace(CURRENCY_LABEL, "");
    listing.price = normalize_token(&price);

    listing.description = digits_to_ascii(&doc.first_text(DESCRIPTION_SELECTOR));

    listing
}

/// Reduces a field value to a bare ASCII alphanumeric token
fn normalize_token(value: &str) -> String {
    strip_to_alphanumeric(&digits_to_ascii(value))
}
