//! Parsed-document wrapper around scraper
//!
//! Fetched pages are wrapped in a [`Document`] that exposes pull-style
//! selector queries: callers iterate over matches explicitly instead of
//! registering callbacks. Selector misses (and selectors that fail to
//! compile) degrade silently to empty results, which is the extraction
//! contract for the whole crate.

use scraper::{ElementRef, Html, Selector};
use url::Url;

/// A fetched page with its canonical URL
pub struct Document {
    url: Url,
    html: Html,
}

/// Parses an HTML body into a queryable [`Document`]
///
/// `url` should be the final URL the body was served from, after redirects,
/// since it becomes the identity of any listing extracted from the page.
pub fn parse_document(html: &str, url: Url) -> Document {
    Document {
        url,
        html: Html::parse_document(html),
    }
}

impl Document {
    /// The canonical URL this document was fetched from
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Returns all elements matching `selector`, in document order
    pub fn select_all<'a>(&'a self, selector: &str) -> Vec<ElementRef<'a>> {
        match Selector::parse(selector) {
            Ok(sel) => self.html.select(&sel).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Returns whether any element matches `selector`
    pub fn has_match(&self, selector: &str) -> bool {
        !self.select_all(selector).is_empty()
    }

    /// Returns the trimmed text of the first element matching `selector`
    ///
    /// Yields an empty string when nothing matches.
    pub fn first_text(&self, selector: &str) -> String {
        self.select_all(selector)
            .into_iter()
            .next()
            .map(collect_text)
            .unwrap_or_default()
    }

    /// Returns the raw `href` attribute of every anchor on the page
    ///
    /// Values are returned exactly as they appear in the markup; resolving
    /// them against the page URL is the caller's concern.
    pub fn hrefs(&self) -> Vec<String> {
        self.select_all("a[href]")
            .into_iter()
            .filter_map(|element| element.value().attr("href"))
            .map(str::to_string)
            .collect()
    }
}

/// Returns the trimmed text of the first descendant of `element` matching
/// `selector`, or an empty string when there is none
pub fn element_text(element: ElementRef<'_>, selector: &str) -> String {
    match Selector::parse(selector) {
        Ok(sel) => element
            .select(&sel)
            .next()
            .map(collect_text)
            .unwrap_or_default(),
        Err(_) => String::new(),
    }
}

/// Concatenates the text nodes under an element, whitespace-trimmed
fn collect_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(html: &str) -> Document {
        parse_document(html, Url::parse("https://divar.ir/s/tehran/car").unwrap())
    }

    #[test]
    fn test_first_text() {
        let doc = doc(r#"<html><body><h1 class="t">  Hello  </h1></body></html>"#);
        assert_eq!(doc.first_text("h1.t"), "Hello");
    }

    #[test]
    fn test_first_text_missing_selector() {
        let doc = doc(r#"<html><body></body></html>"#);
        assert_eq!(doc.first_text("h1.t"), "");
    }

    #[test]
    fn test_first_text_invalid_selector() {
        let doc = doc(r#"<html><body><p>x</p></body></html>"#);
        assert_eq!(doc.first_text("p:::"), "");
    }

    #[test]
    fn test_first_text_takes_first_match() {
        let doc = doc(r#"<html><body><p>one</p><p>two</p></body></html>"#);
        assert_eq!(doc.first_text("p"), "one");
    }

    #[test]
    fn test_hrefs_in_document_order() {
        let doc = doc(
            r#"<html><body>
            <a href="/v/111">A</a>
            <a href="/other">B</a>
            <a href="/v/222">C</a>
            <a>no href</a>
            </body></html>"#,
        );
        assert_eq!(doc.hrefs(), vec!["/v/111", "/other", "/v/222"]);
    }

    #[test]
    fn test_has_match() {
        let doc = doc(r#"<html><body><div id="app"></div></body></html>"#);
        assert!(doc.has_match("div#app"));
        assert!(!doc.has_match("div#missing"));
    }

    #[test]
    fn test_element_text_scoped() {
        let doc = doc(
            r#"<html><body>
            <div class="row"><span class="v">inside</span></div>
            <span class="v">outside</span>
            </body></html>"#,
        );
        let row = doc.select_all("div.row")[0];
        assert_eq!(element_text(row, "span.v"), "inside");
    }

    #[test]
    fn test_element_text_missing() {
        let doc = doc(r#"<html><body><div class="row"></div></body></html>"#);
        let row = doc.select_all("div.row")[0];
        assert_eq!(element_text(row, "span.v"), "");
    }
}
