//! Shared per-run crawl state
//!
//! One [`CrawlContext`] exists per crawl run, owned by the coordinator and
//! mutated through a single guarded accessor. It replaces what would
//! otherwise be ambient state: the set of URLs already dispatched and the
//! listings accumulated so far.

use crate::extract::Listing;
use std::collections::HashSet;
use url::Url;

/// Mutable state scoped to a single crawl run
pub struct CrawlContext {
    seed_url: String,
    visited: HashSet<String>,
    listings: Vec<Listing>,
}

impl CrawlContext {
    /// Creates an empty context for a run starting at `seed`
    pub fn new(seed: &Url) -> Self {
        Self {
            seed_url: seed.to_string(),
            visited: HashSet::new(),
            listings: Vec::new(),
        }
    }

    /// Marks a URL as dispatched
    ///
    /// Returns `true` when the URL was not seen before. The visited set only
    /// grows; repeated links are reported as already seen and must not be
    /// re-dispatched.
    pub fn mark_visited(&mut self, url: &str) -> bool {
        self.visited.insert(url.to_string())
    }

    /// Appends a listing to the result collection
    ///
    /// A listing whose URL equals the seed is dropped: the seed page is a
    /// search page, not a listing, even when it structurally matches the
    /// detail shape.
    pub fn record(&mut self, listing: Listing) {
        if listing.url == self.seed_url {
            tracing::debug!("skipping listing extracted from seed page");
            return;
        }
        self.listings.push(listing);
    }

    /// Number of URLs dispatched so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Number of listings collected so far
    pub fn listing_count(&self) -> usize {
        self.listings.len()
    }

    /// Consumes the context, yielding the collected listings in insertion order
    pub fn into_listings(self) -> Vec<Listing> {
        self.listings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(url: &str) -> Listing {
        Listing {
            title: "Pride 131".to_string(),
            url: url.to_string(),
            year: "1395".to_string(),
            consumption: "120000".to_string(),
            description: String::new(),
            price: "123456".to_string(),
        }
    }

    fn seed() -> Url {
        Url::parse("https://divar.ir/s/tehran/car").unwrap()
    }

    #[test]
    fn test_mark_visited_dedupes() {
        let mut ctx = CrawlContext::new(&seed());

        assert!(ctx.mark_visited("https://divar.ir/v/111"));
        assert!(!ctx.mark_visited("https://divar.ir/v/111"));
        assert!(ctx.mark_visited("https://divar.ir/v/222"));
        assert_eq!(ctx.visited_count(), 2);
    }

    #[test]
    fn test_record_accumulates_in_order() {
        let mut ctx = CrawlContext::new(&seed());

        ctx.record(listing("https://divar.ir/v/111"));
        ctx.record(listing("https://divar.ir/v/222"));

        let listings = ctx.into_listings();
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].url, "https://divar.ir/v/111");
        assert_eq!(listings[1].url, "https://divar.ir/v/222");
    }

    #[test]
    fn test_record_drops_seed_listing() {
        let mut ctx = CrawlContext::new(&seed());

        ctx.record(listing("https://divar.ir/s/tehran/car"));
        assert_eq!(ctx.listing_count(), 0);

        ctx.record(listing("https://divar.ir/v/111"));
        assert_eq!(ctx.listing_count(), 1);
    }
}
