//! Crawler module for page fetching and traversal
//!
//! This module contains the crawl engine:
//! - HTTP fetching with domain and depth guards
//! - Pull-style HTML document queries
//! - Link filtering for the detail-page route
//! - Per-run crawl state and the coordinating traversal loop

mod context;
mod coordinator;
mod fetcher;
mod filter;
pub mod parser;

pub use context::CrawlContext;
pub use coordinator::Coordinator;
pub use fetcher::{build_http_client, FetchedPage, PageFetcher};
pub use filter::is_followable;
pub use parser::{parse_document, Document};

use crate::config::Config;
use crate::extract::Listing;
use crate::Result;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It validates the
/// configuration, walks the site from the seed URL, and returns every
/// extracted listing in the order extraction completed.
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(Vec<Listing>)` - The collected listings (possibly empty)
/// * `Err(HarvestError)` - Invalid configuration or seed fetch failure
///
/// # Example
///
/// ```no_run
/// use divar_harvest::config::Config;
/// use divar_harvest::crawler::crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let listings = crawl(Config::default()).await?;
/// println!("collected {} listings", listings.len());
/// # Ok(())
/// # }
/// ```
pub async fn crawl(config: Config) -> Result<Vec<Listing>> {
    Coordinator::new(config)?.run().await
}
