//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the traversal loop that drives a crawl run:
//! - Seeding and consuming the pending-link queue
//! - Dispatching fetches and routing detail pages to the extractor
//! - Deduplicating visits through the crawl context
//! - Producing the final listing collection
//!
//! Traversal is an explicit FIFO queue rather than fetch-time recursion:
//! links are only enqueued after passing the follow filter, the domain
//! allow-list, the depth bound, and the visited-set check.

use crate::config::{self, Config};
use crate::crawler::context::CrawlContext;
use crate::crawler::fetcher::{build_http_client, PageFetcher};
use crate::crawler::filter::is_followable;
use crate::crawler::parser::{parse_document, Document};
use crate::extract::{extract_listing, is_detail_page, Listing};
use crate::{HarvestError, Result};
use std::collections::VecDeque;
use std::sync::Mutex;
use url::Url;

/// A link waiting to be fetched
#[derive(Debug, Clone)]
struct QueuedLink {
    url: Url,
    depth: u32,
}

/// Main crawler coordinator structure
///
/// A coordinator is built for exactly one run: [`Coordinator::run`] consumes
/// it, so a finished crawl cannot be restarted or mutated afterwards.
pub struct Coordinator {
    config: Config,
    fetcher: PageFetcher,
    context: Mutex<CrawlContext>,
    seed: Url,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// Validates the configuration and builds the HTTP client. No network
    /// traffic happens until [`Coordinator::run`] is called.
    pub fn new(config: Config) -> Result<Self> {
        config::validate(&config)?;

        let seed = Url::parse(&config.site.seed_url)?;
        let client = build_http_client(&config.crawler)?;
        let fetcher = PageFetcher::new(client, &config.site, config.crawler.max_depth);
        let context = Mutex::new(CrawlContext::new(&seed));

        Ok(Self {
            config,
            fetcher,
            context,
            seed,
        })
    }

    /// Runs the crawl to completion and returns the collected listings
    ///
    /// The seed is fetched first; if that fetch fails the run aborts with
    /// [`HarvestError::Seed`] and produces no output. Any later fetch error
    /// is logged and the affected link is skipped. The run finishes when the
    /// pending queue drains.
    pub async fn run(self) -> Result<Vec<Listing>> {
        tracing::info!("Starting crawl from {}", self.seed);

        let mut pending: VecDeque<QueuedLink> = VecDeque::new();
        self.context.lock().unwrap().mark_visited(self.seed.as_str());
        pending.push_back(QueuedLink {
            url: self.seed.clone(),
            depth: 0,
        });

        let mut pages_fetched = 0u64;
        let start_time = std::time::Instant::now();

        while let Some(link) = pending.pop_front() {
            let page = match self.fetcher.fetch(&link.url, link.depth).await {
                Ok(page) => page,
                Err(source) if link.depth == 0 => {
                    return Err(HarvestError::Seed {
                        url: link.url.to_string(),
                        source,
                    });
                }
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", link.url, e);
                    continue;
                }
            };

            let document = parse_document(&page.body, page.final_url);
            self.process_document(&document, link.depth, &mut pending);

            pages_fetched += 1;
            if pages_fetched % 10 == 0 {
                let rate = pages_fetched as f64 / start_time.elapsed().as_secs_f64();
                tracing::info!(
                    "Progress: {} pages fetched, {} pending, {} listings, {:.2} pages/sec",
                    pages_fetched,
                    pending.len(),
                    self.context.lock().unwrap().listing_count(),
                    rate
                );
            }
        }

        let context = self.context.into_inner().unwrap();
        tracing::info!(
            "Crawl completed: {} pages fetched, {} listings in {:?}",
            pages_fetched,
            context.listing_count(),
            start_time.elapsed()
        );

        Ok(context.into_listings())
    }

    /// Discovers links on a fetched page and extracts its listing if any
    ///
    /// Link discovery runs over anchors in document order. A link is queued
    /// only when it passes the follow filter, resolves against the page URL,
    /// stays on an allowed domain, stays within the depth bound, and has not
    /// been dispatched before.
    fn process_document(
        &self,
        document: &Document,
        depth: u32,
        pending: &mut VecDeque<QueuedLink>,
    ) {
        for href in document.hrefs() {
            if !is_followable(&href) {
                continue;
            }

            let resolved = match document.url().join(&href) {
                Ok(url) => url,
                Err(e) => {
                    tracing::debug!("Failed to resolve href '{}': {}", href, e);
                    continue;
                }
            };

            if !self.fetcher.is_allowed_domain(&resolved) {
                tracing::debug!("Off-domain link not queued: {}", resolved);
                continue;
            }

            let next_depth = depth + 1;
            if next_depth > self.config.crawler.max_depth {
                tracing::debug!("Depth bound reached, not queueing {}", resolved);
                continue;
            }

            if self.context.lock().unwrap().mark_visited(resolved.as_str()) {
                pending.push_back(QueuedLink {
                    url: resolved,
                    depth: next_depth,
                });
            }
        }

        if is_detail_page(document) {
            let listing = extract_listing(document);
            tracing::info!("Listing found: {}", listing.url);
            self.context.lock().unwrap().record(listing);
        }
    }
}
