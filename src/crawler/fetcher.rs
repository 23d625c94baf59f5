//! HTTP fetcher implementation
//!
//! All network access goes through [`PageFetcher`], which owns the reqwest
//! client and enforces the two crawl-scope guards: the allowed-domain list
//! and the maximum traversal depth. Fetch failures are classified into
//! [`FetchError`] variants so the coordinator can decide what is fatal.

use crate::config::{CrawlerConfig, SiteConfig};
use crate::{FetchError, FetchResult};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// A successfully fetched page body
#[derive(Debug)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub final_url: Url,

    /// Page body content
    pub body: String,
}

/// Builds an HTTP client with proper configuration
pub fn build_http_client(config: &CrawlerConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches pages within the configured crawl scope
pub struct PageFetcher {
    client: Client,
    allowed_domains: Vec<String>,
    max_depth: u32,
}

impl PageFetcher {
    /// Creates a fetcher for the given site scope
    pub fn new(client: Client, site: &SiteConfig, max_depth: u32) -> Self {
        Self {
            client,
            allowed_domains: site.allowed_domains.clone(),
            max_depth,
        }
    }

    /// Returns whether a URL's host is on the allowed-domain list
    pub fn is_allowed_domain(&self, url: &Url) -> bool {
        match url.host_str() {
            Some(host) => self.allowed_domains.iter().any(|d| d == host),
            None => false,
        }
    }

    /// Fetches a page at the given traversal depth
    ///
    /// # Request Flow
    ///
    /// 1. Refuse URLs beyond the depth bound or off the allowed domains
    /// 2. Log the visit (side channel only, never control flow)
    /// 3. GET the URL, following reqwest's default redirect policy
    /// 4. Re-check the post-redirect URL against the allow-list
    /// 5. Require a 2xx status and an HTML content type
    ///
    /// # Errors
    ///
    /// Every failure maps to a [`FetchError`] variant; none of them are
    /// fatal by themselves. The caller decides whether a failed link is
    /// skippable or aborts the run.
    pub async fn fetch(&self, url: &Url, depth: u32) -> FetchResult<FetchedPage> {
        if depth > self.max_depth {
            return Err(FetchError::DepthExceeded {
                url: url.to_string(),
                depth,
            });
        }

        if !self.is_allowed_domain(url) {
            return Err(FetchError::DomainDisallowed {
                url: url.to_string(),
            });
        }

        tracing::info!("visiting {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| classify_request_error(url, e))?;

        let final_url = response.url().clone();

        if !self.is_allowed_domain(&final_url) {
            return Err(FetchError::DomainDisallowed {
                url: final_url.to_string(),
            });
        }

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: final_url.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        if !content_type.contains("text/html") {
            return Err(FetchError::NotHtml {
                url: final_url.to_string(),
                content_type,
            });
        }

        let body = response.text().await.map_err(|e| FetchError::Http {
            url: final_url.to_string(),
            source: e,
        })?;

        Ok(FetchedPage { final_url, body })
    }
}

/// Classifies a reqwest error into the fetch error taxonomy
fn classify_request_error(url: &Url, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn create_fetcher() -> PageFetcher {
        let config = Config::default();
        let client = build_http_client(&config.crawler).unwrap();
        PageFetcher::new(client, &config.site, config.crawler.max_depth)
    }

    #[test]
    fn test_build_http_client() {
        let config = Config::default();
        assert!(build_http_client(&config.crawler).is_ok());
    }

    #[test]
    fn test_allowed_domain_check() {
        let fetcher = create_fetcher();

        let on = Url::parse("https://divar.ir/v/123").unwrap();
        let www = Url::parse("https://www.divar.ir/v/123").unwrap();
        let off = Url::parse("https://example.com/v/123").unwrap();

        assert!(fetcher.is_allowed_domain(&on));
        assert!(fetcher.is_allowed_domain(&www));
        assert!(!fetcher.is_allowed_domain(&off));
    }

    #[tokio::test]
    async fn test_fetch_rejects_disallowed_domain() {
        let fetcher = create_fetcher();
        let url = Url::parse("https://example.com/v/123").unwrap();

        let result = fetcher.fetch(&url, 0).await;
        assert!(matches!(result, Err(FetchError::DomainDisallowed { .. })));
    }

    #[tokio::test]
    async fn test_fetch_rejects_excess_depth() {
        let fetcher = create_fetcher();
        let url = Url::parse("https://divar.ir/v/123").unwrap();

        let result = fetcher.fetch(&url, 99).await;
        assert!(matches!(
            result,
            Err(FetchError::DepthExceeded { depth: 99, .. })
        ));
    }
}
