//! Divar-Harvest: a focused listing crawler for divar.ir
//!
//! This crate implements a depth-bounded crawler that walks car-listing
//! detail pages on divar.ir, extracts structured fields from each one,
//! normalizes Persian-locale text, and emits the results as a JSON array.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod output;

use thiserror::Error;

/// Main error type for Divar-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Seed fetch failed for {url}: {source}")]
    Seed { url: String, source: FetchError },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid seed URL '{url}': {reason}")]
    InvalidSeed { url: String, reason: String },

    #[error("Invalid allowed domain: {0}")]
    InvalidDomain(String),

    #[error("Seed URL host '{0}' is not on the allowed-domain list")]
    SeedOffDomain(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Errors raised while fetching a single page
///
/// Every variant is recoverable at the link level: the affected URL simply
/// yields no further expansion. The coordinator escalates a fetch error to
/// [`HarvestError::Seed`] only when it occurs on the seed URL itself.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Expected HTML for {url}, got '{content_type}'")]
    NotHtml { url: String, content_type: String },

    #[error("Domain not on allow-list: {url}")]
    DomainDisallowed { url: String },

    #[error("Depth {depth} exceeds crawl bound for {url}")]
    DepthExceeded { url: String, depth: u32 },
}

/// Result type alias for Divar-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for fetch operations
pub type FetchResult<T> = std::result::Result<T, FetchError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl, Coordinator};
pub use extract::{digits_to_ascii, strip_to_alphanumeric, Listing};
