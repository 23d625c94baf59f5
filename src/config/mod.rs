//! Configuration module for Divar-Harvest
//!
//! Defaults are compiled in (there is no configuration file); the CLI can
//! override the seed URL and the depth bound for a single run.

mod types;
mod validation;

pub use types::{Config, CrawlerConfig, SiteConfig};
pub use validation::validate;
