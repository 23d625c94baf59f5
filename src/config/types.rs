/// Main configuration structure for Divar-Harvest
#[derive(Debug, Clone)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub site: SiteConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    /// Maximum number of link-hops to follow from the seed URL
    pub max_depth: u32,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,

    /// User agent string sent with every request
    pub user_agent: String,
}

/// Target-site configuration
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// The URL the crawl starts from
    pub seed_url: String,

    /// Hosts the fetcher is allowed to request
    pub allowed_domains: Vec<String>,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_depth: 2,
            request_timeout_secs: 30,
            user_agent: format!("divar-harvest/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            seed_url: "https://divar.ir/s/tehran/car".to_string(),
            allowed_domains: vec!["divar.ir".to_string(), "www.divar.ir".to_string()],
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            crawler: CrawlerConfig::default(),
            site: SiteConfig::default(),
        }
    }
}
