use crate::config::types::{Config, CrawlerConfig, SiteConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_site_config(&config.site)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.max_depth < 1 {
        return Err(ConfigError::Validation(format!(
            "max_depth must be >= 1, got {}",
            config.max_depth
        )));
    }

    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "request_timeout_secs must be >= 1, got {}",
            config.request_timeout_secs
        )));
    }

    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates the target-site configuration
///
/// The seed must parse as an http(s) URL and its host must appear on the
/// allowed-domain list, otherwise the very first fetch would be refused.
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    if config.allowed_domains.is_empty() {
        return Err(ConfigError::Validation(
            "allowed_domains cannot be empty".to_string(),
        ));
    }

    for domain in &config.allowed_domains {
        validate_domain_string(domain)?;
    }

    let seed = Url::parse(&config.seed_url).map_err(|e| ConfigError::InvalidSeed {
        url: config.seed_url.clone(),
        reason: e.to_string(),
    })?;

    if seed.scheme() != "http" && seed.scheme() != "https" {
        return Err(ConfigError::InvalidSeed {
            url: config.seed_url.clone(),
            reason: format!("unsupported scheme '{}'", seed.scheme()),
        });
    }

    let host = seed.host_str().ok_or_else(|| ConfigError::InvalidSeed {
        url: config.seed_url.clone(),
        reason: "missing host".to_string(),
    })?;

    if !config.allowed_domains.iter().any(|d| d == host) {
        return Err(ConfigError::SeedOffDomain(host.to_string()));
    }

    Ok(())
}

/// Validates a single allowed-domain entry
fn validate_domain_string(domain: &str) -> Result<(), ConfigError> {
    if domain.is_empty() {
        return Err(ConfigError::InvalidDomain(
            "domain cannot be empty".to_string(),
        ));
    }

    if !domain
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return Err(ConfigError::InvalidDomain(format!(
            "domain '{}' contains invalid characters",
            domain
        )));
    }

    if domain.starts_with('.') || domain.ends_with('.') || domain.contains("..") {
        return Err(ConfigError::InvalidDomain(format!(
            "domain '{}' is malformed",
            domain
        )));
    }

    Ok(())
}
