use crate::config::CrawlerConfig;
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &CrawlerConfig) -> Result<(), ConfigError> {
    // max_depth >= 0 is always true for u32, so no check needed

    if config.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max_pages must be at least 1, got {}",
            config.max_pages
        )));
    }

    if config.timeout.is_zero() {
        return Err(ConfigError::Validation(
            "timeout must be positive".to_string(),
        ));
    }

    // rate_limit_delay is a Duration and cannot be negative

    validate_base_url(&config.base_url)?;

    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates the seed URL: must parse and use an HTTP(S) scheme with a host
fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "base_url must start with http:// or https://, got '{}'",
            base_url
        )));
    }

    let url = Url::parse(base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("'{}': {}", base_url, e)))?;

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "'{}' has no host",
            base_url
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_default_config_is_valid() {
        let config = CrawlerConfig::new("https://docs.example.com/");
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_http_seed_is_valid() {
        let config = CrawlerConfig::new("http://docs.example.com/guide");
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_rejects_zero_max_pages() {
        let mut config = CrawlerConfig::new("https://docs.example.com/");
        config.max_pages = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let mut config = CrawlerConfig::new("https://docs.example.com/");
        config.timeout = Duration::ZERO;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_rejects_bad_scheme() {
        assert!(validate(&CrawlerConfig::new("ftp://example.com/")).is_err());
        assert!(validate(&CrawlerConfig::new("docs.example.com")).is_err());
        assert!(validate(&CrawlerConfig::new("")).is_err());
    }

    #[test]
    fn test_rejects_malformed_url() {
        assert!(validate(&CrawlerConfig::new("https://")).is_err());
    }

    #[test]
    fn test_rejects_empty_user_agent() {
        let mut config = CrawlerConfig::new("https://docs.example.com/");
        config.user_agent = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_depth_is_valid() {
        let mut config = CrawlerConfig::new("https://docs.example.com/");
        config.max_depth = 0;
        assert!(validate(&config).is_ok());
    }
}
