//! # Feed Configuration

use std::time::Duration;

/// Request defaults for the remote product listing.
///
/// `page_size` and `category` are request defaults, not per-call knobs: the
/// store always asks the listing for the configured slice of the catalog.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub base_url: String,
    pub page_size: u32,
    pub category: String,
    pub request_timeout: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            page_size: 10,
            category: "electronics".to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl FeedConfig {
    /// Reads overrides from the environment, falling back to the defaults
    /// for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let base_url = std::env::var("FEED_BASE_URL").unwrap_or(defaults.base_url);
        let page_size = std::env::var("FEED_PAGE_SIZE")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(defaults.page_size);
        let category = std::env::var("FEED_CATEGORY").unwrap_or(defaults.category);

        Self {
            base_url,
            page_size,
            category,
            request_timeout: defaults.request_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_listing_contract() {
        let config = FeedConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.category, "electronics");
    }
}
