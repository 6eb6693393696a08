//! Environment-driven configuration and page locator normalization
//!
//! The credential and the page locator come from the environment; neither is
//! embedded in the source. A missing credential is reported here, before any
//! network call is made. A credential that is present but invalid is not
//! checked client-side - the remote's own error response surfaces as a
//! transport error during publishing.

use crate::error::ConfigError;
use std::fmt;

/// Normalized page identifier accepted by the Notion API.
///
/// Derived from the human-shareable page URL by discarding any trailing
/// query component and stripping `-` separators from the final path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageId(String);

impl PageId {
    /// Normalize a page locator into the identifier form.
    ///
    /// `https://www.notion.so/1fbd-5c54?pvs=4` becomes `1fbd5c54`.
    pub fn from_locator(locator: &str) -> Self {
        let without_query = locator.split('?').next().unwrap_or(locator);
        let last_segment = without_query
            .rsplit('/')
            .next()
            .unwrap_or(without_query);
        PageId(last_segment.replace('-', ""))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The remote document a run writes to: normalized id plus the bearer token.
///
/// Resolved once at startup and held read-only for the whole run.
#[derive(Debug, Clone)]
pub struct Target {
    pub page_id: PageId,
    pub token: String,
}

/// Raw configuration as supplied by the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Notion integration token (`NOTION_API_KEY`)
    pub api_key: String,
    /// Human-shareable URL of the target page (`NOTION_PAGE_URL`)
    pub page_url: String,
}

impl Config {
    /// Read configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("NOTION_API_KEY").unwrap_or_default();
        let page_url = std::env::var("NOTION_PAGE_URL").unwrap_or_default();
        Config::new(api_key, page_url)
    }

    /// Validate explicitly supplied values.
    pub fn new(api_key: impl Into<String>, page_url: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        let page_url = page_url.into();

        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if page_url.trim().is_empty() {
            return Err(ConfigError::MissingPageUrl);
        }

        Ok(Config { api_key, page_url })
    }

    /// Resolve the run target from this configuration.
    pub fn target(&self) -> Target {
        Target {
            page_id: PageId::from_locator(&self.page_url),
            token: self.api_key.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locator_query_suffix_is_discarded() {
        let id = PageId::from_locator("https://www.notion.so/abc123?pvs=4");
        assert_eq!(id.as_str(), "abc123");
    }

    #[test]
    fn test_locator_separators_are_stripped() {
        let id = PageId::from_locator("https://www.notion.so/1fbd-5c54-38fd");
        assert_eq!(id.as_str(), "1fbd5c5438fd");
    }

    #[test]
    fn test_locator_with_query_and_separators() {
        let id =
            PageId::from_locator("https://www.notion.so/1fbd5c5438fd8034928ec1d36495c564?pvs=4");
        assert_eq!(id.as_str(), "1fbd5c5438fd8034928ec1d36495c564");
    }

    #[test]
    fn test_bare_segment_passes_through() {
        let id = PageId::from_locator("abc123");
        assert_eq!(id.as_str(), "abc123");
    }

    #[test]
    fn test_missing_api_key_is_rejected() {
        let err = Config::new("", "https://www.notion.so/abc").unwrap_err();
        assert_eq!(err, ConfigError::MissingApiKey);

        let err = Config::new("   ", "https://www.notion.so/abc").unwrap_err();
        assert_eq!(err, ConfigError::MissingApiKey);
    }

    #[test]
    fn test_missing_page_url_is_rejected() {
        let err = Config::new("secret", "").unwrap_err();
        assert_eq!(err, ConfigError::MissingPageUrl);
    }

    #[test]
    fn test_target_resolution() {
        let config = Config::new("secret", "https://www.notion.so/ab-cd?pvs=4").unwrap();
        let target = config.target();
        assert_eq!(target.page_id.as_str(), "abcd");
        assert_eq!(target.token, "secret");
    }
}
