//! Explicit configuration for [`crate::CoffeeStoreFetcher`].

use std::time::Duration;

use brewfind_core::AppConfig;

const DEFAULT_PLACES_BASE_URL: &str = "https://api.foursquare.com/v3/";
const DEFAULT_PHOTOS_BASE_URL: &str = "https://api.unsplash.com/";
const DEFAULT_USER_AGENT: &str = "brewfind/0.1 (coffee-discovery)";

/// Everything the fetcher needs, passed in at construction instead of being
/// read from the process environment.
#[derive(Clone)]
pub struct FetcherConfig {
    pub places_api_key: Option<String>,
    pub photos_api_key: Option<String>,
    pub places_base_url: String,
    pub photos_base_url: String,
    pub user_agent: String,
    /// Overall request timeout. `None` leaves the deadline to the caller.
    pub timeout: Option<Duration>,
}

impl FetcherConfig {
    /// Config pointed at the production APIs with the given places key.
    #[must_use]
    pub fn new(places_api_key: impl Into<String>) -> Self {
        Self {
            places_api_key: Some(places_api_key.into()),
            photos_api_key: None,
            places_base_url: DEFAULT_PLACES_BASE_URL.to_owned(),
            photos_base_url: DEFAULT_PHOTOS_BASE_URL.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout: None,
        }
    }

    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            places_api_key: config.places_api_key.clone(),
            photos_api_key: config.photos_api_key.clone(),
            places_base_url: config.places_base_url.clone(),
            photos_base_url: config.photos_base_url.clone(),
            user_agent: config.user_agent.clone(),
            timeout: config.request_timeout_secs.map(Duration::from_secs),
        }
    }

    /// Whether both API keys are present.
    #[must_use]
    pub fn keys_configured(&self) -> bool {
        self.places_api_key.is_some() && self.photos_api_key.is_some()
    }
}

impl std::fmt::Debug for FetcherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetcherConfig")
            .field(
                "places_api_key",
                &self.places_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "photos_api_key",
                &self.photos_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("places_base_url", &self.places_base_url)
            .field("photos_base_url", &self.photos_base_url)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish()
    }
}
