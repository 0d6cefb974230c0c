//! The coffee-store fetcher: one places-API query, one normalization pass.
//!
//! [`CoffeeStoreFetcher::fetch`] never fails. Every [`FetchError`] is logged
//! and turned into an empty list, so callers cannot tell "no shops nearby"
//! apart from "the lookup failed".

use std::sync::Arc;

use brewfind_core::{ShopRecord, DEFAULT_LAT_LONG, DEFAULT_LIMIT};

use crate::client::PlacesClient;
use crate::config::FetcherConfig;
use crate::error::FetchError;
use crate::normalize::normalize_venue;
use crate::photos::{NoPhotos, PhotoLookup};
use crate::types::Venue;

/// Search term sent with every places query.
pub const SEARCH_TERM: &str = "coffee stores";

pub struct CoffeeStoreFetcher {
    places: PlacesClient,
    photos: Arc<dyn PhotoLookup>,
    keys_configured: bool,
}

impl CoffeeStoreFetcher {
    /// Builds a fetcher with photo lookup disabled.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the HTTP client cannot be built, or
    /// [`FetchError::InvalidBaseUrl`] if the places base URL does not parse.
    pub fn new(config: &FetcherConfig) -> Result<Self, FetchError> {
        let places = PlacesClient::with_base_url(
            config.places_api_key.as_deref(),
            &config.places_base_url,
            &config.user_agent,
            config.timeout,
        )?;
        Ok(Self {
            places,
            photos: Arc::new(NoPhotos),
            keys_configured: config.keys_configured(),
        })
    }

    /// Replaces the photo lookup.
    #[must_use]
    pub fn with_photos(mut self, photos: Arc<dyn PhotoLookup>) -> Self {
        self.photos = photos;
        self
    }

    /// Fetches up to `limit` coffee shops near `location` (`"lat,long"`).
    ///
    /// Falls back to [`DEFAULT_LAT_LONG`] and [`DEFAULT_LIMIT`]. Returns an
    /// empty list on any failure.
    pub async fn fetch(&self, location: Option<&str>, limit: Option<u32>) -> Vec<ShopRecord> {
        let location = location.unwrap_or(DEFAULT_LAT_LONG);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);

        match self.try_fetch(location, limit).await {
            Ok(records) => {
                tracing::debug!(location, limit, count = records.len(), "fetched coffee stores");
                records
            }
            Err(e) => {
                if !self.keys_configured {
                    tracing::error!(
                        "setup API keys: FOURSQUARE_API_KEY and UNSPLASH_ACCESS_KEY must both be set"
                    );
                }
                tracing::warn!(location, limit, error = %e, "something went wrong fetching coffee stores");
                Vec::new()
            }
        }
    }

    async fn try_fetch(&self, location: &str, limit: u32) -> Result<Vec<ShopRecord>, FetchError> {
        let photos = self
            .photos
            .lookup_photos(usize::try_from(limit).unwrap_or(usize::MAX))
            .await?;
        let response = self.places.search_nearby(location, SEARCH_TERM, limit).await?;

        let Some(results) = response.results else {
            return Ok(Vec::new());
        };

        let records = results
            .into_iter()
            .enumerate()
            .filter_map(|(idx, raw)| match serde_json::from_value::<Venue>(raw) {
                Ok(venue) => Some(normalize_venue(venue, photos.get(idx).map(String::as_str))),
                Err(e) => {
                    tracing::warn!(index = idx, error = %e, "skipping malformed venue");
                    None
                }
            })
            .collect();

        Ok(records)
    }
}
