//! Photo lookup for shop cards.
//!
//! The fetcher asks a [`PhotoLookup`] for one image URL per requested shop
//! and assigns them by position. [`NoPhotos`] is the default, so every shop
//! gets [`brewfind_core::FALLBACK_IMG_URL`]. [`UnsplashPhotos`] is opt-in.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::client::{build_http_client, parse_base_url, send_for_text};
use crate::config::FetcherConfig;
use crate::error::FetchError;

const SEARCH_PATH: &str = "search/photos";
const PHOTO_QUERY: &str = "coffee shop";

/// Source of image URLs for shop cards.
#[async_trait]
pub trait PhotoLookup: Send + Sync + std::fmt::Debug {
    /// Returns up to `count` image URLs.
    ///
    /// # Errors
    ///
    /// Any [`FetchError`] from the backing service.
    async fn lookup_photos(&self, count: usize) -> Result<Vec<String>, FetchError>;
}

/// Photo lookup that never returns any photos.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPhotos;

#[async_trait]
impl PhotoLookup for NoPhotos {
    async fn lookup_photos(&self, _count: usize) -> Result<Vec<String>, FetchError> {
        Ok(Vec::new())
    }
}

/// Photo lookup backed by the Unsplash search API.
pub struct UnsplashPhotos {
    client: Client,
    access_key: Option<String>,
    base_url: Url,
}

impl std::fmt::Debug for UnsplashPhotos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnsplashPhotos")
            .field("access_key", &self.access_key.as_ref().map(|_| "[redacted]"))
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl UnsplashPhotos {
    /// Builds a lookup from the fetcher's photo settings.
    ///
    /// # Errors
    ///
    /// See [`UnsplashPhotos::with_base_url`].
    pub fn from_config(config: &FetcherConfig) -> Result<Self, FetchError> {
        Self::with_base_url(
            config.photos_api_key.as_deref(),
            &config.photos_base_url,
            &config.user_agent,
            config.timeout,
        )
    }

    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`FetchError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        access_key: Option<&str>,
        base_url: &str,
        user_agent: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, FetchError> {
        Ok(Self {
            client: build_http_client(user_agent, timeout)?,
            access_key: access_key.map(str::to_owned),
            base_url: parse_base_url(base_url)?,
        })
    }

    fn search_url(&self, count: usize) -> Result<Url, FetchError> {
        let mut url = self
            .base_url
            .join(SEARCH_PATH)
            .map_err(|e| FetchError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut()
            .append_pair("query", PHOTO_QUERY)
            .append_pair("per_page", &count.to_string());
        Ok(url)
    }
}

#[derive(Debug, Deserialize)]
struct PhotoSearchResponse {
    #[serde(default)]
    results: Option<Vec<PhotoResult>>,
}

#[derive(Debug, Deserialize)]
struct PhotoResult {
    urls: PhotoUrls,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    small: String,
}

#[async_trait]
impl PhotoLookup for UnsplashPhotos {
    async fn lookup_photos(&self, count: usize) -> Result<Vec<String>, FetchError> {
        let url = self.search_url(count)?;

        let mut request = self
            .client
            .get(url.clone())
            .header("Accept-Version", "v1");
        if let Some(key) = &self.access_key {
            request = request.header(reqwest::header::AUTHORIZATION, format!("Client-ID {key}"));
        }

        let body = send_for_text(request, &url).await?;
        let parsed: PhotoSearchResponse =
            serde_json::from_str(&body).map_err(|e| FetchError::Deserialize {
                context: format!("search/photos(per_page={count})"),
                source: e,
            })?;

        Ok(parsed
            .results
            .unwrap_or_default()
            .into_iter()
            .map(|r| r.urls.small)
            .collect())
    }
}
