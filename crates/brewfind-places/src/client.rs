//! HTTP client for the places-search API.
//!
//! Wraps `reqwest` with API-key handling and typed decoding of the
//! `places/nearby` endpoint. Status and decoding failures are surfaced as
//! [`FetchError`] variants; the caller decides whether to recover.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::FetchError;
use crate::types::PlacesSearchResponse;

const NEARBY_PATH: &str = "places/nearby";

/// Client for the places-search API.
///
/// The base URL comes from [`crate::FetcherConfig`], so tests can point it at
/// a mock server.
pub struct PlacesClient {
    client: Client,
    api_key: Option<String>,
    base_url: Url,
}

impl PlacesClient {
    /// Creates a client rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`FetchError::InvalidBaseUrl`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        api_key: Option<&str>,
        base_url: &str,
        user_agent: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, FetchError> {
        Ok(Self {
            client: build_http_client(user_agent, timeout)?,
            api_key: api_key.map(str::to_owned),
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Searches for venues near `ll` (`"lat,long"`) matching `query`.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Http`] on network failure.
    /// - [`FetchError::UnexpectedStatus`] on any non-2xx status.
    /// - [`FetchError::Deserialize`] if the body is not the expected JSON.
    pub async fn search_nearby(
        &self,
        ll: &str,
        query: &str,
        limit: u32,
    ) -> Result<PlacesSearchResponse, FetchError> {
        let url = self.nearby_url(ll, query, limit)?;

        let mut request = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(key) = &self.api_key {
            request = request.header(reqwest::header::AUTHORIZATION, key);
        }

        let body = send_for_text(request, &url).await?;
        serde_json::from_str(&body).map_err(|e| FetchError::Deserialize {
            context: format!("places/nearby(ll={ll}, limit={limit})"),
            source: e,
        })
    }

    /// Builds the `places/nearby` URL with percent-encoded query parameters.
    fn nearby_url(&self, ll: &str, query: &str, limit: u32) -> Result<Url, FetchError> {
        let mut url = self
            .base_url
            .join(NEARBY_PATH)
            .map_err(|e| FetchError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut()
            .append_pair("ll", ll)
            .append_pair("query", query)
            .append_pair("limit", &limit.to_string());
        Ok(url)
    }
}

/// Builds the shared `reqwest::Client` used by the places and photo clients.
///
/// No overall timeout is applied unless one is given.
pub(crate) fn build_http_client(
    user_agent: &str,
    timeout: Option<Duration>,
) -> Result<Client, FetchError> {
    let mut builder = Client::builder().user_agent(user_agent);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Parses `base_url`, ensuring it ends with exactly one slash so that
/// [`Url::join`] appends to it instead of replacing its last segment.
pub(crate) fn parse_base_url(base_url: &str) -> Result<Url, FetchError> {
    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    Url::parse(&normalised).map_err(|e| FetchError::InvalidBaseUrl {
        url: base_url.to_owned(),
        reason: e.to_string(),
    })
}

/// Sends `request`, asserts a 2xx status, and returns the body text.
pub(crate) async fn send_for_text(
    request: reqwest::RequestBuilder,
    url: &Url,
) -> Result<String, FetchError> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    Ok(response.text().await?)
}
