//! HTTP client for the voting/persistence API.
//!
//! Three endpoints, all answering with a JSON array of stored shops:
//! `createCoffeeStore` (upsert), `favouriteCoffeeStoreById` (+1 vote), and
//! `getCoffeeStoreById` (read-back).

use std::time::Duration;

use brewfind_core::{ShopRecord, StoredShop};
use reqwest::{Client, Url};

use crate::error::VotingError;
use crate::types::{CreateCoffeeStoreRequest, FavouriteRequest};

/// Client for the voting API.
pub struct VotingClient {
    client: Client,
    base_url: Url,
}

impl VotingClient {
    /// Creates a client rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`VotingError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`VotingError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        base_url: &str,
        user_agent: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, VotingError> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        // Normalise so join() appends to the base path instead of replacing
        // its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| VotingError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Upserts `record` with an initial vote count of zero.
    ///
    /// Returns the stored rows; a shop that already exists keeps its count.
    ///
    /// # Errors
    ///
    /// - [`VotingError::Http`] on network failure.
    /// - [`VotingError::UnexpectedStatus`] on any non-2xx status.
    /// - [`VotingError::Deserialize`] if the body is not an array of shops.
    pub async fn create_coffee_store(
        &self,
        record: &ShopRecord,
    ) -> Result<Vec<StoredShop>, VotingError> {
        let url = self.endpoint("createCoffeeStore")?;
        let body = CreateCoffeeStoreRequest::from(record);
        let request = self.client.post(url.clone()).json(&body);
        self.send_for_shops(request, &url, "createCoffeeStore").await
    }

    /// Adds one vote to the shop with `id`.
    ///
    /// An empty result means the id is not stored.
    ///
    /// # Errors
    ///
    /// Same as [`VotingClient::create_coffee_store`].
    pub async fn favourite_coffee_store_by_id(
        &self,
        id: &str,
    ) -> Result<Vec<StoredShop>, VotingError> {
        let url = self.endpoint("favouriteCoffeeStoreById")?;
        let request = self.client.put(url.clone()).json(&FavouriteRequest { id });
        self.send_for_shops(request, &url, "favouriteCoffeeStoreById")
            .await
    }

    /// Reads back the stored shop with `id`.
    ///
    /// # Errors
    ///
    /// Same as [`VotingClient::create_coffee_store`].
    pub async fn get_coffee_store_by_id(&self, id: &str) -> Result<Vec<StoredShop>, VotingError> {
        let mut url = self.endpoint("getCoffeeStoreById")?;
        url.query_pairs_mut().append_pair("id", id);
        let request = self.client.get(url.clone());
        self.send_for_shops(request, &url, "getCoffeeStoreById")
            .await
    }

    fn endpoint(&self, name: &str) -> Result<Url, VotingError> {
        self.base_url
            .join(name)
            .map_err(|e| VotingError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }

    async fn send_for_shops(
        &self,
        request: reqwest::RequestBuilder,
        url: &Url,
        context: &str,
    ) -> Result<Vec<StoredShop>, VotingError> {
        let response = request
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(VotingError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let shops: Vec<StoredShop> =
            serde_json::from_str(&body).map_err(|e| VotingError::Deserialize {
                context: context.to_owned(),
                source: e,
            })?;
        tracing::debug!(endpoint = context, rows = shops.len(), "voting API responded");
        Ok(shops)
    }
}
