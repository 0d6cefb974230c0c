//! The store detail flow: find a shop, register it with the voting API,
//! and read back its vote count.

use brewfind_core::{ShopRecord, StoredShop};
use brewfind_places::CoffeeStoreFetcher;
use brewfind_voting::{VotingClient, VotingError};
use serde::Serialize;

/// A shop as shown on its detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreDetail {
    #[serde(flatten)]
    pub shop: ShopRecord,
    pub votes: i64,
}

impl From<StoredShop> for StoreDetail {
    fn from(stored: StoredShop) -> Self {
        Self {
            shop: stored.record,
            votes: stored.voting,
        }
    }
}

/// Loads the detail view for `id`.
///
/// The shop is looked up in a default-argument fetch and upserted into the
/// voting API. The stored row, when there is one, takes precedence over the
/// fetched record. Voting API failures are logged and degrade to a zero
/// vote count. Returns `None` only when neither source knows the id.
pub async fn load_store_detail(
    fetcher: &CoffeeStoreFetcher,
    voting: &VotingClient,
    id: &str,
) -> Option<StoreDetail> {
    let fetched = fetcher
        .fetch(None, None)
        .await
        .into_iter()
        .find(|shop| shop.id == id);

    if let Some(record) = &fetched {
        if let Err(e) = voting.create_coffee_store(record).await {
            tracing::error!(id, error = %e, "error creating coffee store");
        }
    }

    match voting.get_coffee_store_by_id(id).await {
        Ok(rows) => {
            if let Some(stored) = rows.into_iter().next() {
                return Some(StoreDetail::from(stored));
            }
        }
        Err(e) => tracing::error!(id, error = %e, "error retrieving coffee store"),
    }

    fetched.map(|shop| StoreDetail::from(StoredShop::unvoted(shop)))
}

/// Adds one vote to `id` and returns the new count.
///
/// `None` means the voting API has no shop with that id.
///
/// # Errors
///
/// Propagates any [`VotingError`] from the voting API.
pub async fn upvote(voting: &VotingClient, id: &str) -> Result<Option<i64>, VotingError> {
    let rows = voting.favourite_coffee_store_by_id(id).await?;
    Ok(rows.first().map(|stored| stored.voting))
}

#[cfg(test)]
#[path = "detail_test.rs"]
mod tests;
