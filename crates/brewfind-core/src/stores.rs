//! Canonical coffee-shop records shared by the fetcher, the voting client,
//! and the CLI.

use serde::{Deserialize, Serialize};

/// Image shown for any shop without a photo of its own.
pub const FALLBACK_IMG_URL: &str = "https://images.unsplash.com/photo-1504753793650-d4a2b783c15e?ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&ixlib=rb-1.2.1&auto=format&fit=crop&w=2000&q=80";

/// Coordinates searched when the caller gives none (central Bengaluru).
pub const DEFAULT_LAT_LONG: &str = "12.972442,77.580643";

/// Number of shops requested when the caller gives no limit.
pub const DEFAULT_LIMIT: u32 = 8;

/// A normalized coffee shop.
///
/// Every field is always a defined string. Data missing upstream is stored
/// as `""` (or [`FALLBACK_IMG_URL`] for `img_url`), never omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopRecord {
    pub id: String,
    #[serde(default)]
    pub address: String,
    pub name: String,
    #[serde(default)]
    pub neighbourhood: String,
    #[serde(default)]
    pub img_url: String,
}

impl ShopRecord {
    /// The image to display: the record's own URL, or the fallback when empty.
    #[must_use]
    pub fn display_img_url(&self) -> &str {
        if self.img_url.is_empty() {
            FALLBACK_IMG_URL
        } else {
            &self.img_url
        }
    }
}

/// A shop as persisted by the voting API, with its current upvote count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredShop {
    #[serde(flatten)]
    pub record: ShopRecord,
    #[serde(default)]
    pub voting: i64,
}

impl StoredShop {
    /// Wraps a freshly fetched record with a zero vote count.
    #[must_use]
    pub fn unvoted(record: ShopRecord) -> Self {
        Self { record, voting: 0 }
    }
}
