//! Request bodies sent to the voting API.
//!
//! Every endpoint answers with a JSON array of
//! [`brewfind_core::StoredShop`]; an empty array means the id is unknown.

use brewfind_core::ShopRecord;
use serde::Serialize;

/// Body of `POST createCoffeeStore`. New shops always start at zero votes.
#[derive(Debug, Serialize)]
pub struct CreateCoffeeStoreRequest<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub voting: i64,
    #[serde(rename = "imgUrl")]
    pub img_url: &'a str,
    pub neighbourhood: &'a str,
    pub address: &'a str,
}

impl<'a> From<&'a ShopRecord> for CreateCoffeeStoreRequest<'a> {
    fn from(record: &'a ShopRecord) -> Self {
        Self {
            id: &record.id,
            name: &record.name,
            voting: 0,
            img_url: &record.img_url,
            neighbourhood: &record.neighbourhood,
            address: &record.address,
        }
    }
}

/// Body of `PUT favouriteCoffeeStoreById`.
#[derive(Debug, Serialize)]
pub struct FavouriteRequest<'a> {
    pub id: &'a str,
}
