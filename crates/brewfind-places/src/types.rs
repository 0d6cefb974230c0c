//! Places-search API response types for `GET places/nearby`.
//!
//! ### `results`
//! Absent on error payloads (e.g. `{"message": "Invalid request token."}`)
//! and occasionally `null`. Both are treated as "no venues".
//!
//! ### `location.neighborhood`
//! An array of strings when present. Frequently omitted outside large cities.
//!
//! ### `location.cross_street`
//! Free text such as `"btwn 5th & 6th Ave"`. Often omitted.

use serde::Deserialize;

/// Top-level response from `GET places/nearby`.
///
/// Venues are kept as raw JSON so a single malformed entry can be skipped
/// without discarding the rest of the page.
#[derive(Debug, Deserialize)]
pub struct PlacesSearchResponse {
    #[serde(default)]
    pub results: Option<Vec<serde_json::Value>>,
}

/// A single venue as returned by the places API.
#[derive(Debug, Clone, Deserialize)]
pub struct Venue {
    pub fsq_id: String,
    pub name: String,
    #[serde(default)]
    pub location: Option<VenueLocation>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VenueLocation {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub neighborhood: Option<Vec<String>>,
    #[serde(default)]
    pub cross_street: Option<String>,
}
