//! Normalization from raw places-API venues to [`brewfind_core::ShopRecord`].

use brewfind_core::{ShopRecord, FALLBACK_IMG_URL};

use crate::types::{Venue, VenueLocation};

/// Converts a [`Venue`] into a [`ShopRecord`].
///
/// `photo` is the image found for this venue's position in the result list,
/// if any. Empty strings upstream are treated the same as absent values.
#[must_use]
pub fn normalize_venue(venue: Venue, photo: Option<&str>) -> ShopRecord {
    // A venue without a location is still a shop; its fields become "".
    let location = venue.location.unwrap_or_default();
    let neighbourhood = pick_neighbourhood(&location);
    let address = non_empty(location.address).unwrap_or_default();
    let img_url = photo
        .filter(|url| !url.is_empty())
        .unwrap_or(FALLBACK_IMG_URL)
        .to_owned();

    ShopRecord {
        id: venue.fsq_id,
        address,
        name: venue.name,
        neighbourhood,
        img_url,
    }
}

/// First neighbourhood entry, else the cross street, else `""`.
fn pick_neighbourhood(location: &VenueLocation) -> String {
    location
        .neighborhood
        .as_ref()
        .and_then(|n| n.first())
        .filter(|n| !n.is_empty())
        .or_else(|| location.cross_street.as_ref().filter(|c| !c.is_empty()))
        .cloned()
        .unwrap_or_default()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
