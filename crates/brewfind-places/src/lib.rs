pub mod client;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod normalize;
pub mod photos;
pub mod types;

pub use client::PlacesClient;
pub use config::FetcherConfig;
pub use error::FetchError;
pub use fetcher::CoffeeStoreFetcher;
pub use normalize::normalize_venue;
pub use photos::{NoPhotos, PhotoLookup, UnsplashPhotos};
pub use types::{PlacesSearchResponse, Venue, VenueLocation};
