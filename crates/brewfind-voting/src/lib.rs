pub mod client;
pub mod error;
pub mod types;

pub use client::VotingClient;
pub use error::VotingError;
