mod app_config;
mod config;
mod stores;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use stores::{ShopRecord, StoredShop, DEFAULT_LAT_LONG, DEFAULT_LIMIT, FALLBACK_IMG_URL};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
