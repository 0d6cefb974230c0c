use crate::app_config::AppConfig;
use crate::ConfigError;

const DEFAULT_PLACES_BASE_URL: &str = "https://api.foursquare.com/v3/";
const DEFAULT_PHOTOS_BASE_URL: &str = "https://api.unsplash.com/";
const DEFAULT_VOTING_BASE_URL: &str = "http://localhost:3000/api/";
const DEFAULT_USER_AGENT: &str = "brewfind/0.1 (coffee-discovery)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but its value is invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but its value is invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    // Blank secrets count as unset.
    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let parse_optional_u64 = |var: &str| -> Result<Option<u64>, ConfigError> {
        optional(var)
            .map(|raw| {
                raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                })
            })
            .transpose()
    };

    let log_level = or_default("BREWFIND_LOG_LEVEL", "info");

    let places_api_key = optional("FOURSQUARE_API_KEY");
    let photos_api_key = optional("UNSPLASH_ACCESS_KEY");

    let places_base_url = or_default("BREWFIND_PLACES_BASE_URL", DEFAULT_PLACES_BASE_URL);
    let photos_base_url = or_default("BREWFIND_PHOTOS_BASE_URL", DEFAULT_PHOTOS_BASE_URL);
    let voting_base_url = or_default("BREWFIND_VOTING_BASE_URL", DEFAULT_VOTING_BASE_URL);

    let enable_photos = parse_bool(
        "BREWFIND_ENABLE_PHOTOS",
        &or_default("BREWFIND_ENABLE_PHOTOS", "false"),
    )?;
    let request_timeout_secs = parse_optional_u64("BREWFIND_REQUEST_TIMEOUT_SECS")?;
    let user_agent = or_default("BREWFIND_USER_AGENT", DEFAULT_USER_AGENT);

    Ok(AppConfig {
        log_level,
        places_api_key,
        photos_api_key,
        places_base_url,
        photos_base_url,
        voting_base_url,
        enable_photos,
        request_timeout_secs,
        user_agent,
    })
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected a boolean, got \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
