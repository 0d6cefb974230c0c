/// Process-wide settings resolved from the environment.
///
/// Both API keys are optional: a missing key is reported when a fetch fails,
/// not at startup.
#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub places_api_key: Option<String>,
    pub photos_api_key: Option<String>,
    pub places_base_url: String,
    pub photos_base_url: String,
    pub voting_base_url: String,
    pub enable_photos: bool,
    /// Overall per-request timeout. `None` leaves requests unbounded.
    pub request_timeout_secs: Option<u64>,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field(
                "places_api_key",
                &self.places_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "photos_api_key",
                &self.photos_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("places_base_url", &self.places_base_url)
            .field("photos_base_url", &self.photos_base_url)
            .field("voting_base_url", &self.voting_base_url)
            .field("enable_photos", &self.enable_photos)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
