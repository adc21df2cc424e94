use overpass::client::DEFAULT_OVERPASS_URL;

/// Configuration for the Overpass map-data API.
pub struct OverpassConfig {
    pub api_url: String,
}

impl OverpassConfig {
    /// Environment variables:
    /// - OVERPASS_API_URL: Interpreter endpoint (default: the public overpass-api.de instance)
    pub fn from_env() -> Self {
        let api_url =
            std::env::var("OVERPASS_API_URL").unwrap_or_else(|_| DEFAULT_OVERPASS_URL.to_string());
        Self { api_url }
    }
}
