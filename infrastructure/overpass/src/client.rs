use reqwest::Client;

pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";

/// Shared Overpass HTTP client configuration.
pub struct OverpassClient {
    pub client: Client,
    pub base_url: String,
}

impl OverpassClient {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self { client, base_url }
    }

    /// Returns the interpreter endpoint URL.
    pub fn interpreter_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for OverpassClient {
    fn default() -> Self {
        Self::new(DEFAULT_OVERPASS_URL.to_string())
    }
}
