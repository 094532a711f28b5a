use std::env;

/// Environment variable consulted by [`ValyuConfig::from_env`] for the API key.
pub const API_KEY_ENV: &str = "VALYU_API_KEY";

/// Configuration for the Valyu API tools.
///
/// Resolution order per setting: caller override (constructor and `with_*`
/// builders), then the environment ([`from_env`](ValyuConfig::from_env)),
/// then the hardcoded defaults. Values are not range-checked; out-of-range
/// numbers are forwarded to the API as given.
#[derive(Debug, Clone)]
pub struct ValyuConfig {
    /// API key sent in the `x-api-key` header. Empty means unconfigured.
    pub api_key: String,
    /// Base URL of the Valyu API.
    pub base_url: String,
    /// Result cap for search requests when the caller gives none.
    pub max_results: u32,
    /// Minimum relevance score (0.0-1.0). Carried for the host's benefit;
    /// not sent upstream.
    pub relevance_threshold: f64,
    /// Trade result completeness for lower latency.
    pub fast_mode: bool,
    /// How much content the API returns per result:
    /// "short" | "medium" | "large" | "max".
    pub response_length: String,
}

impl Default for ValyuConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.valyu.network".to_string(),
            max_results: 10,
            relevance_threshold: 0.5,
            fast_mode: false,
            response_length: "medium".to_string(),
        }
    }
}

impl ValyuConfig {
    /// Create a configuration with the given API key and default settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Create a configuration from the environment.
    ///
    /// Reads the API key from `VALYU_API_KEY` when set; every other setting
    /// starts at its default and can be overridden with the builder methods.
    pub fn from_env() -> Self {
        match env::var(API_KEY_ENV) {
            Ok(key) => Self::new(key),
            Err(_) => Self::default(),
        }
    }

    /// Override the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the default search result cap.
    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    /// Override the relevance threshold.
    pub fn with_relevance_threshold(mut self, relevance_threshold: f64) -> Self {
        self.relevance_threshold = relevance_threshold;
        self
    }

    /// Enable or disable fast mode.
    pub fn with_fast_mode(mut self, fast_mode: bool) -> Self {
        self.fast_mode = fast_mode;
        self
    }

    /// Override the per-result content length.
    pub fn with_response_length(mut self, response_length: impl Into<String>) -> Self {
        self.response_length = response_length.into();
        self
    }
}
