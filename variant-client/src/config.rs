//! Client configuration

/// Configuration for connecting to the admin API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "http://localhost:8000")
    pub base_url: String,

    /// Bearer token for authenticated deployments
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
        }
    }

    /// Read configuration from the environment.
    ///
    /// `VARIANT_ADMIN_URL` selects the server; `VARIANT_ADMIN_TOKEN` is
    /// optional. Returns `None` when no URL is configured.
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("VARIANT_ADMIN_URL").ok()?;
        let mut config = Self::new(base_url);
        if let Ok(token) = std::env::var("VARIANT_ADMIN_TOKEN") {
            config.token = Some(token);
        }
        Some(config)
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an API client from this configuration
    pub fn build_api(&self) -> super::VariantApi {
        super::VariantApi::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000")
    }
}
