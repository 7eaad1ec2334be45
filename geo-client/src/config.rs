use std::time::Duration;

/// Default E-utilities base URL used when no override is configured
pub const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Default per-request timeout for E-utilities calls
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for GEO client behavior
///
/// Covers the request timeout, an optional base-URL override (used by tests
/// pointing at a mock server), and the NCBI etiquette parameters (`tool` and
/// `email`) that are appended to every request when set. The configuration is
/// consumed when the client is constructed and never mutated afterwards.
///
/// # Example
///
/// ```
/// use geo_client::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_tool("my-pipeline")
///     .with_email("researcher@university.edu");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Option<String>,
    /// Bounded wait applied to each E-utilities request
    pub timeout: Duration,
    tool: Option<String>,
    email: Option<String>,
}

impl ClientConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            tool: None,
            email: None,
        }
    }

    /// Override the E-utilities base URL
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Override the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the `tool` identification parameter sent with each request
    pub fn with_tool<S: Into<String>>(mut self, tool: S) -> Self {
        self.tool = Some(tool.into());
        self
    }

    /// Set the `email` identification parameter sent with each request
    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into());
        self
    }

    /// The base URL requests are issued against
    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// User agent string derived from the crate version
    pub fn effective_user_agent(&self) -> String {
        format!("geo-client/{}", env!("CARGO_PKG_VERSION"))
    }

    /// Identification parameters to append to request URLs, in a fixed order
    pub fn build_api_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(tool) = &self.tool {
            params.push(("tool".to_string(), tool.clone()));
        }

        if let Some(email) = &self.email {
            params.push(("email".to_string(), email.clone()));
        }

        params
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
