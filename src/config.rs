/// Client configuration: API environments, timing and credentials.
use std::fmt;
use std::time::Duration;

/// Identifying `User-Agent` sent with every request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/74.0.3729.169 Safari/537.36";

/// Per-request timeout enforced by the transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(3000);

/// Minimum spacing between the starts of two consecutive requests.
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(3000);

/// Supported NiceHash API environments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Test,
}

/// Configuration holding the API base URL and request timing for a client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base: String,
    pub timeout: Duration,
    pub min_interval: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn from_environment(environment: Environment) -> Self {
        let api_base = match environment {
            Environment::Production => "https://api2.nicehash.com",
            Environment::Test => "https://api-test.nicehash.com",
        };
        Self {
            api_base: api_base.into(),
            timeout: DEFAULT_TIMEOUT,
            min_interval: DEFAULT_MIN_INTERVAL,
            user_agent: DEFAULT_USER_AGENT.into(),
        }
    }

    /// Override the minimum interval between request starts.
    pub fn with_min_interval(mut self, min_interval: Duration) -> Self {
        self.min_interval = min_interval;
        self
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the API base URL (e.g. for a local mock server).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_environment(Environment::Production)
    }
}

/// API key, secret and organization id used to sign requests.
///
/// Immutable once constructed. An empty secret is a caller error and is not
/// checked here.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
    organization_id: String,
}

impl Credentials {
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        organization_id: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            organization_id: organization_id.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }

    pub fn organization_id(&self) -> &str {
        &self.organization_id
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("organization_id", &self.organization_id)
            .finish()
    }
}
