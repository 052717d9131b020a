use std::time::Duration;

/// Document store settings loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Base URL of the remote document API. `None` selects the in-memory store.
    pub url: Option<String>,
    /// Bearer token sent with every request, if set.
    pub api_key: Option<String>,
    /// Per-request timeout in seconds (default: `10`).
    pub timeout_secs: u64,
}

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var              | Default |
    /// |----------------------|---------|
    /// | `STORE_URL`          | unset   |
    /// | `STORE_API_KEY`      | unset   |
    /// | `STORE_TIMEOUT_SECS` | `10`    |
    pub fn from_env() -> Self {
        let url = std::env::var("STORE_URL").ok().filter(|s| !s.trim().is_empty());
        let api_key = std::env::var("STORE_API_KEY")
            .ok()
            .filter(|s| !s.is_empty());

        let timeout_secs: u64 = std::env::var("STORE_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("STORE_TIMEOUT_SECS must be a valid u64");

        Self {
            url,
            api_key,
            timeout_secs,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}
