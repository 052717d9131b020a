//! Document store clients implementing [`ContentStore`].
//!
//! - [`MemoryStore`] keeps documents in process (development and tests).
//! - [`HttpStore`] talks to a remote document database over HTTP.

pub mod config;
pub mod http;
pub mod memory;

use std::sync::Arc;

use commons_core::error::StoreError;
use commons_core::store::ContentStore;

pub use config::StoreConfig;
pub use http::HttpStore;
pub use memory::MemoryStore;

pub type SharedStore = Arc<dyn ContentStore>;

/// Build the store selected by `config`: the HTTP client when a URL is
/// configured, otherwise an empty in-memory store.
pub fn create_store(config: &StoreConfig) -> Result<SharedStore, StoreError> {
    match &config.url {
        Some(url) => {
            let store = HttpStore::new(url, config.api_key.clone(), config.timeout())?;
            tracing::info!(url = %url, "Using remote document store");
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("STORE_URL not set, using in-memory document store");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
