use std::sync::Arc;

use commons_core::page::HowtoPage;
use commons_db::SharedStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Document store client.
    pub store: SharedStore,
    /// The how-to page; fetches its list once, on first mount.
    pub howto_page: Arc<HowtoPage>,
    /// Server configuration (JWT settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: SharedStore, config: ServerConfig) -> Self {
        Self {
            howto_page: Arc::new(HowtoPage::new(Arc::clone(&store))),
            store,
            config: Arc::new(config),
        }
    }
}
