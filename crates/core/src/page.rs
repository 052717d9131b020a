//! The how-to page: one successful list fetch, then three child routes.
//!
//! ```text
//! /how-to          list of how-tos fetched at mount
//! /how-to/create   blank tutorial, authenticated users only
//! /how-to/:slug    a single how-to, fetched by slug
//! ```

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{watch, OnceCell};

use crate::error::StoreError;
use crate::models::Tutorial;
use crate::store::ContentStore;
use crate::templates::tutorial_template;

pub const HOWTO_BASE_PATH: &str = "/how-to";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HowtoRoute {
    List,
    Create,
    Detail(String),
}

/// Match a path against the page's routes, first match wins.
pub fn resolve_route(path: &str) -> Option<HowtoRoute> {
    let path = path.trim_end_matches('/');
    if path == HOWTO_BASE_PATH {
        return Some(HowtoRoute::List);
    }

    let rest = path.strip_prefix(HOWTO_BASE_PATH)?.strip_prefix('/')?;
    let segment = rest.split('/').next().unwrap_or_default();
    match segment {
        "" => None,
        "create" => Some(HowtoRoute::Create),
        slug => Some(HowtoRoute::Detail(slug.to_string())),
    }
}

/// List state published to subscribers after the mount fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HowtoListState {
    pub howtos: Vec<Tutorial>,
    pub loaded: bool,
    pub error: Option<String>,
}

/// What the page renders for a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum HowtoView {
    /// `loaded` is false while the list could not be fetched; `error` then
    /// holds the last failure.
    List {
        howtos: Vec<Tutorial>,
        loaded: bool,
        error: Option<String>,
    },
    Create { template: Tutorial },
    Detail { howto: Tutorial },
    NotFound { slug: String },
    Redirect { to: String },
}

pub struct HowtoPage {
    store: Arc<dyn ContentStore>,
    mounted: OnceCell<()>,
    state: watch::Sender<HowtoListState>,
}

impl HowtoPage {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        let (state, _) = watch::channel(HowtoListState::default());
        Self {
            store,
            mounted: OnceCell::new(),
            state,
        }
    }

    /// Fetch the how-to list. Once a fetch has succeeded later calls return
    /// immediately; concurrent callers wait for the same fetch. After a
    /// failed fetch the next call tries again.
    pub async fn mount(&self) {
        let _ = self.mounted.get_or_try_init(|| self.fetch_list()).await;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.initialized()
    }

    pub fn subscribe(&self) -> watch::Receiver<HowtoListState> {
        self.state.subscribe()
    }

    pub fn list_state(&self) -> HowtoListState {
        self.state.borrow().clone()
    }

    /// Render `route`. The create route requires an authenticated user and
    /// redirects to the list otherwise.
    pub async fn view(
        &self,
        route: HowtoRoute,
        authenticated: bool,
    ) -> Result<HowtoView, StoreError> {
        self.mount().await;

        match route {
            HowtoRoute::List => {
                let state = self.list_state();
                Ok(HowtoView::List {
                    howtos: state.howtos,
                    loaded: state.loaded,
                    error: state.error,
                })
            }
            HowtoRoute::Create if authenticated => Ok(HowtoView::Create {
                template: tutorial_template(),
            }),
            HowtoRoute::Create => Ok(HowtoView::Redirect {
                to: HOWTO_BASE_PATH.to_string(),
            }),
            HowtoRoute::Detail(slug) => match self.store.get_howto_by_slug(&slug).await? {
                Some(howto) => Ok(HowtoView::Detail { howto }),
                None => Ok(HowtoView::NotFound { slug }),
            },
        }
    }

    async fn fetch_list(&self) -> Result<(), StoreError> {
        match self.store.list_howtos().await {
            Ok(howtos) => {
                tracing::info!(count = howtos.len(), "How-to list loaded");
                self.state.send_replace(HowtoListState {
                    howtos,
                    loaded: true,
                    error: None,
                });
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "How-to list fetch failed");
                self.state.send_replace(HowtoListState {
                    howtos: Vec::new(),
                    loaded: false,
                    error: Some(err.to_string()),
                });
                Err(err)
            }
        }
    }
}
