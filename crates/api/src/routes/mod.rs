//! Route tables.
//!
//! Page routes live at the root; JSON API routes are nested under `/api/v1`.

pub mod health;
pub mod howto;
pub mod research;

use axum::Router;

use crate::state::AppState;

/// Routes of the how-to page.
pub fn page_routes() -> Router<AppState> {
    howto::router()
}

/// Routes nested under `/api/v1`.
pub fn api_routes() -> Router<AppState> {
    research::router()
}
