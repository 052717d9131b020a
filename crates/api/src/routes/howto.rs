//! Route definitions for the how-to page.

use axum::routing::get;
use axum::Router;

use crate::handlers::howto;
use crate::state::AppState;

/// How-to page routes.
///
/// ```text
/// GET /how-to           list_howtos
/// GET /how-to/create    create_howto   (redirects to /how-to when signed out)
/// GET /how-to/{slug}    get_howto
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/how-to", get(howto::list_howtos))
        .route("/how-to/create", get(howto::create_howto))
        .route("/how-to/{slug}", get(howto::get_howto))
}
