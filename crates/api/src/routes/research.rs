//! Route definitions for research posts.

use axum::routing::get;
use axum::Router;

use crate::handlers::research;
use crate::state::AppState;

/// Research routes, registered under `/api/v1`.
///
/// ```text
/// GET  /research                      list_research
/// POST /research                      submit_research
/// GET  /research/template             get_template
/// GET  /research/title-availability   check_title_availability
/// GET  /research/{slug}               get_research
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/research",
            get(research::list_research).post(research::submit_research),
        )
        .route("/research/template", get(research::get_template))
        .route(
            "/research/title-availability",
            get(research::check_title_availability),
        )
        .route("/research/{slug}", get(research::get_research))
}
