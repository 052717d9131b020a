//! Handlers for the how-to page routes.
//!
//! Each handler renders a [`HowtoView`] through the shared [`HowtoPage`],
//! which fetches the how-to list once on first use.
//!
//! [`HowtoPage`]: commons_core::page::HowtoPage

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use commons_core::error::{CoreError, StoreError};
use commons_core::page::{HowtoRoute, HowtoView};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::MaybeAuthUser;
use crate::state::AppState;

/// GET /how-to
///
/// 503 while the list has not been fetched; each request retries the fetch.
pub async fn list_howtos(State(state): State<AppState>) -> AppResult<Json<HowtoView>> {
    match state.howto_page.view(HowtoRoute::List, false).await? {
        HowtoView::List {
            loaded: false,
            error,
            ..
        } => Err(AppError::Store(StoreError::Unavailable(
            error.unwrap_or_else(|| "How-to list not loaded".into()),
        ))),
        view => Ok(Json(view)),
    }
}

/// GET /how-to/create
///
/// Returns the blank tutorial template for signed-in users. Anyone else is
/// sent back to the list with a 303.
pub async fn create_howto(
    MaybeAuthUser(user): MaybeAuthUser,
    State(state): State<AppState>,
) -> AppResult<Response> {
    let view = state
        .howto_page
        .view(HowtoRoute::Create, user.is_some())
        .await?;

    match view {
        HowtoView::Redirect { to } => {
            tracing::debug!(to = %to, "Unauthenticated create, redirecting");
            Ok(Redirect::to(&to).into_response())
        }
        view => Ok(Json(view).into_response()),
    }
}

/// GET /how-to/{slug}
pub async fn get_howto(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<HowtoView>> {
    match state
        .howto_page
        .view(HowtoRoute::Detail(slug), false)
        .await?
    {
        HowtoView::NotFound { slug } => Err(AppError::Core(CoreError::NotFound {
            entity: "Howto",
            id: slug,
        })),
        view => Ok(Json(view)),
    }
}
