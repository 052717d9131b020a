//! Handlers for the `/research` resource.
//!
//! Reads go straight to the store. Submissions run through a
//! [`ResearchForm`] so the API applies the same slug, validation and
//! moderation rules as an interactive editor.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use commons_core::error::CoreError;
use commons_core::form::{FormMode, NoopUnloadHandler, ResearchForm};
use commons_core::models::{ContentCategory, Research, ResearchFormInput};
use commons_core::moderation::{Moderation, SubmitAction};
use commons_core::store::UploadStatus;
use commons_core::templates::research_template;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /research/title-availability`.
#[derive(Debug, Deserialize)]
pub struct TitleAvailabilityQuery {
    pub title: String,
    /// Id of the document being edited, which may keep its own title.
    pub exclude_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TitleAvailability {
    pub available: bool,
}

/// Body of `POST /research`.
#[derive(Debug, Deserialize)]
pub struct SubmitResearch {
    pub values: SubmittedValues,
    pub action: SubmitAction,
    /// Slug of the post being edited. Absent when creating.
    pub original_slug: Option<String>,
}

/// The user-editable fields. Slug and moderation are derived server-side.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SubmittedValues {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SubmitOutcome {
    pub status: UploadStatus,
    pub slug: String,
    pub moderation: Moderation,
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// GET /api/v1/research
pub async fn list_research(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Research>>>> {
    let research = state.store.list_research().await?;
    Ok(Json(DataResponse { data: research }))
}

/// GET /api/v1/research/template
///
/// Values a new research form starts from.
pub async fn get_template() -> Json<DataResponse<ResearchFormInput>> {
    Json(DataResponse {
        data: research_template(),
    })
}

/// GET /api/v1/research/title-availability
pub async fn check_title_availability(
    State(state): State<AppState>,
    Query(params): Query<TitleAvailabilityQuery>,
) -> AppResult<Json<TitleAvailability>> {
    if params.title.trim().is_empty() {
        return Err(AppError::BadRequest("title must not be empty".into()));
    }

    let available = state
        .store
        .is_title_available(
            &params.title,
            ContentCategory::Research,
            params.exclude_id.as_deref(),
        )
        .await?;
    Ok(Json(TitleAvailability { available }))
}

/// GET /api/v1/research/{slug}
pub async fn get_research(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<Research>>> {
    let research = state
        .store
        .get_research_by_slug(&slug)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Research",
            id: slug,
        })?;
    Ok(Json(DataResponse { data: research }))
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// POST /api/v1/research
///
/// Save as draft or publish. A new post is credited to the caller; edits keep
/// the original author. Invalid fields are returned as a 422 with a
/// per-field map; upload failures come back in the status body.
pub async fn submit_research(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SubmitResearch>,
) -> AppResult<Json<DataResponse<SubmitOutcome>>> {
    let (initial, mode) = match &input.original_slug {
        Some(slug) => {
            let existing = state
                .store
                .get_research_by_slug(slug)
                .await?
                .ok_or_else(|| CoreError::NotFound {
                    entity: "Research",
                    id: slug.clone(),
                })?;
            (ResearchFormInput::from(existing), FormMode::Edit)
        }
        None => {
            let mut values = research_template();
            values.created_by = Some(auth.user_id.clone());
            (values, FormMode::Create)
        }
    };

    let mut form = ResearchForm::new(
        Arc::clone(&state.store),
        initial,
        mode,
        Arc::new(NoopUnloadHandler),
    );
    form.set_title(input.values.title);
    form.set_description(input.values.description);
    form.set_tags(input.values.tags);

    let status = form
        .submit(input.action)
        .await
        .map_err(AppError::InvalidFields)?;

    tracing::info!(
        user_id = %auth.user_id,
        mode = ?mode,
        slug = %form.values().slug,
        complete = status.complete,
        "Research submitted"
    );

    let outcome = SubmitOutcome {
        status,
        slug: form.values().slug.clone(),
        moderation: form.values().moderation,
    };
    form.dismiss_submit_status();

    Ok(Json(DataResponse { data: outcome }))
}
