//! Contract of the document store client.
//!
//! Components receive an `Arc<dyn ContentStore>` at construction time; the
//! concrete clients live in `commons-db`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::error::StoreError;
use crate::models::{ContentCategory, Research, ResearchFormInput, Tutorial};
use crate::slug::slugify;
use crate::types::DocId;

/// Progress of the most recent upload.
///
/// `complete` is the terminal success state. A failed upload leaves
/// `complete` false and sets `error`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadStatus {
    pub start: bool,
    pub database: bool,
    pub complete: bool,
    pub error: Option<String>,
    pub document_id: Option<DocId>,
}

impl UploadStatus {
    pub fn started() -> Self {
        Self {
            start: true,
            ..Default::default()
        }
    }

    pub fn completed(document_id: DocId) -> Self {
        Self {
            start: true,
            database: true,
            complete: true,
            error: None,
            document_id: Some(document_id),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            start: true,
            error: Some(error.into()),
            ..Default::default()
        }
    }
}

#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn list_howtos(&self) -> Result<Vec<Tutorial>, StoreError>;

    async fn get_howto_by_slug(&self, slug: &str) -> Result<Option<Tutorial>, StoreError>;

    async fn list_research(&self) -> Result<Vec<Research>, StoreError>;

    async fn get_research_by_slug(&self, slug: &str) -> Result<Option<Research>, StoreError>;

    /// Whether `title` can be used in `category` without its slug colliding
    /// with another document. The document `exclude_id` is ignored, so an
    /// entity being edited may keep its own title.
    async fn is_title_available(
        &self,
        title: &str,
        category: ContentCategory,
        exclude_id: Option<&str>,
    ) -> Result<bool, StoreError>;

    /// Create or update a research document. Never fails: problems are
    /// reported in the returned status.
    async fn upload_research(&self, input: ResearchFormInput) -> UploadStatus;

    /// Observe the status of the current upload.
    fn upload_status(&self) -> watch::Receiver<UploadStatus>;

    fn reset_upload_status(&self);
}

/// True when some document other than `exclude_id` already uses the slug
/// derived from `title`. Shared by store clients that filter locally.
pub fn slug_collides<'a>(
    title: &str,
    exclude_id: Option<&str>,
    existing: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> bool {
    let wanted = slugify(title);
    existing
        .into_iter()
        .any(|(id, slug)| slug == wanted && Some(id) != exclude_id)
}
