//! In-process document store.

use async_trait::async_trait;
use commons_core::error::StoreError;
use commons_core::models::{ContentCategory, Research, ResearchFormInput, Tutorial};
use commons_core::slug::slugify;
use commons_core::store::{slug_collides, ContentStore, UploadStatus};
use tokio::sync::{watch, RwLock};

/// Keeps every collection in memory. Ids are random UUIDs.
pub struct MemoryStore {
    howtos: RwLock<Vec<Tutorial>>,
    research: RwLock<Vec<Research>>,
    status: watch::Sender<UploadStatus>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_documents(Vec::new(), Vec::new())
    }

    pub fn with_documents(howtos: Vec<Tutorial>, research: Vec<Research>) -> Self {
        let (status, _) = watch::channel(UploadStatus::default());
        Self {
            howtos: RwLock::new(howtos),
            research: RwLock::new(research),
            status,
        }
    }

    fn set_status(&self, status: UploadStatus) {
        self.status.send_replace(status);
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn list_howtos(&self) -> Result<Vec<Tutorial>, StoreError> {
        Ok(self.howtos.read().await.clone())
    }

    async fn get_howto_by_slug(&self, slug: &str) -> Result<Option<Tutorial>, StoreError> {
        Ok(self
            .howtos
            .read()
            .await
            .iter()
            .find(|t| t.slug == slug)
            .cloned())
    }

    async fn list_research(&self) -> Result<Vec<Research>, StoreError> {
        Ok(self.research.read().await.clone())
    }

    async fn get_research_by_slug(&self, slug: &str) -> Result<Option<Research>, StoreError> {
        Ok(self
            .research
            .read()
            .await
            .iter()
            .find(|r| r.slug == slug)
            .cloned())
    }

    async fn is_title_available(
        &self,
        title: &str,
        category: ContentCategory,
        exclude_id: Option<&str>,
    ) -> Result<bool, StoreError> {
        let taken = match category {
            ContentCategory::Howto => {
                let howtos = self.howtos.read().await;
                slug_collides(
                    title,
                    exclude_id,
                    howtos.iter().map(|t| (t.id.as_str(), t.slug.as_str())),
                )
            }
            ContentCategory::Research => {
                let research = self.research.read().await;
                slug_collides(
                    title,
                    exclude_id,
                    research.iter().map(|r| (r.id.as_str(), r.slug.as_str())),
                )
            }
        };
        Ok(!taken)
    }

    async fn upload_research(&self, input: ResearchFormInput) -> UploadStatus {
        self.set_status(UploadStatus::started());

        let mut research = self.research.write().await;
        let id = input
            .id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().simple().to_string());
        let slug = if input.slug.is_empty() {
            slugify(&input.title)
        } else {
            input.slug.clone()
        };

        if slug.is_empty() {
            let status = UploadStatus::failed("A research post needs a title that yields a slug");
            tracing::warn!(research_id = %id, "Research upload rejected, empty slug");
            self.set_status(status.clone());
            return status;
        }

        if research.iter().any(|r| r.slug == slug && r.id != id) {
            let status = UploadStatus::failed(format!("Slug '{slug}' is already in use"));
            tracing::warn!(slug = %slug, "Research upload rejected");
            self.set_status(status.clone());
            return status;
        }

        let now = chrono::Utc::now();
        match research.iter_mut().find(|r| r.id == id) {
            Some(existing) => {
                existing.slug = slug;
                existing.title = input.title;
                existing.description = input.description;
                existing.tags = input.tags;
                existing.moderation = input.moderation;
                existing.modified = now;
                if existing.created_by.is_none() {
                    existing.created_by = input.created_by;
                }
            }
            None => research.push(Research {
                id: id.clone(),
                slug,
                title: input.title,
                description: input.description,
                tags: input.tags,
                moderation: input.moderation,
                created: input.created.unwrap_or(now),
                modified: now,
                created_by: input.created_by,
            }),
        }
        drop(research);

        tracing::info!(research_id = %id, "Research stored");
        let status = UploadStatus::completed(id);
        self.set_status(status.clone());
        status
    }

    fn upload_status(&self) -> watch::Receiver<UploadStatus> {
        self.status.subscribe()
    }

    fn reset_upload_status(&self) {
        self.set_status(UploadStatus::default());
    }
}
