//! In-crate store double for unit tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::watch;

use crate::error::StoreError;
use crate::models::{ContentCategory, Research, ResearchFormInput, Tutorial};
use crate::moderation::Moderation;
use crate::slug::slugify;
use crate::store::{slug_collides, ContentStore, UploadStatus};

pub(crate) struct StubStore {
    pub howtos: Mutex<Vec<Tutorial>>,
    pub research: Mutex<Vec<Research>>,
    pub uploads: Mutex<Vec<ResearchFormInput>>,
    pub list_calls: Mutex<usize>,
    pub fail_lookups: AtomicBool,
    pub fail_uploads: AtomicBool,
    status: watch::Sender<UploadStatus>,
}

impl Default for StubStore {
    fn default() -> Self {
        let (status, _) = watch::channel(UploadStatus::default());
        Self {
            howtos: Mutex::new(Vec::new()),
            research: Mutex::new(Vec::new()),
            uploads: Mutex::new(Vec::new()),
            list_calls: Mutex::new(0),
            fail_lookups: AtomicBool::new(false),
            fail_uploads: AtomicBool::new(false),
            status,
        }
    }
}

impl StubStore {
    pub fn seed_research(&self, id: &str, title: &str, moderation: Moderation) {
        let now = chrono::Utc::now();
        self.research.lock().unwrap().push(Research {
            id: id.into(),
            slug: slugify(title),
            title: title.into(),
            description: format!("About {title}"),
            tags: Vec::new(),
            moderation,
            created: now,
            modified: now,
            created_by: None,
        });
    }

    pub fn seed_howto(&self, tutorial: Tutorial) {
        self.howtos.lock().unwrap().push(tutorial);
    }

    pub fn research_by_slug(&self, slug: &str) -> Option<Research> {
        self.research
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.slug == slug)
            .cloned()
    }

    pub fn research_count(&self) -> usize {
        self.research.lock().unwrap().len()
    }

    pub fn last_upload(&self) -> Option<ResearchFormInput> {
        self.uploads.lock().unwrap().last().cloned()
    }

    pub fn push_status(&self, status: UploadStatus) {
        self.status.send_replace(status);
    }

    fn lookup_guard(&self) -> Result<(), StoreError> {
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("stub offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ContentStore for StubStore {
    async fn list_howtos(&self) -> Result<Vec<Tutorial>, StoreError> {
        *self.list_calls.lock().unwrap() += 1;
        self.lookup_guard()?;
        Ok(self.howtos.lock().unwrap().clone())
    }

    async fn get_howto_by_slug(&self, slug: &str) -> Result<Option<Tutorial>, StoreError> {
        self.lookup_guard()?;
        Ok(self
            .howtos
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.slug == slug)
            .cloned())
    }

    async fn list_research(&self) -> Result<Vec<Research>, StoreError> {
        self.lookup_guard()?;
        Ok(self.research.lock().unwrap().clone())
    }

    async fn get_research_by_slug(&self, slug: &str) -> Result<Option<Research>, StoreError> {
        self.lookup_guard()?;
        Ok(self.research_by_slug(slug))
    }

    async fn is_title_available(
        &self,
        title: &str,
        _category: ContentCategory,
        exclude_id: Option<&str>,
    ) -> Result<bool, StoreError> {
        self.lookup_guard()?;
        let research = self.research.lock().unwrap();
        let existing = research.iter().map(|r| (r.id.as_str(), r.slug.as_str()));
        Ok(!slug_collides(title, exclude_id, existing))
    }

    async fn upload_research(&self, input: ResearchFormInput) -> UploadStatus {
        self.uploads.lock().unwrap().push(input.clone());
        if self.fail_uploads.load(Ordering::SeqCst) {
            let status = UploadStatus::failed("stub rejected upload");
            self.status.send_replace(status.clone());
            return status;
        }

        let mut research = self.research.lock().unwrap();
        let id = input
            .id
            .clone()
            .unwrap_or_else(|| format!("research-{}", research.len() + 1));
        let now = chrono::Utc::now();
        let doc = Research {
            id: id.clone(),
            slug: input.slug,
            title: input.title,
            description: input.description,
            tags: input.tags,
            moderation: input.moderation,
            created: now,
            modified: now,
            created_by: None,
        };
        match research.iter_mut().find(|r| r.id == id) {
            Some(existing) => *existing = doc,
            None => research.push(doc),
        }

        let status = UploadStatus::completed(id);
        self.status.send_replace(status.clone());
        status
    }

    fn upload_status(&self) -> watch::Receiver<UploadStatus> {
        self.status.subscribe()
    }

    fn reset_upload_status(&self) {
        self.status.send_replace(UploadStatus::default());
    }
}
