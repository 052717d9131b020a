//! HTTP client for a remote document database.
//!
//! ```text
//! GET {base}/collections/{collection}/documents          list
//! GET {base}/collections/{collection}/documents?slug=s   lookup by slug
//! PUT {base}/collections/{collection}/documents/{id}     create or replace
//! ```
//!
//! List responses use a `{ "data": [...] }` envelope.

use std::time::Duration;

use async_trait::async_trait;
use commons_core::error::StoreError;
use commons_core::models::{ContentCategory, Research, ResearchFormInput, Tutorial};
use commons_core::slug::slugify;
use commons_core::store::{slug_collides, ContentStore, UploadStatus};
use commons_core::types::{DocId, Timestamp};
use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

#[derive(Debug, Deserialize)]
struct DocumentList<T> {
    data: Vec<T>,
}

/// Only the identity of a document, for uniqueness checks.
#[derive(Debug, Deserialize)]
struct DocumentRef {
    #[serde(rename = "_id", alias = "id")]
    id: DocId,
    #[serde(default)]
    slug: String,
}

#[derive(Debug, Serialize)]
struct ResearchUpload<'a> {
    #[serde(flatten)]
    values: &'a ResearchFormInput,
    #[serde(rename = "_modified")]
    modified: Timestamp,
}

#[derive(Debug)]
pub struct HttpStore {
    client: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
    status: watch::Sender<UploadStatus>,
}

impl HttpStore {
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let base_url = parse_base_url(base_url)?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        let (status, _) = watch::channel(UploadStatus::default());

        Ok(Self {
            client,
            base_url,
            api_key,
            status,
        })
    }

    fn documents_url(&self, collection: &str) -> Result<Url, StoreError> {
        self.base_url
            .join(&format!("collections/{collection}/documents"))
            .map_err(|e| StoreError::Unavailable(format!("Invalid store URL: {e}")))
    }

    fn document_url(&self, collection: &str, id: &str) -> Result<Url, StoreError> {
        self.base_url
            .join(&format!("collections/{collection}/documents/{id}"))
            .map_err(|e| StoreError::Unavailable(format!("Invalid store URL: {e}")))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        collection: &str,
        slug: Option<&str>,
    ) -> Result<Vec<T>, StoreError> {
        let mut url = self.documents_url(collection)?;
        if let Some(slug) = slug {
            url.query_pairs_mut().append_pair("slug", slug);
        }

        let response = self
            .authorize(self.client.get(url))
            .send()
            .await
            .map_err(classify_reqwest_error)?
            .error_for_status()
            .map_err(classify_reqwest_error)?;

        let list: DocumentList<T> = response.json().await.map_err(classify_reqwest_error)?;
        Ok(list.data)
    }

    async fn put_research(&self, id: &str, values: &ResearchFormInput) -> Result<(), StoreError> {
        let url = self.document_url(ContentCategory::Research.collection(), id)?;
        let body = ResearchUpload {
            values,
            modified: chrono::Utc::now(),
        };

        self.authorize(self.client.put(url).json(&body))
            .send()
            .await
            .map_err(classify_reqwest_error)?
            .error_for_status()
            .map_err(classify_reqwest_error)?;
        Ok(())
    }
}

#[async_trait]
impl ContentStore for HttpStore {
    async fn list_howtos(&self) -> Result<Vec<Tutorial>, StoreError> {
        self.fetch_list(ContentCategory::Howto.collection(), None).await
    }

    async fn get_howto_by_slug(&self, slug: &str) -> Result<Option<Tutorial>, StoreError> {
        let found: Vec<Tutorial> = self
            .fetch_list(ContentCategory::Howto.collection(), Some(slug))
            .await?;
        Ok(found.into_iter().next())
    }

    async fn list_research(&self) -> Result<Vec<Research>, StoreError> {
        self.fetch_list(ContentCategory::Research.collection(), None)
            .await
    }

    async fn get_research_by_slug(&self, slug: &str) -> Result<Option<Research>, StoreError> {
        let found: Vec<Research> = self
            .fetch_list(ContentCategory::Research.collection(), Some(slug))
            .await?;
        Ok(found.into_iter().next())
    }

    async fn is_title_available(
        &self,
        title: &str,
        category: ContentCategory,
        exclude_id: Option<&str>,
    ) -> Result<bool, StoreError> {
        let slug = slugify(title);
        let matches: Vec<DocumentRef> = self.fetch_list(category.collection(), Some(&slug)).await?;
        let taken = slug_collides(
            title,
            exclude_id,
            matches.iter().map(|d| (d.id.as_str(), d.slug.as_str())),
        );
        Ok(!taken)
    }

    async fn upload_research(&self, input: ResearchFormInput) -> UploadStatus {
        self.status.send_replace(UploadStatus::started());

        let input = prepare_upload(input, chrono::Utc::now());
        let id = input.id.clone().unwrap_or_default();

        let status = match self.put_research(&id, &input).await {
            Ok(()) => {
                tracing::info!(research_id = %id, "Research uploaded");
                UploadStatus::completed(id)
            }
            Err(err) => {
                tracing::error!(error = %err, research_id = %id, "Research upload failed");
                UploadStatus::failed(err.to_string())
            }
        };
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

/// Fill in what a stored document needs but a new form does not have yet:
/// id, slug and creation time.
fn prepare_upload(mut input: ResearchFormInput, now: Timestamp) -> ResearchFormInput {
    input
        .id
        .get_or_insert_with(|| uuid::Uuid::new_v4().simple().to_string());
    if input.slug.is_empty() {
        input.slug = slugify(&input.title);
    }
    input.created.get_or_insert(now);
    input
}

/// Parse the base URL, making sure relative joins stay below its path.
fn parse_base_url(raw: &str) -> Result<Url, StoreError> {
    let mut normalized = raw.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Url::parse(&normalized)
        .map_err(|e| StoreError::Unavailable(format!("Invalid store URL '{raw}': {e}")))
}

/// Classify a reqwest error into a [`StoreError`].
///
/// - HTTP error statuses map to `Rejected`.
/// - Body decoding failures map to `Decode`.
/// - Everything else (connect, timeout) maps to `Unavailable`.
fn classify_reqwest_error(err: reqwest::Error) -> StoreError {
    if let Some(status) = err.status() {
        return StoreError::Rejected {
            status: status.as_u16(),
            message: err.to_string(),
        };
    }
    if err.is_decode() {
        return StoreError::Decode(err.to_string());
    }
    StoreError::Unavailable(err.to_string())
}
