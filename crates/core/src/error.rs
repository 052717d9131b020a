use crate::types::DocId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DocId },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

/// Failures reported by a [`ContentStore`](crate::store::ContentStore) client.
///
/// Upload failures are not represented here: they are carried in
/// [`UploadStatus::error`](crate::store::UploadStatus::error) instead.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("Document store unavailable: {0}")]
    Unavailable(String),

    #[error("Document store rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Malformed document: {0}")]
    Decode(String),
}
