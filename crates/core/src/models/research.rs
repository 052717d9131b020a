//! Research posts and the values edited by the research form.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::moderation::Moderation;
use crate::types::{DocId, Timestamp};

/// Maximum title length accepted by the research form.
pub const MAX_TITLE_LEN: u64 = 50;
/// Maximum description length accepted by the research form.
pub const MAX_DESCRIPTION_LEN: u64 = 400;

/// A research document as stored in the `research` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Research {
    #[serde(rename = "_id")]
    pub id: DocId,
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub moderation: Moderation,
    #[serde(rename = "_created")]
    pub created: Timestamp,
    #[serde(rename = "_modified")]
    pub modified: Timestamp,
    #[serde(rename = "_createdBy", default)]
    pub created_by: Option<String>,
}

/// Editable research values, as bound to the form fields.
///
/// `id` is `None` until the store has assigned one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct ResearchFormInput {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DocId>,
    #[validate(length(max = 50))]
    pub title: String,
    #[validate(length(max = 400))]
    pub description: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub moderation: Moderation,
    /// Creation time of the stored document. `None` until first upload.
    #[serde(rename = "_created", default, skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,
    #[serde(rename = "_createdBy", default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

impl From<Research> for ResearchFormInput {
    fn from(research: Research) -> Self {
        Self {
            id: Some(research.id),
            title: research.title,
            description: research.description,
            slug: research.slug,
            tags: research.tags,
            moderation: research.moderation,
            created: Some(research.created),
            created_by: research.created_by,
        }
    }
}
