//! User notifications.

use serde::{Deserialize, Serialize};

use crate::types::{DocId, Timestamp};

/// Kind of event a notification reports.
///
/// The set is open: kinds this build does not know decode as
/// [`NotificationType::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    HowtoMention,
    HowtoUseful,
    NewComment,
    NewCommentResearch,
    ResearchMention,
    ResearchUseful,
    ResearchUpdate,
    #[serde(other)]
    Unknown,
}

impl NotificationType {
    /// Every known notification kind.
    pub const ALL: &'static [NotificationType] = &[
        NotificationType::HowtoMention,
        NotificationType::HowtoUseful,
        NotificationType::NewComment,
        NotificationType::NewCommentResearch,
        NotificationType::ResearchMention,
        NotificationType::ResearchUseful,
        NotificationType::ResearchUpdate,
    ];
}

/// The user whose action produced a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggeredBy {
    pub display_name: String,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(rename = "_id")]
    pub id: DocId,
    #[serde(rename = "_created")]
    pub created: Timestamp,
    pub notified: bool,
    pub read: bool,
    pub triggered_by: TriggeredBy,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub relevant_url: String,
}
