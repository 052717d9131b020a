//! Content entities stored in the document database.

pub mod notification;
pub mod research;
pub mod tutorial;

use serde::{Deserialize, Serialize};

pub use notification::{Notification, NotificationType, TriggeredBy};
pub use research::{Research, ResearchFormInput};
pub use tutorial::{Difficulty, Tutorial, TutorialStep};

/// Content category, used to scope title uniqueness and store collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentCategory {
    Howto,
    Research,
}

impl ContentCategory {
    /// Name of the document collection holding this category.
    pub fn collection(&self) -> &'static str {
        match self {
            ContentCategory::Howto => "howtos",
            ContentCategory::Research => "research",
        }
    }
}
