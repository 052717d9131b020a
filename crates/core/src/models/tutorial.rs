//! Tutorial ("how-to" guide) documents.

use serde::{Deserialize, Serialize};

use crate::types::DocId;

/// Difficulty rating shown on a tutorial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// One step of a tutorial. Steps keep their insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TutorialStep {
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl TutorialStep {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.text.is_empty() && self.images.is_empty()
    }
}

/// A tutorial document as stored in the `howtos` collection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tutorial {
    pub id: DocId,
    pub slug: String,
    #[serde(rename = "tutorial_title")]
    pub title: String,
    #[serde(rename = "tutorial_description")]
    pub description: String,
    #[serde(rename = "tutorial_time")]
    pub time: String,
    #[serde(rename = "tutorial_cost")]
    pub cost: String,
    pub difficulty_level: Difficulty,
    pub cover_image_url: String,
    #[serde(rename = "tutorial_extern_file_url")]
    pub extern_file_url: String,
    #[serde(rename = "tutorial_files_url")]
    pub files_url: String,
    pub steps: Vec<TutorialStep>,
    pub tags: Vec<String>,
    pub workspace_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tutorial_uses_document_field_names() {
        let tutorial = Tutorial {
            title: "Sheet press".into(),
            difficulty_level: Difficulty::Hard,
            ..Default::default()
        };
        let json = serde_json::to_value(&tutorial).unwrap();
        assert_eq!(json["tutorial_title"], "Sheet press");
        assert_eq!(json["difficulty_level"], "hard");
        assert!(json.get("title").is_none());
    }

    #[test]
    fn tutorial_decodes_with_missing_fields() {
        let tutorial: Tutorial =
            serde_json::from_str(r#"{ "id": "abc", "slug": "sheet-press" }"#).unwrap();
        assert_eq!(tutorial.id, "abc");
        assert_eq!(tutorial.difficulty_level, Difficulty::Easy);
        assert!(tutorial.steps.is_empty());
    }
}
