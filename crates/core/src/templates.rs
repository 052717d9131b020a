//! Default values that seed "create" forms.

use crate::models::{Difficulty, ResearchFormInput, Tutorial, TutorialStep};
use crate::moderation::Moderation;

/// Number of blank steps a new tutorial starts with.
pub const TUTORIAL_TEMPLATE_STEPS: usize = 3;

/// A blank tutorial: empty text fields, `easy` difficulty, three empty steps.
pub fn tutorial_template() -> Tutorial {
    Tutorial {
        id: String::new(),
        slug: String::new(),
        title: String::new(),
        description: String::new(),
        time: String::new(),
        cost: String::new(),
        difficulty_level: Difficulty::Easy,
        cover_image_url: String::new(),
        extern_file_url: String::new(),
        files_url: String::new(),
        steps: vec![TutorialStep::default(); TUTORIAL_TEMPLATE_STEPS],
        tags: Vec::new(),
        workspace_name: String::new(),
    }
}

/// Blank research values for create mode.
pub fn research_template() -> ResearchFormInput {
    ResearchFormInput {
        id: None,
        title: String::new(),
        description: String::new(),
        slug: String::new(),
        tags: Vec::new(),
        moderation: Moderation::Draft,
        created: None,
        created_by: None,
    }
}
