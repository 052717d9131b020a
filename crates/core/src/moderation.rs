//! Moderation workflow values and the draft/publish decision.

use serde::{Deserialize, Serialize};

/// Workflow state of a content entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Moderation {
    #[default]
    Draft,
    AwaitingModeration,
    Accepted,
    Rejected,
    ImprovementsNeeded,
}

impl Moderation {
    /// Wire representation, matching the serde encoding.
    pub fn as_str(&self) -> &'static str {
        match self {
            Moderation::Draft => "draft",
            Moderation::AwaitingModeration => "awaiting-moderation",
            Moderation::Accepted => "accepted",
            Moderation::Rejected => "rejected",
            Moderation::ImprovementsNeeded => "improvements-needed",
        }
    }
}

/// The two terminal actions a content form offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitAction {
    Draft,
    Publish,
}

/// Moderation value written on submit. The previous value never matters.
pub fn decide_moderation_status(action: SubmitAction) -> Moderation {
    match action {
        SubmitAction::Draft => Moderation::Draft,
        SubmitAction::Publish => Moderation::AwaitingModeration,
    }
}
