//! Random entity builders for test fixtures.
//!
//! Each builder takes an overrides struct whose `Some` fields replace the
//! generated defaults:
//!
//! ```ignore
//! let unread = factories::notification(NotificationOverrides {
//!     read: Some(false),
//!     ..Default::default()
//! });
//! ```

use chrono::Duration;
use rand::Rng;

use crate::models::{
    Difficulty, Notification, NotificationType, Research, TriggeredBy, Tutorial, TutorialStep,
};
use crate::moderation::Moderation;
use crate::slug::slugify;
use crate::types::{DocId, Timestamp};

const FIRST_NAMES: &[&str] = &["Ana", "Bram", "Chidi", "Dara", "Emil", "Farah", "Goran", "Hana"];
const LAST_NAMES: &[&str] = &["Okafor", "Lindqvist", "Moreau", "Tanaka", "Silva", "Novak"];
const WORDS: &[&str] = &[
    "plastic", "shredder", "extrusion", "sheet", "press", "mould", "bottle", "caps", "beam",
    "brick", "recycling", "workspace", "injection", "flakes",
];
const DIFFICULTIES: &[Difficulty] = &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
const MODERATIONS: &[Moderation] = &[
    Moderation::Draft,
    Moderation::AwaitingModeration,
    Moderation::Accepted,
    Moderation::Rejected,
    Moderation::ImprovementsNeeded,
];

fn pick<T: Copy>(rng: &mut impl Rng, items: &[T]) -> T {
    items[rng.random_range(0..items.len())]
}

/// A 24-character hex id in the style of document-database object ids.
pub fn object_id(rng: &mut impl Rng) -> DocId {
    format!("{:024x}", rng.random::<u128>() >> 32)
}

/// A timestamp within the past year.
pub fn past_timestamp(rng: &mut impl Rng) -> Timestamp {
    chrono::Utc::now() - Duration::seconds(rng.random_range(1..365 * 24 * 3600))
}

fn sentence(rng: &mut impl Rng, words: usize) -> String {
    let mut text = (0..words).map(|_| pick(rng, WORDS)).collect::<Vec<_>>().join(" ");
    if let Some(first) = text.get(..1).map(str::to_uppercase) {
        text.replace_range(..1, &first);
    }
    text
}

fn user_name(rng: &mut impl Rng) -> String {
    format!(
        "{}_{}{}",
        pick(rng, FIRST_NAMES).to_lowercase(),
        pick(rng, LAST_NAMES).to_lowercase(),
        rng.random_range(1..100)
    )
}

fn url(rng: &mut impl Rng) -> String {
    format!(
        "https://{}.example.org/{}",
        pick(rng, WORDS),
        pick(rng, WORDS)
    )
}

// ---------------------------------------------------------------------------
// Notification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct NotificationOverrides {
    pub id: Option<DocId>,
    pub created: Option<Timestamp>,
    pub notified: Option<bool>,
    pub read: Option<bool>,
    pub triggered_by: Option<TriggeredBy>,
    pub kind: Option<NotificationType>,
    pub relevant_url: Option<String>,
}

pub fn notification(overrides: NotificationOverrides) -> Notification {
    let mut rng = rand::rng();
    let triggered_by = overrides.triggered_by.unwrap_or_else(|| TriggeredBy {
        display_name: format!("{} {}", pick(&mut rng, FIRST_NAMES), pick(&mut rng, LAST_NAMES)),
        user_id: user_name(&mut rng),
    });

    Notification {
        id: overrides.id.unwrap_or_else(|| object_id(&mut rng)),
        created: overrides.created.unwrap_or_else(|| past_timestamp(&mut rng)),
        notified: overrides.notified.unwrap_or_else(|| rng.random_bool(0.5)),
        read: overrides.read.unwrap_or_else(|| rng.random_bool(0.5)),
        triggered_by,
        kind: overrides
            .kind
            .unwrap_or_else(|| pick(&mut rng, NotificationType::ALL)),
        relevant_url: overrides.relevant_url.unwrap_or_else(|| url(&mut rng)),
    }
}

// ---------------------------------------------------------------------------
// Research
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct ResearchOverrides {
    pub id: Option<DocId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub moderation: Option<Moderation>,
    pub created_by: Option<String>,
}

/// A research post. The slug is always derived from the final title.
pub fn research(overrides: ResearchOverrides) -> Research {
    let mut rng = rand::rng();
    let title = overrides.title.unwrap_or_else(|| sentence(&mut rng, 3));
    let created = past_timestamp(&mut rng);

    Research {
        id: overrides.id.unwrap_or_else(|| object_id(&mut rng)),
        slug: slugify(&title),
        title,
        description: overrides
            .description
            .unwrap_or_else(|| sentence(&mut rng, 12)),
        tags: overrides.tags.unwrap_or_default(),
        moderation: overrides
            .moderation
            .unwrap_or_else(|| pick(&mut rng, MODERATIONS)),
        created,
        modified: created,
        created_by: Some(overrides.created_by.unwrap_or_else(|| user_name(&mut rng))),
    }
}

// ---------------------------------------------------------------------------
// Tutorial
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct TutorialOverrides {
    pub id: Option<DocId>,
    pub title: Option<String>,
    pub difficulty_level: Option<Difficulty>,
    pub steps: Option<Vec<TutorialStep>>,
    pub tags: Option<Vec<String>>,
    pub workspace_name: Option<String>,
}

/// A tutorial with one to five filled steps. The slug follows the title.
pub fn tutorial(overrides: TutorialOverrides) -> Tutorial {
    let mut rng = rand::rng();
    let title = overrides.title.unwrap_or_else(|| sentence(&mut rng, 3));
    let steps = overrides.steps.unwrap_or_else(|| {
        (0..rng.random_range(1..=5))
            .map(|_| TutorialStep {
                title: sentence(&mut rng, 2),
                text: sentence(&mut rng, 10),
                images: vec![url(&mut rng)],
            })
            .collect()
    });

    Tutorial {
        id: overrides.id.unwrap_or_else(|| object_id(&mut rng)),
        slug: slugify(&title),
        title,
        description: sentence(&mut rng, 12),
        time: format!("{} hours", rng.random_range(1..10)),
        cost: format!("{} EUR", rng.random_range(5..500)),
        difficulty_level: overrides
            .difficulty_level
            .unwrap_or_else(|| pick(&mut rng, DIFFICULTIES)),
        cover_image_url: url(&mut rng),
        extern_file_url: String::new(),
        files_url: String::new(),
        steps,
        tags: overrides.tags.unwrap_or_default(),
        workspace_name: overrides
            .workspace_name
            .unwrap_or_else(|| pick(&mut rng, WORDS).to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_defaults_are_valid() {
        let n = notification(NotificationOverrides::default());
        assert!(NotificationType::ALL.contains(&n.kind));
        assert_eq!(n.id.len(), 24);
        assert!(n.id.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(n.created < chrono::Utc::now());
        assert!(n.relevant_url.starts_with("https://"));
        // Booleans are typed; make sure they survive the wire format.
        let json = serde_json::to_value(&n).unwrap();
        assert!(json["read"].is_boolean());
        assert!(json["notified"].is_boolean());
    }

    #[test]
    fn notification_overrides_win() {
        let n = notification(NotificationOverrides {
            read: Some(true),
            kind: Some(NotificationType::ResearchUpdate),
            relevant_url: Some("https://example.org/research/x".into()),
            ..Default::default()
        });
        assert!(n.read);
        assert_eq!(n.kind, NotificationType::ResearchUpdate);
        assert_eq!(n.relevant_url, "https://example.org/research/x");
    }

    #[test]
    fn research_slug_follows_title_override() {
        let r = research(ResearchOverrides {
            title: Some("Plastic Shredder".into()),
            moderation: Some(Moderation::Draft),
            ..Default::default()
        });
        assert_eq!(r.slug, "plastic-shredder");
        assert_eq!(r.moderation, Moderation::Draft);
        assert!(r.created_by.is_some());
    }

    #[test]
    fn tutorial_has_steps() {
        let t = tutorial(TutorialOverrides::default());
        assert!((1..=5).contains(&t.steps.len()));
        assert_eq!(t.slug, slugify(&t.title));
    }
}
