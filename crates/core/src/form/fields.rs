//! Field identities, inline field errors, synchronous checks, and the value
//! comparisons used for dirty tracking.

use std::collections::{BTreeMap, BTreeSet};

use serde::ser::{Serialize, Serializer};
use validator::Validate;

use crate::models::research::{MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};
use crate::models::ResearchFormInput;
use crate::slug::slugify;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Title,
    Description,
    Tags,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Description => "description",
            FormField::Tags => "tags",
        }
    }
}

/// An error shown next to a single field. Always user-correctable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Required")]
    Required,

    #[error("Must be at most {max} characters")]
    TooLong { max: u64 },

    #[error("Titles need at least one letter or number")]
    NoSlugCharacters,

    #[error("Titles must be unique, please try being more specific")]
    TitleTaken,

    #[error("Could not check whether this title is available, please try again")]
    TitleUnverified,
}

/// Per-field errors of one validation pass. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FormField, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FormField, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn remove(&mut self, field: FormField) -> Option<FieldError> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: FormField) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.0
                .iter()
                .map(|(field, error)| (field.as_str(), error.to_string())),
        )
    }
}

/// Synchronous checks for every research field. Title uniqueness is checked
/// separately because it needs the store.
pub fn check_research_fields(values: &ResearchFormInput) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if let Err(failed) = values.validate() {
        let lengths = failed.field_errors();
        if lengths.contains_key("title") {
            errors.insert(FormField::Title, FieldError::TooLong { max: MAX_TITLE_LEN });
        }
        if lengths.contains_key("description") {
            errors.insert(
                FormField::Description,
                FieldError::TooLong {
                    max: MAX_DESCRIPTION_LEN,
                },
            );
        }
    }

    if let Some(error) = check_title(&values.title) {
        errors.insert(FormField::Title, error);
    }
    if values.description.trim().is_empty() {
        errors.insert(FormField::Description, FieldError::Required);
    }

    errors
}

/// Synchronous part of title validation.
pub fn check_title(title: &str) -> Option<FieldError> {
    if title.trim().is_empty() {
        return Some(FieldError::Required);
    }
    if title.chars().count() as u64 > MAX_TITLE_LEN {
        return Some(FieldError::TooLong { max: MAX_TITLE_LEN });
    }
    // The slug addresses the post and needs something besides hyphens.
    if !slugify(title).chars().any(char::is_alphanumeric) {
        return Some(FieldError::NoSlugCharacters);
    }
    None
}

/// Tags are unordered: two selections are equal when they hold the same tags.
pub fn tags_equal(a: &[String], b: &[String]) -> bool {
    let a: BTreeSet<&str> = a.iter().map(String::as_str).collect();
    let b: BTreeSet<&str> = b.iter().map(String::as_str).collect();
    a == b
}

/// Whether `current` holds user edits relative to `baseline`. The derived
/// slug and the moderation value are not user-edited fields.
pub fn is_dirty(baseline: &ResearchFormInput, current: &ResearchFormInput) -> bool {
    baseline.title != current.title
        || baseline.description != current.description
        || !tags_equal(&baseline.tags, &current.tags)
}
