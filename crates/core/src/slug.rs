//! Title-to-slug derivation.
//!
//! Slugs are a pure function of the title: special characters are stripped,
//! spaces become hyphens, and the result is lowercased. Every title change in
//! a form recomputes the slug before submission.

/// Characters removed from titles before they are turned into slugs.
const SPECIAL_CHARACTERS: &[char] = &[
    '`', '~', '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '|', '+', '-', '=', '÷', '¿',
    '?', ';', ':', '\'', '"', ',', '.', '<', '>', '{', '}', '[', ']', '\\', '/',
];

/// Remove special characters and join the remaining space-separated words
/// with hyphens.
///
/// Each single space becomes one hyphen, so runs of spaces produce runs of
/// hyphens. Case is preserved.
pub fn strip_special_characters(text: &str) -> String {
    text.chars()
        .filter(|c| !SPECIAL_CHARACTERS.contains(c))
        .map(|c| if c == ' ' { '-' } else { c })
        .collect()
}

/// Derive the URL slug for a title.
pub fn slugify(title: &str) -> String {
    strip_special_characters(title).to_lowercase()
}
