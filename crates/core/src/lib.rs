//! Domain core of the community content platform.
//!
//! Holds the content models, slug derivation, moderation decisions, entity
//! templates, the headless research form and how-to page components, and the
//! [`store::ContentStore`] contract the document store clients implement.
//! This crate has no internal dependencies so both the API service and any
//! other host can use it.

pub mod error;
pub mod form;
pub mod models;
pub mod moderation;
pub mod page;
pub mod slug;
pub mod store;
pub mod templates;
pub mod types;

#[cfg(any(test, feature = "test-factories"))]
pub mod factories;

#[cfg(test)]
pub(crate) mod test_support;
