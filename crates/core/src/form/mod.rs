//! Research form workflow: field checks, leave-page guard, and submission.

pub mod fields;
pub mod unload;
pub mod workflow;

pub use fields::{FieldError, FieldErrors, FormField};
pub use unload::{NoopUnloadHandler, UnloadGuard, UnloadHandler, CONFIRM_DIALOG_MSG};
pub use workflow::{FormMode, FormSnapshot, ResearchForm};
