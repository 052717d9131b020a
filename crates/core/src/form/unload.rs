//! Leave-page interception while a form holds unsaved changes.

use std::sync::Arc;

/// Message shown when leaving a page with unsaved changes.
pub const CONFIRM_DIALOG_MSG: &str =
    "You have unsaved changes. Are you sure you want to leave this page?";

/// Host hook that blocks page unloads (a browser `beforeunload` listener, or
/// any equivalent in a non-browser host).
pub trait UnloadHandler: Send + Sync {
    fn register(&self, message: &'static str);
    fn unregister(&self);
}

/// Handler for hosts with no page to unload.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopUnloadHandler;

impl UnloadHandler for NoopUnloadHandler {
    fn register(&self, _message: &'static str) {}
    fn unregister(&self) {}
}

/// Scoped registration of an [`UnloadHandler`].
///
/// `engage` and `release` are idempotent; the handler sees at most one
/// `register` per `unregister`. Dropping the guard releases it.
pub struct UnloadGuard {
    handler: Arc<dyn UnloadHandler>,
    engaged: bool,
}

impl UnloadGuard {
    pub fn new(handler: Arc<dyn UnloadHandler>) -> Self {
        Self {
            handler,
            engaged: false,
        }
    }

    pub fn engage(&mut self) {
        if !self.engaged {
            self.handler.register(CONFIRM_DIALOG_MSG);
            self.engaged = true;
            tracing::debug!("Unload guard engaged");
        }
    }

    pub fn release(&mut self) {
        if self.engaged {
            self.handler.unregister();
            self.engaged = false;
            tracing::debug!("Unload guard released");
        }
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }
}

impl Drop for UnloadGuard {
    fn drop(&mut self) {
        self.release();
    }
}
