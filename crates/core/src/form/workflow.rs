//! Headless create/edit workflow for research posts.
//!
//! The form owns the edited values and the per-field errors, derives the slug
//! from the title, guards against leaving with unsaved changes, and submits
//! through the injected [`ContentStore`]. Hosts render from [`FormSnapshot`]s
//! received via [`ResearchForm::subscribe`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::form::fields::{
    check_research_fields, check_title, is_dirty, FieldError, FieldErrors, FormField,
};
use crate::form::unload::{UnloadGuard, UnloadHandler, CONFIRM_DIALOG_MSG};
use crate::models::{ContentCategory, ResearchFormInput};
use crate::moderation::{decide_moderation_status, Moderation, SubmitAction};
use crate::slug::slugify;
use crate::store::{ContentStore, UploadStatus};
use crate::types::DocId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    Create,
    Edit,
}

/// Everything a host needs to render the form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormSnapshot {
    pub values: ResearchFormInput,
    pub dirty: bool,
    pub errors: FieldErrors,
    pub submitting: bool,
    pub show_submit_status: bool,
    pub upload_status: UploadStatus,
}

pub struct ResearchForm {
    store: Arc<dyn ContentStore>,
    mode: FormMode,
    /// Id of the edited document; `None` until the store has assigned one.
    own_id: Option<DocId>,
    /// Moderation of the values the form was opened with.
    initial_moderation: Moderation,
    baseline: ResearchFormInput,
    values: ResearchFormInput,
    errors: FieldErrors,
    submitting: bool,
    show_submit_status: bool,
    upload_status: watch::Receiver<UploadStatus>,
    unload_guard: UnloadGuard,
    snapshots: watch::Sender<FormSnapshot>,
}

impl ResearchForm {
    /// Create a form seeded with `initial` (a template in create mode, the
    /// fetched document in edit mode).
    pub fn new(
        store: Arc<dyn ContentStore>,
        initial: ResearchFormInput,
        mode: FormMode,
        unload_handler: Arc<dyn UnloadHandler>,
    ) -> Self {
        let upload_status = store.upload_status();
        let own_id = match mode {
            FormMode::Edit => initial.id.clone(),
            FormMode::Create => None,
        };
        let snapshot = FormSnapshot {
            values: initial.clone(),
            dirty: false,
            errors: FieldErrors::new(),
            submitting: false,
            show_submit_status: false,
            upload_status: upload_status.borrow().clone(),
        };
        let (snapshots, _) = watch::channel(snapshot);

        let mut form = Self {
            store,
            mode,
            own_id,
            initial_moderation: initial.moderation,
            baseline: initial.clone(),
            values: initial,
            errors: FieldErrors::new(),
            submitting: false,
            show_submit_status: false,
            upload_status,
            unload_guard: UnloadGuard::new(unload_handler),
            snapshots,
        };
        form.refresh();
        form
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn values(&self) -> &ResearchFormInput {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_dirty(&self) -> bool {
        is_dirty(&self.baseline, &self.values)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_submit_status_visible(&self) -> bool {
        self.show_submit_status
    }

    pub fn upload_status(&self) -> UploadStatus {
        self.upload_status.borrow().clone()
    }

    pub fn is_unload_guard_engaged(&self) -> bool {
        self.unload_guard.is_engaged()
    }

    /// Receive a fresh snapshot after every state change.
    pub fn subscribe(&self) -> watch::Receiver<FormSnapshot> {
        self.snapshots.subscribe()
    }

    pub fn heading(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Start your Research",
            FormMode::Edit => "Edit your Research",
        }
    }

    pub fn draft_button_label(&self) -> &'static str {
        if self.mode == FormMode::Edit && self.initial_moderation == Moderation::Draft {
            "Revert to draft"
        } else {
            "Save to draft"
        }
    }

    // -- field bindings -----------------------------------------------------

    /// Update the title and recompute the slug from it.
    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        self.values.slug = slugify(&title);
        self.values.title = title;
        self.errors.remove(FormField::Title);
        self.refresh();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.values.description = description.into();
        self.errors.remove(FormField::Description);
        self.refresh();
    }

    pub fn set_tags(&mut self, tags: Vec<String>) {
        self.values.tags = tags;
        self.errors.remove(FormField::Tags);
        self.refresh();
    }

    // -- validation ---------------------------------------------------------

    /// Validate the title, including uniqueness among research posts. The
    /// edited document itself is excluded so it may keep its title.
    pub async fn validate_title(&self) -> Option<FieldError> {
        if let Some(error) = check_title(&self.values.title) {
            return Some(error);
        }

        match self
            .store
            .is_title_available(
                &self.values.title,
                ContentCategory::Research,
                self.own_id.as_deref(),
            )
            .await
        {
            Ok(true) => None,
            Ok(false) => Some(FieldError::TitleTaken),
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    title = %self.values.title,
                    "Title uniqueness check failed"
                );
                Some(FieldError::TitleUnverified)
            }
        }
    }

    /// Run every field check and record the errors. Returns `true` when the
    /// form may be submitted.
    pub async fn validate(&mut self) -> bool {
        let mut errors = check_research_fields(&self.values);
        if errors.get(FormField::Title).is_none() {
            if let Some(error) = self.validate_title().await {
                errors.insert(FormField::Title, error);
            }
        }
        self.errors = errors;
        self.refresh();
        self.errors.is_empty()
    }

    // -- submission ---------------------------------------------------------

    pub async fn save_draft(&mut self) -> Result<UploadStatus, FieldErrors> {
        self.submit(SubmitAction::Draft).await
    }

    pub async fn publish(&mut self) -> Result<UploadStatus, FieldErrors> {
        self.submit(SubmitAction::Publish).await
    }

    /// Validate, then upload with the moderation value chosen by `action`.
    ///
    /// Field errors block the upload and are returned. Upload failures are
    /// reported through the returned [`UploadStatus`].
    pub async fn submit(&mut self, action: SubmitAction) -> Result<UploadStatus, FieldErrors> {
        self.submitting = true;
        self.refresh();

        if !self.validate().await {
            self.submitting = false;
            self.refresh();
            return Err(self.errors.clone());
        }

        self.values.moderation = decide_moderation_status(action);
        self.show_submit_status = true;
        self.refresh();

        tracing::info!(
            slug = %self.values.slug,
            moderation = self.values.moderation.as_str(),
            "Submitting research"
        );
        let status = self.store.upload_research(self.values.clone()).await;
        self.submitting = false;

        if status.complete {
            if let Some(id) = &status.document_id {
                self.values.id = Some(id.clone());
                self.own_id = Some(id.clone());
            }
            self.baseline = self.values.clone();
        } else if let Some(error) = &status.error {
            tracing::warn!(error = %error, slug = %self.values.slug, "Research upload failed");
        }

        self.refresh();
        Ok(status)
    }

    /// Close the submission-status overlay and reset the store's status.
    pub fn dismiss_submit_status(&mut self) {
        self.show_submit_status = false;
        self.store.reset_upload_status();
        self.refresh();
    }

    // -- leave-page guard ---------------------------------------------------

    /// Confirmation message for in-app navigation, if leaving would lose
    /// edits.
    pub fn navigation_prompt(&self) -> Option<&'static str> {
        if self.is_dirty() && !self.upload_status.borrow().complete {
            Some(CONFIRM_DIALOG_MSG)
        } else {
            None
        }
    }

    /// Wait for the store's upload status to change, then re-evaluate the
    /// guard. Returns `false` once the store has gone away.
    pub async fn upload_status_changed(&mut self) -> bool {
        if self.upload_status.changed().await.is_err() {
            return false;
        }
        self.refresh();
        true
    }

    fn refresh(&mut self) {
        let complete = self.upload_status.borrow().complete;
        if self.is_dirty() && !complete {
            self.unload_guard.engage();
        } else {
            self.unload_guard.release();
        }
        self.snapshots.send_replace(self.snapshot());
    }

    fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            values: self.values.clone(),
            dirty: self.is_dirty(),
            errors: self.errors.clone(),
            submitting: self.submitting,
            show_submit_status: self.show_submit_status,
            upload_status: self.upload_status(),
        }
    }
}
