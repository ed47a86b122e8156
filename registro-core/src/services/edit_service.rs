//! 编辑模式服务

use std::cell::RefCell;
use std::rc::Rc;

use crate::services::PageContext;
use crate::types::{ApiOutcome, Banner, EditMode, RecordId, Registration};

/// Owns the edit mode and moves the form in and out of it
pub struct EditService {
    ctx: Rc<PageContext>,
    mode: RefCell<EditMode>,
}

impl EditService {
    #[must_use]
    pub fn new(ctx: Rc<PageContext>) -> Self {
        Self {
            ctx,
            mode: RefCell::new(EditMode::Idle),
        }
    }

    pub fn mode(&self) -> EditMode {
        self.mode.borrow().clone()
    }

    /// Id of the record being edited, if any
    pub fn editing_id(&self) -> Option<RecordId> {
        self.mode.borrow().editing_id().cloned()
    }

    /// Load `record` into the form and switch to editing it.
    ///
    /// Selecting another record while already editing simply retargets the
    /// form; the previous selection is dropped.
    pub fn begin(&self, record: &Registration) {
        let form = &self.ctx.form;
        for (name, value) in record.field_values() {
            form.set_field(name, value);
        }
        *self.mode.borrow_mut() = EditMode::Editing(record.id.clone());
        form.set_submit_label(self.ctx.texts.form.submit_save);
        form.focus_first();
        log::debug!("Editing registration {}", record.id);
    }

    /// Fetch the record with `id` and begin editing it.
    ///
    /// On failure a banner is shown and the mode is left as it was.
    pub async fn begin_by_id(&self, id: &RecordId) {
        let result = self.ctx.api.fetch_registration(id).await;
        let texts = &self.ctx.texts.form;
        match ApiOutcome::classify(result, "Fetch registration") {
            ApiOutcome::Success(record) => self.begin(&record),
            ApiOutcome::Reported(message) => {
                let text = message.unwrap_or_else(|| texts.network_error.to_string());
                self.ctx.notifier.show_banner(&Banner::failure(text));
            }
            ApiOutcome::Transport => {
                self.ctx
                    .notifier
                    .show_banner(&Banner::failure(texts.network_error));
            }
        }
    }

    /// Return to `Idle` and restore the register label.
    pub fn finish(&self) {
        *self.mode.borrow_mut() = EditMode::Idle;
        self.ctx
            .form
            .set_submit_label(self.ctx.texts.form.submit_register);
    }
}
