//! 表单提交服务

use std::rc::Rc;

use crate::services::{EditService, ListService, PageContext};
use crate::types::{ApiOutcome, Banner};

/// Handles a form submission: create or update depending on the edit mode
pub struct SubmissionService {
    ctx: Rc<PageContext>,
    edit: Rc<EditService>,
    list: Rc<ListService>,
}

impl SubmissionService {
    #[must_use]
    pub fn new(ctx: Rc<PageContext>, edit: Rc<EditService>, list: Rc<ListService>) -> Self {
        Self { ctx, edit, list }
    }

    /// Submit the current form contents.
    ///
    /// The target (create or update) is fixed when the submission starts.
    /// Leaving edit mode afterwards depends on the mode at completion time.
    pub async fn submit(&self) {
        let notifier = &self.ctx.notifier;
        let texts = &self.ctx.texts.form;
        notifier.clear_banner();

        let fields = self.ctx.form.field_values();
        let target = self.edit.editing_id();

        let result = match &target {
            Some(id) => {
                log::info!("Updating registration {id}");
                self.ctx.api.update_registration(id, &fields).await
            }
            None => {
                log::info!("Creating registration");
                self.ctx.api.create_registration(&fields).await
            }
        };

        match ApiOutcome::classify(result, "Submit registration") {
            ApiOutcome::Success(ack) => {
                let text = ack
                    .message
                    .unwrap_or_else(|| texts.response_received.to_string());
                notifier.show_banner(&Banner::success(text));

                self.ctx.form.reset();
                self.ctx.form.focus_first();
                if self.edit.mode().is_editing() {
                    self.edit.finish();
                }
                self.list.reload().await;
            }
            ApiOutcome::Reported(message) => {
                let text = message.unwrap_or_else(|| texts.response_received.to_string());
                notifier.show_banner(&Banner::failure(text));
            }
            ApiOutcome::Transport => {
                notifier.show_banner(&Banner::failure(texts.network_error));
            }
        }
    }
}
