//! 记录删除服务

use std::rc::Rc;

use crate::services::{ListService, PageContext};
use crate::types::{ApiOutcome, RecordId};

/// Confirms and deletes a record, then reloads the list
pub struct DeleteService {
    ctx: Rc<PageContext>,
    list: Rc<ListService>,
}

impl DeleteService {
    #[must_use]
    pub fn new(ctx: Rc<PageContext>, list: Rc<ListService>) -> Self {
        Self { ctx, list }
    }

    /// Ask for confirmation, then delete the record with `id`.
    ///
    /// Failures go to a blocking alert, not the form banner. The edit mode
    /// is never touched, even when `id` is the record being edited.
    pub async fn delete(&self, id: &RecordId) {
        let notifier = &self.ctx.notifier;
        let texts = &self.ctx.texts.delete;

        if !notifier.confirm(texts.confirm) {
            log::debug!("Delete of {id} declined");
            return;
        }

        let result = self.ctx.api.delete_registration(id).await;
        match ApiOutcome::classify(result, "Delete registration") {
            ApiOutcome::Success(ack) => {
                log::info!("Deleted registration {id}");
                if let Some(message) = ack.message {
                    log::debug!("Server: {message}");
                }
                self.list.reload().await;
            }
            ApiOutcome::Reported(message) => {
                notifier.alert(message.as_deref().unwrap_or(texts.failed));
            }
            ApiOutcome::Transport => notifier.alert(texts.network_error),
        }
    }
}
