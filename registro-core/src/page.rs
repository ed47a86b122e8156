//! Registration page controller
//!
//! Wires the services together and is the single entry point a front-end
//! drives: call [`RegistrationPage::start`] once, then forward form submits and
//! row clicks.

use std::rc::Rc;

use crate::services::{
    DeleteService, EditService, ListService, PageContext, RowAction, SubmissionService,
};
use crate::types::{EditMode, RecordId};

/// The page's controllers sharing one [`PageContext`]
pub struct RegistrationPage {
    list: Rc<ListService>,
    edit: Rc<EditService>,
    submission: SubmissionService,
    delete: DeleteService,
}

impl RegistrationPage {
    #[must_use]
    pub fn new(ctx: PageContext) -> Self {
        let ctx = Rc::new(ctx);
        let list = Rc::new(ListService::new(Rc::clone(&ctx)));
        let edit = Rc::new(EditService::new(Rc::clone(&ctx)));
        let submission =
            SubmissionService::new(Rc::clone(&ctx), Rc::clone(&edit), Rc::clone(&list));
        let delete = DeleteService::new(ctx, Rc::clone(&list));

        Self {
            list,
            edit,
            submission,
            delete,
        }
    }

    /// First list load. The submit label is left as the markup has it until
    /// the form enters edit mode.
    pub async fn start(&self) {
        self.list.reload().await;
    }

    pub async fn reload(&self) {
        self.list.reload().await;
    }

    pub fn edit_mode(&self) -> EditMode {
        self.edit.mode()
    }

    /// Edit the row with `id`.
    ///
    /// Uses the record from the last render; only a row that is no longer
    /// known is fetched from the server.
    pub async fn edit_record(&self, id: &RecordId) {
        match self.list.record(id) {
            Some(record) => self.edit.begin(&record),
            None => self.edit.begin_by_id(id).await,
        }
    }

    /// Fetch the record with `id` and enter edit mode for it.
    pub async fn begin_edit_by_id(&self, id: &RecordId) {
        self.edit.begin_by_id(id).await;
    }

    pub async fn submit(&self) {
        self.submission.submit().await;
    }

    pub async fn delete(&self, id: &RecordId) {
        self.delete.delete(id).await;
    }

    /// Dispatch a click on a row control.
    pub async fn handle_row_action(&self, action: RowAction, id: &RecordId) {
        match action {
            RowAction::Edit => self.edit_record(id).await,
            RowAction::Delete => self.delete(id).await,
        }
    }
}
