//! 记录列表加载服务

use std::cell::RefCell;
use std::rc::Rc;

use crate::services::list_renderer::{render_list, render_status, StatusTone};
use crate::services::PageContext;
use crate::types::{ApiOutcome, RecordId, Registration};

/// Loads the record collection and renders it
pub struct ListService {
    ctx: Rc<PageContext>,
    /// Records of the last successful render, for row actions
    records: RefCell<Vec<Registration>>,
}

impl ListService {
    #[must_use]
    pub fn new(ctx: Rc<PageContext>) -> Self {
        Self {
            ctx,
            records: RefCell::new(Vec::new()),
        }
    }

    /// Fetch the full collection and replace the list with it.
    ///
    /// One attempt. Overlapping reloads are not coordinated; whichever
    /// response arrives last is what stays on screen.
    pub async fn reload(&self) {
        let texts = self.ctx.texts;
        self.ctx
            .list
            .set_html(&render_status(texts.list.loading, StatusTone::Muted));

        let result = self.ctx.api.list_registrations().await;
        match ApiOutcome::classify(result, "List registrations") {
            ApiOutcome::Success(records) => self.show(records),
            ApiOutcome::Reported(message) => {
                let text = message.as_deref().unwrap_or(texts.list.load_failed);
                self.show_error(text);
            }
            ApiOutcome::Transport => self.show_error(texts.list.load_network_error),
        }
    }

    /// Render `records` and remember them for row actions.
    pub fn show(&self, records: Vec<Registration>) {
        let rendered = render_list(&records, self.ctx.texts);
        self.ctx.list.set_html(&rendered.html);
        self.ctx.count.set_text(&rendered.count_text);
        log::debug!("Rendered {} registrations", rendered.row_count);
        *self.records.borrow_mut() = records;
    }

    fn show_error(&self, text: &str) {
        self.ctx
            .list
            .set_html(&render_status(text, StatusTone::Error));
        self.records.borrow_mut().clear();
    }

    /// Record with `id` from the last successful render.
    pub fn record(&self, id: &RecordId) -> Option<Registration> {
        self.records.borrow().iter().find(|r| &r.id == id).cloned()
    }
}
