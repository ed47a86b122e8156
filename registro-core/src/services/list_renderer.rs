//! Record list rendering
//!
//! Pure functions from records to markup. Every piece of record or server text
//! goes through [`escape_html`] before it is placed in the output.

use std::fmt::Write;

use crate::i18n::Translations;
use crate::types::Registration;
use crate::utils::escape_html;

/// Attribute naming the action of a row control
pub const ACTION_ATTR: &str = "data-action";
/// Attribute carrying the record id on a row and its controls
pub const ID_ATTR: &str = "data-id";

const ROW_CLASS: &str = "p-3 border rounded-lg flex items-center justify-between gap-4";
const EDIT_BUTTON_CLASS: &str =
    "px-3 py-1 rounded bg-yellow-100 text-yellow-800 text-sm hover:bg-yellow-200";
const DELETE_BUTTON_CLASS: &str =
    "px-3 py-1 rounded bg-red-100 text-red-800 text-sm hover:bg-red-200";

/// Action attached to a row control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
}

impl RowAction {
    /// Value of the [`ACTION_ATTR`] attribute
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Delete => "delete",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "edit" => Some(Self::Edit),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }
}

/// Colour of a single-line status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// Loading / empty placeholder
    Muted,
    Error,
}

/// Output of [`render_list`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedList {
    /// New contents of the list container
    pub html: String,
    /// New text of the count indicator
    pub count_text: String,
    /// Number of record rows in `html`
    pub row_count: usize,
}

/// Single-line status message (loading, empty, error) as markup.
pub fn render_status(text: &str, tone: StatusTone) -> String {
    let class = match tone {
        StatusTone::Muted => "text-sm text-gray-500",
        StatusTone::Error => "text-sm text-red-600",
    };
    format!(r#"<div class="{class}">{}</div>"#, escape_html(text))
}

/// Render `records` in the given order.
pub fn render_list(records: &[Registration], texts: &Translations) -> RenderedList {
    if records.is_empty() {
        return RenderedList {
            html: render_status(texts.list.empty, StatusTone::Muted),
            count_text: "0".to_string(),
            row_count: 0,
        };
    }

    let mut html = String::new();
    for record in records {
        render_row(&mut html, record, texts);
    }

    RenderedList {
        html,
        count_text: format!("{} {}", records.len(), texts.list.count_suffix),
        row_count: records.len(),
    }
}

fn render_row(out: &mut String, record: &Registration, texts: &Translations) {
    let id = escape_html(record.id.as_str());
    let phone = record.phone.as_deref().unwrap_or_default();

    // writing into a String cannot fail
    let _ = write!(
        out,
        concat!(
            r#"<div class="{row_class}" {id_attr}="{id}">"#,
            r#"<div class="min-w-0">"#,
            r#"<div class="font-semibold text-gray-900">{first} {last}</div>"#,
            r#"<div class="text-sm text-gray-600">{email} · {phone}</div>"#,
            r#"<div class="text-sm text-gray-500">{course_label}: {course}</div>"#,
            "</div>",
            r#"<div class="flex items-center gap-2">"#,
            r#"<button type="button" class="{edit_class}" {action_attr}="{edit}" {id_attr}="{id}">{edit_label}</button>"#,
            r#"<button type="button" class="{delete_class}" {action_attr}="{delete}" {id_attr}="{id}">{delete_label}</button>"#,
            "</div>",
            "</div>",
        ),
        row_class = ROW_CLASS,
        id_attr = ID_ATTR,
        action_attr = ACTION_ATTR,
        id = id,
        first = escape_html(&record.first_name),
        last = escape_html(&record.last_name),
        email = escape_html(&record.email),
        phone = escape_html(phone),
        course_label = escape_html(texts.list.course_label),
        course = escape_html(&record.course),
        edit_class = EDIT_BUTTON_CLASS,
        delete_class = DELETE_BUTTON_CLASS,
        edit = RowAction::Edit.as_str(),
        delete = RowAction::Delete.as_str(),
        edit_label = escape_html(texts.list.edit),
        delete_label = escape_html(texts.list.delete),
    );
}
