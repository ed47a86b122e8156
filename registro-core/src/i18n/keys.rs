//! 翻译键定义
//!
//! Texts are grouped by the page region they appear in:
//! `form.*` for the registration form and its banner, `list.*` for the record
//! list and count indicator, `delete.*` for the delete dialogs.

/// 所有翻译文本的根结构
pub struct Translations {
    /// Registration form and result banner
    pub form: FormTexts,
    /// Record list and count indicator
    pub list: ListTexts,
    /// Delete confirmation and alerts
    pub delete: DeleteTexts,
}

/// Registration form texts
pub struct FormTexts {
    /// Submit label while idle
    pub submit_register: &'static str,
    /// Submit label while editing a record
    pub submit_save: &'static str,
    /// Banner text when the server sends no message
    pub response_received: &'static str,
    /// Banner text for any transport failure
    pub network_error: &'static str,
}

/// Record list texts
pub struct ListTexts {
    pub loading: &'static str,
    pub empty: &'static str,
    /// Appended to the record count, e.g. "3 registrados"
    pub count_suffix: &'static str,
    /// Shown when a failed load carries no server message
    pub load_failed: &'static str,
    pub load_network_error: &'static str,
    pub course_label: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
}

/// Delete flow texts
pub struct DeleteTexts {
    pub confirm: &'static str,
    /// Alert text when a failed delete carries no server message
    pub failed: &'static str,
    pub network_error: &'static str,
}
