//! 业务逻辑服务层

mod delete_service;
mod edit_service;
mod list_renderer;
mod list_service;
mod submission_service;

pub use delete_service::DeleteService;
pub use edit_service::EditService;
pub use list_renderer::{
    render_list, render_status, RenderedList, RowAction, StatusTone, ACTION_ATTR, ID_ATTR,
};
pub use list_service::ListService;
pub use submission_service::SubmissionService;

use std::rc::Rc;

use crate::i18n::Translations;
use crate::traits::{CountIndicator, ListContainer, Notifier, RegistrationApi, RegistrationForm};

/// 页面上下文 - 持有所有依赖
///
/// The front-end resolves its element handles once and injects them here;
/// every service reaches the page only through this context.
pub struct PageContext {
    /// Registration API client
    pub api: Rc<dyn RegistrationApi>,
    /// List container
    pub list: Rc<dyn ListContainer>,
    /// Total-count element
    pub count: Rc<dyn CountIndicator>,
    /// Registration form
    pub form: Rc<dyn RegistrationForm>,
    /// Banner and dialogs
    pub notifier: Rc<dyn Notifier>,
    /// Texts of the active language
    pub texts: &'static Translations,
}

impl PageContext {
    /// 创建页面上下文
    #[must_use]
    pub fn new(
        api: Rc<dyn RegistrationApi>,
        list: Rc<dyn ListContainer>,
        count: Rc<dyn CountIndicator>,
        form: Rc<dyn RegistrationForm>,
        notifier: Rc<dyn Notifier>,
        texts: &'static Translations,
    ) -> Self {
        Self {
            api,
            list,
            count,
            form,
            notifier,
            texts,
        }
    }
}
