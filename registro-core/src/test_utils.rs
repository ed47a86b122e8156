//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use registro_api::{ApiError, FIELD_NAMES};

use crate::i18n::Language;
use crate::page::RegistrationPage;
use crate::services::PageContext;
use crate::traits::{CountIndicator, ListContainer, Notifier, RegistrationApi, RegistrationForm};
use crate::types::{Acknowledgement, Banner, FieldMap, RecordId, Registration};

/// Record with fixed last name and an email derived from `first_name`.
pub fn record(id: &str, first_name: &str, course: &str) -> Registration {
    Registration {
        id: RecordId::new(id),
        first_name: first_name.to_string(),
        last_name: "Ruiz".to_string(),
        email: format!("{}@x.com", first_name.to_lowercase()),
        phone: None,
        course: course.to_string(),
        created_at: None,
    }
}

// ===== MockApi =====

/// One recorded API call; ids are kept as plain strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    List,
    Fetch(String),
    Create(FieldMap),
    Update(String, FieldMap),
    Delete(String),
}

pub struct MockApi {
    calls: RefCell<Vec<ApiCall>>,
    list: RefCell<registro_api::Result<Vec<Registration>>>,
    fetch: RefCell<registro_api::Result<Registration>>,
    /// Result of both create and update
    write: RefCell<registro_api::Result<Acknowledgement>>,
    delete: RefCell<registro_api::Result<Acknowledgement>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            list: RefCell::new(Ok(Vec::new())),
            fetch: RefCell::new(Err(ApiError::Rejected {
                message: None,
                http_status: 404,
            })),
            write: RefCell::new(Ok(Acknowledgement::default())),
            delete: RefCell::new(Ok(Acknowledgement::default())),
        }
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    pub fn set_list(&self, result: registro_api::Result<Vec<Registration>>) {
        *self.list.borrow_mut() = result;
    }

    pub fn set_fetch(&self, result: registro_api::Result<Registration>) {
        *self.fetch.borrow_mut() = result;
    }

    pub fn set_write(&self, result: registro_api::Result<Acknowledgement>) {
        *self.write.borrow_mut() = result;
    }

    pub fn set_delete(&self, result: registro_api::Result<Acknowledgement>) {
        *self.delete.borrow_mut() = result;
    }

    fn record_call(&self, call: ApiCall) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl RegistrationApi for MockApi {
    async fn list_registrations(&self) -> registro_api::Result<Vec<Registration>> {
        self.record_call(ApiCall::List);
        self.list.borrow().clone()
    }

    async fn fetch_registration(&self, id: &RecordId) -> registro_api::Result<Registration> {
        self.record_call(ApiCall::Fetch(id.to_string()));
        self.fetch.borrow().clone()
    }

    async fn create_registration(
        &self,
        fields: &FieldMap,
    ) -> registro_api::Result<Acknowledgement> {
        self.record_call(ApiCall::Create(fields.clone()));
        self.write.borrow().clone()
    }

    async fn update_registration(
        &self,
        id: &RecordId,
        fields: &FieldMap,
    ) -> registro_api::Result<Acknowledgement> {
        self.record_call(ApiCall::Update(id.to_string(), fields.clone()));
        self.write.borrow().clone()
    }

    async fn delete_registration(&self, id: &RecordId) -> registro_api::Result<Acknowledgement> {
        self.record_call(ApiCall::Delete(id.to_string()));
        self.delete.borrow().clone()
    }
}

// ===== Page element mocks =====

#[derive(Default)]
pub struct MockList {
    history: RefCell<Vec<String>>,
}

impl MockList {
    /// Current contents
    pub fn html(&self) -> String {
        self.history.borrow().last().cloned().unwrap_or_default()
    }

    /// Every value ever set, oldest first
    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }
}

impl ListContainer for MockList {
    fn set_html(&self, html: &str) {
        self.history.borrow_mut().push(html.to_string());
    }
}

#[derive(Default)]
pub struct MockCount {
    text: RefCell<String>,
}

impl MockCount {
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }
}

impl CountIndicator for MockCount {
    fn set_text(&self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
    }
}

pub struct MockForm {
    fields: RefCell<FieldMap>,
    label: RefCell<String>,
    resets: Cell<usize>,
    focuses: Cell<usize>,
}

impl MockForm {
    /// A form with the five registration fields, all empty.
    pub fn new() -> Self {
        Self {
            fields: RefCell::new(FIELD_NAMES.iter().map(|name| (*name, "")).collect()),
            label: RefCell::new(String::new()),
            resets: Cell::new(0),
            focuses: Cell::new(0),
        }
    }

    pub fn field(&self, name: &str) -> Option<String> {
        self.fields.borrow().get(name).map(str::to_string)
    }

    /// Simulate the user typing into a field.
    pub fn set_field_value(&self, name: &str, value: &str) {
        self.fields.borrow_mut().insert(name, value);
    }

    /// Simulate a form without named fields.
    pub fn clear_fields(&self) {
        *self.fields.borrow_mut() = FieldMap::new();
    }

    pub fn label(&self) -> String {
        self.label.borrow().clone()
    }

    pub fn reset_count(&self) -> usize {
        self.resets.get()
    }

    pub fn focus_count(&self) -> usize {
        self.focuses.get()
    }
}

impl RegistrationForm for MockForm {
    fn field_values(&self) -> FieldMap {
        self.fields.borrow().clone()
    }

    fn set_field(&self, name: &str, value: &str) {
        self.fields.borrow_mut().insert(name, value);
    }

    fn reset(&self) {
        let mut fields = self.fields.borrow_mut();
        let names: Vec<String> = fields.iter().map(|(name, _)| name.to_string()).collect();
        *fields = names.into_iter().map(|name| (name, String::new())).collect();
        self.resets.set(self.resets.get() + 1);
    }

    fn focus_first(&self) {
        self.focuses.set(self.focuses.get() + 1);
    }

    fn set_submit_label(&self, label: &str) {
        *self.label.borrow_mut() = label.to_string();
    }
}

pub struct MockNotifier {
    current: RefCell<Option<Banner>>,
    banners: RefCell<Vec<Banner>>,
    clears: Cell<usize>,
    alerts: RefCell<Vec<String>>,
    confirms: RefCell<Vec<String>>,
    confirm_answer: Cell<bool>,
}

impl MockNotifier {
    /// Accepts every confirmation until told otherwise.
    pub fn new() -> Self {
        Self {
            current: RefCell::new(None),
            banners: RefCell::new(Vec::new()),
            clears: Cell::new(0),
            alerts: RefCell::new(Vec::new()),
            confirms: RefCell::new(Vec::new()),
            confirm_answer: Cell::new(true),
        }
    }

    pub fn set_confirm(&self, answer: bool) {
        self.confirm_answer.set(answer);
    }

    /// Every banner shown, oldest first
    pub fn banners(&self) -> Vec<Banner> {
        self.banners.borrow().clone()
    }

    pub fn current_banner(&self) -> Option<Banner> {
        self.current.borrow().clone()
    }

    pub fn clear_count(&self) -> usize {
        self.clears.get()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.borrow().clone()
    }
}

impl Notifier for MockNotifier {
    fn show_banner(&self, banner: &Banner) {
        *self.current.borrow_mut() = Some(banner.clone());
        self.banners.borrow_mut().push(banner.clone());
    }

    fn clear_banner(&self) {
        *self.current.borrow_mut() = None;
        self.clears.set(self.clears.get() + 1);
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.confirm_answer.get()
    }
}

// ===== 测试工厂 =====

/// Handles to the mocks behind a test context
pub struct TestMocks {
    pub api: Rc<MockApi>,
    pub list: Rc<MockList>,
    pub count: Rc<MockCount>,
    pub form: Rc<MockForm>,
    pub notifier: Rc<MockNotifier>,
}

fn build_context() -> (PageContext, TestMocks) {
    let mocks = TestMocks {
        api: Rc::new(MockApi::new()),
        list: Rc::new(MockList::default()),
        count: Rc::new(MockCount::default()),
        form: Rc::new(MockForm::new()),
        notifier: Rc::new(MockNotifier::new()),
    };
    let ctx = PageContext::new(
        mocks.api.clone(),
        mocks.list.clone(),
        mocks.count.clone(),
        mocks.form.clone(),
        mocks.notifier.clone(),
        Language::EsEs.texts(),
    );
    (ctx, mocks)
}

/// 创建测试用的 `PageContext`（Spanish texts）
pub fn create_test_context() -> (Rc<PageContext>, TestMocks) {
    let (ctx, mocks) = build_context();
    (Rc::new(ctx), mocks)
}

/// 创建测试用的 `RegistrationPage`
pub fn create_test_page() -> (RegistrationPage, TestMocks) {
    let (ctx, mocks) = build_context();
    (RegistrationPage::new(ctx), mocks)
}
