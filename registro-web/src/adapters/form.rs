//! Registration form backed by an `HtmlFormElement`

use registro_core::types::FieldMap;
use registro_core::{CoreError, CoreResult, RegistrationForm};
use wasm_bindgen::JsCast;
use web_sys::{
    Element, FormData, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

const FIRST_CONTROL: &str = "input, select, textarea";
const SUBMIT_BUTTON: &str = r#"button[type="submit"]"#;

pub struct DomForm {
    form: HtmlFormElement,
}

impl DomForm {
    pub fn new(element: Element) -> CoreResult<Self> {
        let form = element
            .dyn_into::<HtmlFormElement>()
            .map_err(|el| CoreError::Dom(format!("#{} is not a <form>", el.id())))?;
        Ok(Self { form })
    }

    fn query(&self, selector: &str) -> Option<Element> {
        self.form.query_selector(selector).ok().flatten()
    }
}

impl RegistrationForm for DomForm {
    /// Same shape as `Object.fromEntries(new FormData(form))`: a repeated name
    /// keeps its last value, file inputs are skipped.
    fn field_values(&self) -> FieldMap {
        let mut fields = FieldMap::new();
        let data = match FormData::new_with_form(&self.form) {
            Ok(data) => data,
            Err(e) => {
                log::error!("Reading form data failed: {e:?}");
                return fields;
            }
        };

        for entry in data.entries() {
            let Ok(entry) = entry else { continue };
            let pair = js_sys::Array::from(&entry);
            if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
                fields.insert(name, value);
            }
        }
        fields
    }

    fn set_field(&self, name: &str, value: &str) {
        let Some(control) = self.query(&format!(r#"[name="{name}"]"#)) else {
            log::warn!("Form has no field named {name}");
            return;
        };

        if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(select) = control.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        } else if let Some(area) = control.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        }
    }

    fn reset(&self) {
        self.form.reset();
    }

    fn focus_first(&self) {
        let Some(control) = self.query(FIRST_CONTROL) else {
            return;
        };
        if let Some(control) = control.dyn_ref::<HtmlElement>() {
            if let Err(e) = control.focus() {
                log::debug!("Focus failed: {e:?}");
            }
        }
    }

    fn set_submit_label(&self, label: &str) {
        match self.query(SUBMIT_BUTTON) {
            Some(button) => button.set_text_content(Some(label)),
            None => log::debug!("Form has no submit button"),
        }
    }
}
