//! Page bootstrap

use std::rc::Rc;

use log::LevelFilter;
use registro_api::{ClientConfig, HttpRegistrationApi};
use registro_core::{CoreError, CoreResult, PageContext, RegistrationPage};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, DocumentReadyState, Window};

use crate::adapters::{dom_error, DomCountIndicator, DomForm, DomListContainer, DomNotifier};
use crate::config::{document_lang, read_page_config};
use crate::{events, logger};

/// Module entry point: mount now, or once the document has been parsed.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logger::init(LevelFilter::Info);

    let Some(window) = web_sys::window() else {
        log::error!("No window; not running in a browser page");
        return;
    };
    let Some(document) = window.document() else {
        log::error!("Window has no document");
        return;
    };

    if document.ready_state() == DocumentReadyState::Loading {
        let (win, doc) = (window.clone(), document.clone());
        if let Err(e) = events::listen(&document, "DOMContentLoaded", move |_| mount(&win, &doc)) {
            log::error!("Waiting for DOMContentLoaded failed: {e}");
        }
    } else {
        mount(&window, &document);
    }
}

fn mount(window: &Window, document: &Document) {
    match try_mount(window, document) {
        Ok(()) => log::info!("Registration page mounted"),
        Err(e) if e.is_expected() => log::warn!("Registration page not mounted: {e}"),
        Err(e) => log::error!("Registration page not mounted: {e}"),
    }
}

fn try_mount(window: &Window, document: &Document) -> CoreResult<()> {
    let config = read_page_config(document);
    log::set_max_level(config.level_filter());

    let language = config.resolve_language(document_lang(document).as_deref());
    log::debug!("UI language: {}", language.code());

    let form_element = document
        .get_element_by_id(&config.form_id)
        .ok_or_else(|| CoreError::MissingElement(config.form_id.clone()))?;
    let list_element = document.get_element_by_id(&config.list_id);
    if list_element.is_none() {
        log::warn!("No #{} on the page; the list will not be shown", config.list_id);
    }

    let base_url = match &config.api_base_url {
        Some(url) => url.clone(),
        None => window.location().origin().map_err(dom_error)?,
    };
    let api = Rc::new(HttpRegistrationApi::new(&ClientConfig::new(base_url))?);

    let ctx = PageContext::new(
        api,
        Rc::new(DomListContainer::new(list_element.clone())),
        Rc::new(DomCountIndicator::new(
            document.get_element_by_id(&config.count_id),
        )),
        Rc::new(DomForm::new(form_element.clone())?),
        Rc::new(DomNotifier::new(
            window.clone(),
            document.clone(),
            &form_element,
        )?),
        language.texts(),
    );
    let page = Rc::new(RegistrationPage::new(ctx));

    events::bind_submit(&form_element, &page)?;
    if let Some(list_element) = &list_element {
        events::bind_row_actions(list_element, &page)?;
    }

    spawn_local(async move { page.start().await });
    Ok(())
}
