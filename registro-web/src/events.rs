//! DOM event wiring
//!
//! Listeners live as long as the page, so their closures are leaked with
//! `Closure::forget`. Each handler only schedules the controller call with
//! `spawn_local`; nothing blocks the event loop.

use std::rc::Rc;

use registro_core::services::{ACTION_ATTR, ID_ATTR};
use registro_core::types::RecordId;
use registro_core::{CoreResult, RegistrationPage, RowAction};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, EventTarget};

use crate::adapters::dom_error;

/// Attach `handler` to `target` for the lifetime of the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> CoreResult<()> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(dom_error)?;
    closure.forget();
    Ok(())
}

/// Replace native form submission with the controller's submit.
pub fn bind_submit(form: &EventTarget, page: &Rc<RegistrationPage>) -> CoreResult<()> {
    let page = Rc::clone(page);
    listen(form, "submit", move |event| {
        event.prevent_default();
        let page = Rc::clone(&page);
        spawn_local(async move { page.submit().await });
    })
}

/// One delegated click listener on the list for every row's controls.
///
/// Rows are re-rendered on every load, so listening on the container keeps
/// working without rebinding.
pub fn bind_row_actions(list: &EventTarget, page: &Rc<RegistrationPage>) -> CoreResult<()> {
    let page = Rc::clone(page);
    listen(list, "click", move |event| {
        let Some((action, id)) = row_action(&event) else {
            return;
        };
        let page = Rc::clone(&page);
        spawn_local(async move { page.handle_row_action(action, &id).await });
    })
}

/// Action and record id of the row control the click landed in.
fn row_action(event: &Event) -> Option<(RowAction, RecordId)> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    control_action(&target)
}

/// Action and record id of the row control containing `element`.
fn control_action(element: &Element) -> Option<(RowAction, RecordId)> {
    let control = element.closest(&format!("[{ACTION_ATTR}]")).ok().flatten()?;
    let action = RowAction::parse(&control.get_attribute(ACTION_ATTR)?)?;
    let id = control.get_attribute(ID_ATTR)?;
    Some((action, RecordId::new(id)))
}
