//! Element lookup and the page context handed to every initializer.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, NodeList, Window};

use crate::page_model::hook;

/// Everything the initializers need from the page, bound once at startup.
///
/// Each hook element is optional on purpose. A page variant without, say,
/// the contact form simply never gets that behavior wired.
pub(super) struct PageContext {
    pub(super) window: Window,
    pub(super) document: Document,
    pub(super) header: Option<HtmlElement>,
    pub(super) nav: Option<Element>,
    pub(super) nav_overlay: Option<Element>,
    pub(super) mobile_toggle: Option<Element>,
    pub(super) nav_close: Option<Element>,
    pub(super) contact_form: Option<web_sys::HtmlFormElement>,
    pub(super) form_success: Option<HtmlElement>,
    pub(super) form_error: Option<HtmlElement>,
}

impl PageContext {
    pub(super) fn bind() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;

        let header = typed_by_id(&document, hook::HEADER);
        let nav = document.get_element_by_id(hook::NAV);
        let nav_overlay = document.get_element_by_id(hook::NAV_OVERLAY);
        let mobile_toggle = document.get_element_by_id(hook::MOBILE_TOGGLE);
        let nav_close = document.get_element_by_id(hook::NAV_CLOSE);
        let contact_form = typed_by_id(&document, hook::CONTACT_FORM);
        let form_success = typed_by_id(&document, hook::FORM_SUCCESS);
        let form_error = typed_by_id(&document, hook::FORM_ERROR);

        Some(Self {
            window,
            document,
            header,
            nav,
            nav_overlay,
            mobile_toggle,
            nav_close,
            contact_form,
            form_success,
            form_error,
        })
    }
}

fn typed_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// Collect a document-wide selector match into a Vec the behaviors can
/// index.
pub(super) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => nodes_to_elements(list),
        Err(_) => Vec::new(),
    }
}

/// Like [`query_all`], scoped under one element.
pub(super) fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(list) => nodes_to_elements(list),
        Err(_) => Vec::new(),
    }
}

fn nodes_to_elements(list: NodeList) -> Vec<Element> {
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(el) = list.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            out.push(el);
        }
    }
    out
}

pub(super) fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

pub(super) fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

pub(super) fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

pub(super) fn clear_style(el: &HtmlElement, property: &str) {
    let _ = el.style().remove_property(property);
}

/// Attach a listener for the life of the page. These bindings are installed
/// once at startup and never torn down, so the closure is leaked.
pub(super) fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    let _ = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
    cb.forget();
}

/// Like [`listen`] but passive, for scroll-frequency events.
pub(super) fn listen_passive(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    let options = web_sys::AddEventListenerOptions::new();
    options.set_passive(true);
    let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.as_ref().unchecked_ref(),
        &options,
    );
    cb.forget();
}
