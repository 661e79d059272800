//! The wasm-only wiring layer.
//!
//! Every behavior lives in `pagewire` as a pure state machine; the modules
//! under here bind them to the live document and apply their effects. All
//! bindings degrade per element: a missing hook disables that one behavior
//! and nothing else.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use pagewire::tuning::Tuning;

mod anchors;
mod contact_form;
mod dom;
mod nav;
mod observe;
mod scroll_fx;
mod timing;

use dom::PageContext;

/// Wire every behavior to the live document. Called once from the Trunk
/// entrypoint.
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    // Trunk injects the bundle with defer semantics, but guard the
    // not-yet-parsed case the same way the page always has.
    if document.ready_state() == "loading" {
        let cb = Closure::wrap(Box::new(init_page) as Box<dyn FnMut()>);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref());
        cb.forget();
    } else {
        init_page();
    }
}

fn init_page() {
    let Some(ctx) = PageContext::bind() else {
        return;
    };
    let tuning = Tuning::default();

    contact_form::install_spinner_style(&ctx);
    nav::init(&ctx);
    scroll_fx::init_header(&ctx, &tuning);
    anchors::init_smooth_scroll(&ctx, &tuning);
    contact_form::init(&ctx, &tuning);
    scroll_fx::init_reveal(&ctx, &tuning);
    observe::init_service_cards(&ctx, &tuning);
    anchors::init_click_to_call(&ctx);
    observe::init_lazy_images(&ctx);

    web_sys::console::log_1(&"pagewire initialized".into());
}
