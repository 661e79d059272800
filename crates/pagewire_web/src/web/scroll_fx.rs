//! Header shadow and section reveal, driven by the scroll signal.

use std::cell::RefCell;
use std::rc::Rc;

use pagewire::tuning::Tuning;
use pagewire::viewport::{header_scrolled, RevealTracker};

use super::dom::{self, PageContext};
use crate::page_model::{class, select};

pub(super) fn init_header(ctx: &PageContext, tuning: &Tuning) {
    let Some(header) = ctx.header.clone() else {
        return;
    };
    let window = ctx.window.clone();
    let threshold = tuning.scrolled_threshold_px;

    dom::listen_passive(&ctx.window, "scroll", move |_| {
        let page_y = window.page_y_offset().unwrap_or(0.0);
        if header_scrolled(page_y, threshold) {
            dom::add_class(&header, class::SCROLLED);
        } else {
            dom::remove_class(&header, class::SCROLLED);
        }
    });
}

pub(super) fn init_reveal(ctx: &PageContext, tuning: &Tuning) {
    let elements = dom::query_all(&ctx.document, select::REVEAL);
    if elements.is_empty() {
        return;
    }

    let sweep = {
        let window = ctx.window.clone();
        let tracker = RefCell::new(RevealTracker::new(elements.len(), tuning.reveal_margin_px));
        Rc::new(move || {
            let viewport_height = window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            let mut tracker = tracker.borrow_mut();
            for (index, element) in elements.iter().enumerate() {
                let top = element.get_bounding_client_rect().top();
                if tracker.observe(index, top, viewport_height) {
                    dom::add_class(element, class::ACTIVE);
                }
            }
        })
    };

    // Sections already in view reveal on load, not on the first scroll.
    sweep();

    let on_scroll = Rc::clone(&sweep);
    dom::listen_passive(&ctx.window, "scroll", move |_| on_scroll());
}
