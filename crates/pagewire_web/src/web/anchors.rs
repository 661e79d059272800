//! Same-page smooth scrolling under the fixed header, plus the
//! click-to-call console trace.

use web_sys::{ScrollBehavior, ScrollToOptions};

use pagewire::anchor::{fragment, scroll_target_y};
use pagewire::tuning::Tuning;

use super::dom::{self, PageContext};
use crate::page_model::select;

pub(super) fn init_smooth_scroll(ctx: &PageContext, tuning: &Tuning) {
    for anchor in dom::query_all(&ctx.document, select::ANCHORS) {
        let window = ctx.window.clone();
        let document = ctx.document.clone();
        let header = ctx.header.clone();
        let link = anchor.clone();
        let gap = tuning.anchor_gap_px;

        dom::listen(&anchor, "click", move |event| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(id) = fragment(&href) else {
                return;
            };
            // A dangling fragment keeps its default behavior.
            let Some(target) = document.get_element_by_id(id) else {
                return;
            };
            event.prevent_default();

            let header_height = header
                .as_ref()
                .map(|h| f64::from(h.offset_height()))
                .unwrap_or(0.0);
            let page_y = window.page_y_offset().unwrap_or(0.0);
            let top = scroll_target_y(
                target.get_bounding_client_rect().top(),
                page_y,
                header_height,
                gap,
            );

            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        });
    }
}

/// Phone links navigate on their own; this only leaves a trace where an
/// analytics call would go.
pub(super) fn init_click_to_call(ctx: &PageContext) {
    for link in dom::query_all(&ctx.document, select::TEL_LINKS) {
        dom::listen(&link, "click", move |_| {
            web_sys::console::log_1(&"Phone call initiated".into());
        });
    }
}
