//! Mobile navigation wiring: one open trigger, four close triggers, all
//! funneled through the core state machine.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;

use pagewire::nav::{transition, CloseReason, NavEffect, NavEvent, NavState};

use super::dom::{self, PageContext};
use crate::page_model::{class, select};

pub(super) fn init(ctx: &PageContext) {
    let (Some(nav), Some(overlay), Some(toggle)) = (
        ctx.nav.clone(),
        ctx.nav_overlay.clone(),
        ctx.mobile_toggle.clone(),
    ) else {
        return;
    };

    let state = Cell::new(NavState::Closed);

    let apply = {
        let nav = nav.clone();
        let overlay = overlay.clone();
        let body = ctx.document.body();
        move |effects: Vec<NavEffect>| {
            for effect in effects {
                match effect {
                    NavEffect::ShowMenu => {
                        dom::add_class(&nav, class::ACTIVE);
                        dom::add_class(&overlay, class::ACTIVE);
                    }
                    NavEffect::HideMenu => {
                        dom::remove_class(&nav, class::ACTIVE);
                        dom::remove_class(&overlay, class::ACTIVE);
                    }
                    NavEffect::LockScroll => {
                        if let Some(body) = &body {
                            dom::set_style(body, "overflow", "hidden");
                        }
                    }
                    NavEffect::UnlockScroll => {
                        if let Some(body) = &body {
                            dom::clear_style(body, "overflow");
                        }
                    }
                }
            }
        }
    };

    let dispatch = Rc::new(move |event: NavEvent| {
        let (next, effects) = transition(state.get(), event);
        state.set(next);
        apply(effects);
    });

    {
        let dispatch = Rc::clone(&dispatch);
        dom::listen(&toggle, "click", move |_| dispatch(NavEvent::OpenRequested));
    }

    if let Some(close) = ctx.nav_close.clone() {
        let dispatch = Rc::clone(&dispatch);
        dom::listen(&close, "click", move |_| {
            dispatch(NavEvent::CloseRequested(CloseReason::CloseControl));
        });
    }

    {
        let dispatch = Rc::clone(&dispatch);
        dom::listen(&overlay, "click", move |_| {
            dispatch(NavEvent::CloseRequested(CloseReason::Backdrop));
        });
    }

    for link in dom::query_all_in(&nav, select::NAV_LINKS) {
        let dispatch = Rc::clone(&dispatch);
        dom::listen(&link, "click", move |_| {
            dispatch(NavEvent::CloseRequested(CloseReason::LinkFollowed));
        });
    }

    {
        let dispatch = Rc::clone(&dispatch);
        dom::listen(&ctx.document, "keydown", move |event| {
            let Ok(key_event) = event.dyn_into::<web_sys::KeyboardEvent>() else {
                return;
            };
            if key_event.key() == "Escape" {
                dispatch(NavEvent::CloseRequested(CloseReason::EscapeKey));
            }
        });
    }
}
