//! IntersectionObserver wiring: the service-card stagger and the lazy
//! image loader. Both fire at most once per element and unobserve it
//! afterwards.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use pagewire::tuning::Tuning;
use pagewire::viewport::{lazy_effect, stagger_delay_ms, OnceSet};

use super::dom::{self, PageContext};
use super::timing;
use crate::page_model::{class, select};

type ObserverCallback = dyn FnMut(Array, IntersectionObserver);

fn make_observer(
    callback: impl FnMut(Array, IntersectionObserver) + 'static,
) -> Option<IntersectionObserver> {
    let cb = Closure::wrap(Box::new(callback) as Box<ObserverCallback>);
    let observer = IntersectionObserver::new(cb.as_ref().unchecked_ref()).ok()?;
    cb.forget();
    Some(observer)
}

fn make_observer_with_threshold(
    callback: impl FnMut(Array, IntersectionObserver) + 'static,
    threshold: f64,
) -> Option<IntersectionObserver> {
    let cb = Closure::wrap(Box::new(callback) as Box<ObserverCallback>);
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options).ok()?;
    cb.forget();
    Some(observer)
}

/// Service cards start invisible and fade in staggered, each one delayed
/// by its position in the callback batch.
pub(super) fn init_service_cards(ctx: &PageContext, tuning: &Tuning) {
    let cards = dom::query_all(&ctx.document, select::SERVICE_CARDS);
    if cards.is_empty() {
        return;
    }

    // Seed the hidden state the fade-in animates away from.
    for card in &cards {
        if let Some(el) = card.dyn_ref::<web_sys::HtmlElement>() {
            dom::set_style(el, "opacity", "0");
            dom::set_style(el, "transform", "translateY(20px)");
            dom::set_style(el, "transition", "opacity 0.5s ease, transform 0.5s ease");
        }
    }

    let mut fired = OnceSet::new(cards.len());
    let step_ms = tuning.card_stagger_step_ms;
    let observed = cards.clone();

    let observer = make_observer_with_threshold(
        move |entries, observer| {
            for (position, entry) in entries.iter().enumerate() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let Some(index) = observed.iter().position(|card| *card == target) else {
                    continue;
                };
                if !fired.try_fire(index) {
                    continue;
                }
                observer.unobserve(&target);

                let delay = stagger_delay_ms(position, step_ms);
                let card = target;
                timing::set_timeout(
                    move || {
                        if let Some(el) = card.dyn_ref::<web_sys::HtmlElement>() {
                            dom::set_style(el, "opacity", "1");
                            dom::set_style(el, "transform", "translateY(0)");
                        }
                    },
                    delay as i32,
                );
            }
        },
        tuning.card_intersection_threshold,
    );

    if let Some(observer) = observer {
        for card in &cards {
            observer.observe(card);
        }
    }
}

/// Swap deferred image sources in on first sight and mark them loaded.
pub(super) fn init_lazy_images(ctx: &PageContext) {
    let images = dom::query_all(&ctx.document, select::LAZY_IMAGES);
    if images.is_empty() {
        return;
    }

    let mut fired = OnceSet::new(images.len());
    let observed = images.clone();

    let observer = make_observer(move |entries, observer| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if !entry.is_intersecting() {
                continue;
            }
            let target = entry.target();
            let Some(index) = observed.iter().position(|img| *img == target) else {
                continue;
            };
            if !fired.try_fire(index) {
                continue;
            }
            observer.unobserve(&target);

            let effect = lazy_effect(target.get_attribute("data-src").as_deref());
            if let Some(src) = effect.set_src {
                if let Some(img) = target.dyn_ref::<web_sys::HtmlImageElement>() {
                    img.set_src(&src);
                }
            }
            dom::add_class(&target, class::LOADED);
        }
    });

    if let Some(observer) = observer {
        for image in &images {
            observer.observe(image);
        }
    }
}
