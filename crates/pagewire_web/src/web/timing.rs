//! setTimeout bridges: a one-shot callback and a Future-shaped delay.

use js_sys::Promise;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Run `callback` once after `delay_ms`. Scheduling failures are swallowed.
pub(super) fn set_timeout(callback: impl FnOnce() + 'static, delay_ms: i32) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let cb = Closure::once_into_js(callback);
    let _ = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms);
}

/// Resolve after `delay_ms`, as a Future.
pub(super) async fn sleep(delay_ms: i32) {
    let promise = Promise::new(&mut |resolve, _reject| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, delay_ms);
    });
    let _ = JsFuture::from(promise).await;
}
