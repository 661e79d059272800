//! Contact form wiring: per-field affordances, the submit flow, and the
//! fixed-delay placeholder submitter.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

use pagewire::form::{verdict_on_blur, FieldAffordance, FieldSpec, Submission};
use pagewire::submit::{
    Ack, BeginOutcome, SubmissionFailure, SubmitController, SubmitEffect, Submitter,
};
use pagewire::tuning::Tuning;

use super::dom::{self, PageContext};
use super::timing;
use crate::page_model::{class, field_spec, select};

/// Placeholder send: wait the configured delay, report success. Swapping
/// this for a real endpoint client is the one integration point; the
/// controller and the wiring stay as they are.
struct DelaySubmitter {
    delay_ms: i32,
}

impl Submitter for DelaySubmitter {
    async fn submit(&self, _submission: &Submission) -> Result<Ack, SubmissionFailure> {
        timing::sleep(self.delay_ms).await;
        Ok(Ack)
    }
}

/// The busy label's spinner animation, injected once per page.
pub(super) fn install_spinner_style(ctx: &PageContext) {
    let Some(head) = ctx.document.head() else {
        return;
    };
    let Ok(style) = ctx.document.create_element("style") else {
        return;
    };
    style.set_text_content(Some(
        "@keyframes spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }\n\
         .spin { animation: spin 1s linear infinite; }",
    ));
    let _ = head.append_child(&style);
}

/// The form elements the submit effects touch, bound once at init.
struct FormDom {
    form: HtmlFormElement,
    submit_button: Option<HtmlButtonElement>,
    original_label: String,
    success: Option<HtmlElement>,
    error: Option<HtmlElement>,
}

fn apply_effect(parts: &FormDom, effect: &SubmitEffect) {
    match effect {
        SubmitEffect::HideStatusBanners => {
            if let Some(success) = &parts.success {
                dom::remove_class(success, class::SHOW);
            }
            if let Some(error) = &parts.error {
                dom::remove_class(error, class::SHOW);
            }
        }
        SubmitEffect::ShowError { html } => {
            if let Some(error) = &parts.error {
                error.set_inner_html(html);
                dom::add_class(error, class::SHOW);
            }
        }
        SubmitEffect::SetBusy { label_html } => {
            if let Some(button) = &parts.submit_button {
                button.set_inner_html(label_html);
                button.set_disabled(true);
            }
        }
        SubmitEffect::ShowSuccess => {
            if let Some(success) = &parts.success {
                dom::add_class(success, class::SHOW);
            }
        }
        SubmitEffect::ResetFields => {
            parts.form.reset();
        }
        SubmitEffect::FocusSuccess => {
            if let Some(success) = &parts.success {
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                options.set_block(web_sys::ScrollLogicalPosition::Center);
                success.scroll_into_view_with_scroll_into_view_options(&options);
                let _ = success.focus();
            }
        }
        SubmitEffect::RestoreSubmitControl => {
            if let Some(button) = &parts.submit_button {
                button.set_inner_html(&parts.original_label);
                button.set_disabled(false);
            }
        }
    }
}

fn apply_effects(parts: &FormDom, effects: &[SubmitEffect]) {
    for effect in effects {
        apply_effect(parts, effect);
    }
}

fn form_field(form: &HtmlFormElement, id: &str) -> Option<Element> {
    form.query_selector(&format!("#{id}")).ok().flatten()
}

fn element_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn field_value(form: &HtmlFormElement, id: &str) -> String {
    form_field(form, id)
        .map(|el| element_value(&el))
        .unwrap_or_default()
}

/// Read the whole form into the transient payload. Missing inputs read as
/// empty, which validation then reports as missing.
fn collect(form: &HtmlFormElement) -> Submission {
    let site_visit = form_field(form, "site-visit")
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.checked())
        .unwrap_or(false);

    Submission {
        name: field_value(form, "name"),
        email: field_value(form, "email"),
        phone: field_value(form, "phone"),
        address: field_value(form, "address"),
        service_type: field_value(form, "service-type"),
        description: field_value(form, "description"),
        site_visit,
    }
}

fn log_outcome(submission: &Submission, result: &Result<Ack, SubmissionFailure>) {
    match result {
        // Dev-facing trace of what a real endpoint would have received.
        Ok(_) => match serde_json::to_string(submission) {
            Ok(payload) => {
                web_sys::console::log_2(&"Form submitted:".into(), &payload.into());
            }
            Err(_) => web_sys::console::log_1(&"Form submitted".into()),
        },
        Err(failure) => {
            web_sys::console::error_2(
                &"Form submission error:".into(),
                &failure.to_string().into(),
            );
        }
    }
}

pub(super) fn init(ctx: &PageContext, tuning: &Tuning) {
    let Some(form) = ctx.contact_form.clone() else {
        return;
    };

    let submit_button = form
        .query_selector(select::SUBMIT_BUTTON)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
    let original_label = submit_button
        .as_ref()
        .map(|button| button.inner_html())
        .unwrap_or_default();

    let parts = Rc::new(FormDom {
        form: form.clone(),
        submit_button,
        original_label,
        success: ctx.form_success.clone(),
        error: ctx.form_error.clone(),
    });

    let controller = Rc::new(RefCell::new(SubmitController::new()));
    let delay_ms = tuning.submit_delay_ms as i32;

    {
        let parts = Rc::clone(&parts);
        let controller = Rc::clone(&controller);
        let handler_form = form.clone();

        dom::listen(&form, "submit", move |event| {
            event.prevent_default();

            let submission = collect(&handler_form);
            match controller.borrow_mut().begin(&submission) {
                BeginOutcome::InFlight => {}
                BeginOutcome::Rejected(effects) => apply_effects(&parts, &effects),
                BeginOutcome::Accepted(effects) => {
                    apply_effects(&parts, &effects);

                    let parts = Rc::clone(&parts);
                    let controller = Rc::clone(&controller);
                    spawn_local(async move {
                        let submitter = DelaySubmitter { delay_ms };
                        let result = submitter.submit(&submission).await;
                        log_outcome(&submission, &result);
                        let effects = controller.borrow_mut().finish(result);
                        apply_effects(&parts, &effects);
                    });
                }
            }
        });
    }

    init_affordances(&form);
}

/// Per-field feedback outside the submit flow: validate on blur, clear the
/// mark on the next edit.
fn init_affordances(form: &HtmlFormElement) {
    for field in dom::query_all_in(form, select::FORM_FIELDS) {
        let spec = field_spec(&field.id()).unwrap_or_else(|| spec_from_attributes(&field));

        let on_blur = field.clone();
        dom::listen(&field, "blur", move |_| {
            let verdict = verdict_on_blur(spec, &element_value(&on_blur));
            apply_affordance(&on_blur, verdict);
        });

        let on_edit = field.clone();
        dom::listen(&field, "input", move |_| {
            apply_affordance(&on_edit, FieldAffordance::Cleared);
        });
    }
}

/// Rules for inputs the field table does not know, read off the markup.
fn spec_from_attributes(field: &Element) -> FieldSpec {
    FieldSpec {
        required: field.has_attribute("required"),
        expects_email: field.get_attribute("type").as_deref() == Some("email"),
    }
}

fn apply_affordance(field: &Element, affordance: FieldAffordance) {
    let Some(el) = field.dyn_ref::<HtmlElement>() else {
        return;
    };
    match affordance {
        FieldAffordance::Valid => dom::set_style(el, "border-color", "var(--color-accent)"),
        FieldAffordance::Invalid => dom::set_style(el, "border-color", "var(--color-error)"),
        FieldAffordance::Cleared => dom::clear_style(el, "border-color"),
    }
}
