//! The submit flow controller.
//!
//! A small state machine that turns submit intent and the send outcome into
//! UI effects. It never touches a rendering surface; the adapter applies
//! [`SubmitEffect`]s in order. One attempt is driven in three beats:
//! [`SubmitController::begin`] at submit intent, the injected [`Submitter`]
//! capability's single await, then [`SubmitController::finish`] with the
//! outcome.

use thiserror::Error;

use crate::form::{Submission, ValidationError};

/// Successful acknowledgement from the send capability.
///
/// Carries nothing today. A real endpoint integration can grow fields
/// (ticket id, queue position) without touching the controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ack;

/// The send itself failed. Terminal for the attempt only; the form stays
/// editable and the attempt can be retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("submission failed: {detail}")]
pub struct SubmissionFailure {
    /// Internal detail for the console. The user sees the generic banner.
    pub detail: String,
}

impl SubmissionFailure {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Generic failure banner: advise retrying or calling directly.
pub const FAILURE_BANNER_HTML: &str =
    "<strong>Noe gikk galt.</strong><br>Vennligst prøv igjen eller kontakt oss direkte på telefon.";

/// Label swapped onto the submit control while the send is in flight.
pub const BUSY_LABEL_HTML: &str = concat!(
    "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"20\" height=\"20\" ",
    "viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"2\" ",
    "stroke-linecap=\"round\" stroke-linejoin=\"round\" class=\"spin\">",
    "<line x1=\"12\" y1=\"2\" x2=\"12\" y2=\"6\"></line>",
    "<line x1=\"12\" y1=\"18\" x2=\"12\" y2=\"22\"></line>",
    "<line x1=\"4.93\" y1=\"4.93\" x2=\"7.76\" y2=\"7.76\"></line>",
    "<line x1=\"16.24\" y1=\"16.24\" x2=\"19.07\" y2=\"19.07\"></line>",
    "<line x1=\"2\" y1=\"12\" x2=\"6\" y2=\"12\"></line>",
    "<line x1=\"18\" y1=\"12\" x2=\"22\" y2=\"12\"></line>",
    "<line x1=\"4.93\" y1=\"19.07\" x2=\"7.76\" y2=\"16.24\"></line>",
    "<line x1=\"16.24\" y1=\"7.76\" x2=\"19.07\" y2=\"4.93\"></line>",
    "</svg> Sender...",
);

/// UI phase of the form. Exactly one is active at a time; transitions
/// happen only inside [`SubmitController`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    Idle,
    /// A send is in flight; the submit control is disabled.
    Submitting,
    Success,
    Error,
}

/// One DOM-free instruction for the rendering adapter. Effects come out of
/// the controller in apply order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitEffect {
    /// Hide both status banners. Always first on a new attempt, so a stale
    /// success or error never survives into the next one.
    HideStatusBanners,
    /// Show the error banner with this fragment.
    ShowError { html: &'static str },
    /// Disable the submit control and swap in the busy label.
    SetBusy { label_html: &'static str },
    /// Show the success banner.
    ShowSuccess,
    /// Clear every form field.
    ResetFields,
    /// Bring the success banner into view.
    FocusSuccess,
    /// Re-enable the submit control and restore its original label.
    /// Emitted on every finish path.
    RestoreSubmitControl,
}

/// Outcome of [`SubmitController::begin`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeginOutcome {
    /// A send is already in flight; the intent is dropped. The disabled
    /// submit control normally prevents this path.
    InFlight,
    /// Validation failed. The effects render the inline message; no send
    /// happens and the busy state is never entered.
    Rejected(Vec<SubmitEffect>),
    /// Validation passed and the busy state is entered. The caller runs
    /// the send and hands its result to [`SubmitController::finish`].
    Accepted(Vec<SubmitEffect>),
}

/// Injected send capability, the submit flow's single suspension point.
///
/// The production implementation performs the actual submission; tests
/// substitute deterministic fakes.
#[allow(async_fn_in_trait)]
pub trait Submitter {
    async fn submit(&self, submission: &Submission) -> Result<Ack, SubmissionFailure>;
}

/// Drives the submit contract for one page form.
#[derive(Debug, Default)]
pub struct SubmitController {
    state: UiState,
}

impl SubmitController {
    pub fn new() -> Self {
        Self {
            state: UiState::Idle,
        }
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    /// Handle submit intent: clear stale banners, validate, and either
    /// reject with an inline message or enter the busy state.
    pub fn begin(&mut self, submission: &Submission) -> BeginOutcome {
        if self.state == UiState::Submitting {
            return BeginOutcome::InFlight;
        }

        let mut effects = vec![SubmitEffect::HideStatusBanners];
        match submission.validate() {
            Err(err) => {
                self.state = UiState::Error;
                effects.push(SubmitEffect::ShowError {
                    html: err.banner_html(),
                });
                BeginOutcome::Rejected(effects)
            }
            Ok(()) => {
                self.state = UiState::Submitting;
                effects.push(SubmitEffect::SetBusy {
                    label_html: BUSY_LABEL_HTML,
                });
                BeginOutcome::Accepted(effects)
            }
        }
    }

    /// Resolve the in-flight attempt with the send outcome. The submit
    /// control is restored on both paths. Calling without a matching
    /// `begin` is a no-op.
    pub fn finish(&mut self, outcome: Result<Ack, SubmissionFailure>) -> Vec<SubmitEffect> {
        if self.state != UiState::Submitting {
            return Vec::new();
        }
        match outcome {
            Ok(Ack) => {
                self.state = UiState::Success;
                vec![
                    SubmitEffect::ShowSuccess,
                    SubmitEffect::ResetFields,
                    SubmitEffect::FocusSuccess,
                    SubmitEffect::RestoreSubmitControl,
                ]
            }
            Err(_) => {
                self.state = UiState::Error;
                vec![
                    SubmitEffect::ShowError {
                        html: FAILURE_BANNER_HTML,
                    },
                    SubmitEffect::RestoreSubmitControl,
                ]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> Submission {
        Submission {
            name: "Ola Nordmann".into(),
            email: "ola@example.no".into(),
            phone: "40123456".into(),
            address: String::new(),
            service_type: "el-sjekk".into(),
            description: "Varmekablene på badet er døde.".into(),
            site_visit: true,
        }
    }

    fn has_busy(effects: &[SubmitEffect]) -> bool {
        effects
            .iter()
            .any(|e| matches!(e, SubmitEffect::SetBusy { .. }))
    }

    struct AlwaysOk;

    impl Submitter for AlwaysOk {
        async fn submit(&self, _submission: &Submission) -> Result<Ack, SubmissionFailure> {
            Ok(Ack)
        }
    }

    struct AlwaysDown;

    impl Submitter for AlwaysDown {
        async fn submit(&self, _submission: &Submission) -> Result<Ack, SubmissionFailure> {
            Err(SubmissionFailure::new("endpoint unreachable"))
        }
    }

    #[test]
    fn begin_always_clears_banners_first() {
        let mut incomplete = complete();
        incomplete.phone = String::new();

        for form in [complete(), incomplete] {
            let mut ctl = SubmitController::new();
            let effects = match ctl.begin(&form) {
                BeginOutcome::Rejected(e) | BeginOutcome::Accepted(e) => e,
                BeginOutcome::InFlight => panic!("fresh controller cannot be in flight"),
            };
            assert_eq!(effects[0], SubmitEffect::HideStatusBanners);
        }
    }

    #[test]
    fn missing_field_rejects_without_busy() {
        let mut form = complete();
        form.description = "   ".into();

        let mut ctl = SubmitController::new();
        match ctl.begin(&form) {
            BeginOutcome::Rejected(effects) => {
                assert!(!has_busy(&effects));
                assert!(effects.contains(&SubmitEffect::ShowError {
                    html: ValidationError::MissingField.banner_html(),
                }));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        assert_eq!(ctl.state(), UiState::Error);
    }

    #[test]
    fn bad_email_rejects_without_busy() {
        let mut form = complete();
        form.email = "ola@ex".into();

        let mut ctl = SubmitController::new();
        match ctl.begin(&form) {
            BeginOutcome::Rejected(effects) => {
                assert!(!has_busy(&effects));
                assert!(effects.contains(&SubmitEffect::ShowError {
                    html: ValidationError::InvalidEmail.banner_html(),
                }));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn accepted_enters_busy() {
        let mut ctl = SubmitController::new();
        match ctl.begin(&complete()) {
            BeginOutcome::Accepted(effects) => {
                assert_eq!(
                    effects,
                    vec![
                        SubmitEffect::HideStatusBanners,
                        SubmitEffect::SetBusy {
                            label_html: BUSY_LABEL_HTML,
                        },
                    ]
                );
            }
            other => panic!("expected acceptance, got {other:?}"),
        }
        assert_eq!(ctl.state(), UiState::Submitting);
    }

    #[test]
    fn resubmit_while_in_flight_is_dropped() {
        let mut ctl = SubmitController::new();
        assert!(matches!(ctl.begin(&complete()), BeginOutcome::Accepted(_)));
        assert_eq!(ctl.begin(&complete()), BeginOutcome::InFlight);
        assert_eq!(ctl.state(), UiState::Submitting);
    }

    #[test]
    fn finish_ok_resets_and_restores() {
        let mut ctl = SubmitController::new();
        ctl.begin(&complete());
        let effects = ctl.finish(Ok(Ack));
        assert_eq!(
            effects,
            vec![
                SubmitEffect::ShowSuccess,
                SubmitEffect::ResetFields,
                SubmitEffect::FocusSuccess,
                SubmitEffect::RestoreSubmitControl,
            ]
        );
        assert_eq!(ctl.state(), UiState::Success);
    }

    #[test]
    fn finish_err_shows_generic_banner_and_restores() {
        let mut ctl = SubmitController::new();
        ctl.begin(&complete());
        let effects = ctl.finish(Err(SubmissionFailure::new("nede")));
        assert_eq!(
            effects,
            vec![
                SubmitEffect::ShowError {
                    html: FAILURE_BANNER_HTML,
                },
                SubmitEffect::RestoreSubmitControl,
            ]
        );
        assert_eq!(ctl.state(), UiState::Error);
        // The form stays resubmittable after a failure.
        assert!(matches!(ctl.begin(&complete()), BeginOutcome::Accepted(_)));
    }

    #[test]
    fn finish_without_begin_is_a_noop() {
        let mut ctl = SubmitController::new();
        assert!(ctl.finish(Ok(Ack)).is_empty());
        assert_eq!(ctl.state(), UiState::Idle);
    }

    #[test]
    fn success_and_error_are_mutually_exclusive() {
        for outcome in [Ok(Ack), Err(SubmissionFailure::new("nede"))] {
            let mut ctl = SubmitController::new();
            ctl.begin(&complete());
            let effects = ctl.finish(outcome);
            let success = effects.contains(&SubmitEffect::ShowSuccess);
            let error = effects
                .iter()
                .any(|e| matches!(e, SubmitEffect::ShowError { .. }));
            assert!(success != error);
        }
    }

    #[test]
    fn rejected_then_corrected_then_sent() {
        let mut form = complete();
        form.email = "ola@ex".into();

        let mut ctl = SubmitController::new();
        assert!(matches!(ctl.begin(&form), BeginOutcome::Rejected(_)));

        form.email = "ola@ex.no".into();
        match ctl.begin(&form) {
            BeginOutcome::Accepted(effects) => assert!(has_busy(&effects)),
            other => panic!("corrected form should be accepted, got {other:?}"),
        }

        let result = pollster::block_on(AlwaysOk.submit(&form));
        let effects = ctl.finish(result);
        assert!(effects.contains(&SubmitEffect::ShowSuccess));
        assert!(effects.contains(&SubmitEffect::ResetFields));
        assert_eq!(ctl.state(), UiState::Success);
    }

    #[test]
    fn failing_submitter_lands_in_error() {
        let form = complete();
        let mut ctl = SubmitController::new();
        ctl.begin(&form);

        let result = pollster::block_on(AlwaysDown.submit(&form));
        let effects = ctl.finish(result);
        assert!(effects.contains(&SubmitEffect::ShowError {
            html: FAILURE_BANNER_HTML,
        }));
        assert_eq!(ctl.state(), UiState::Error);
    }
}
