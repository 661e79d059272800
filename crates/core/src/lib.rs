//! # pagewire
//!
//! The client-side behavior of a static marketing page, as pure state
//! machines.
//!
//! No DOM types appear anywhere in this crate. Each behavior takes plain
//! values in and returns a description of UI effects out; the
//! `pagewire_web` crate applies those effects to the live page. The split
//! keeps every behavior unit-testable on the host, without a browser.
//!
//! ## Quick Start
//!
//! ```
//! use pagewire::prelude::*;
//!
//! // Collected from the form at submit time
//! let form = Submission {
//!     name: "Ola Nordmann".into(),
//!     email: "ola@example.no".into(),
//!     phone: "40123456".into(),
//!     address: String::new(),
//!     service_type: "el-sjekk".into(),
//!     description: "Sikringen slår ut på kjøkkenet.".into(),
//!     site_visit: true,
//! };
//!
//! // Drive the submit contract
//! let mut ctl = SubmitController::new();
//! match ctl.begin(&form) {
//!     BeginOutcome::Accepted(effects) => {
//!         assert!(matches!(effects[0], SubmitEffect::HideStatusBanners));
//!         // ...await the send capability, then:
//!         let effects = ctl.finish(Ok(Ack));
//!         assert!(effects.contains(&SubmitEffect::ShowSuccess));
//!     }
//!     other => panic!("valid submission rejected: {other:?}"),
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Serialization of the submission payload
//!
//! ## Modules
//!
//! - [`form`]: Submission payload and validation
//! - [`submit`]: The submit flow controller
//! - [`nav`]: Mobile navigation state machine
//! - [`viewport`]: Scroll and intersection decisions
//! - [`anchor`]: In-page anchor arithmetic
//! - [`tuning`]: Behavioral constants and their shipped defaults

#[path = "core/anchor.rs"]
pub mod anchor;

#[path = "core/form.rs"]
pub mod form;

#[path = "core/nav.rs"]
pub mod nav;

#[path = "core/submit.rs"]
pub mod submit;

#[path = "core/tuning.rs"]
pub mod tuning;

#[path = "core/viewport.rs"]
pub mod viewport;

/// Prelude module for convenient imports.
///
/// ```
/// use pagewire::prelude::*;
/// ```
pub mod prelude {
    pub use crate::anchor::{fragment, scroll_target_y};
    pub use crate::form::{
        email_looks_valid, verdict_on_blur, FieldAffordance, FieldSpec, Submission,
        ValidationError,
    };
    pub use crate::nav::{transition, CloseReason, NavEffect, NavEvent, NavState};
    pub use crate::submit::{
        Ack, BeginOutcome, SubmissionFailure, SubmitController, SubmitEffect, Submitter, UiState,
    };
    pub use crate::tuning::Tuning;
    pub use crate::viewport::{
        header_scrolled, lazy_effect, stagger_delay_ms, within_reveal_band, LazyEffect, OnceSet,
        RevealTracker,
    };
}
