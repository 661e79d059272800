//! Page inventory shared by the wasm adapter and host tests.
//!
//! Keeping the ids, state classes, and the contact-field table out of the
//! wasm-only `web` module allows us to unit-test the page contract on the
//! host.

use pagewire::form::FieldSpec;

/// Element ids the behaviors bind to. An id missing from the served page
/// disables only the behavior that owns it.
pub mod hook {
    pub const HEADER: &str = "header";
    pub const NAV: &str = "nav";
    pub const NAV_OVERLAY: &str = "nav-overlay";
    pub const MOBILE_TOGGLE: &str = "mobile-toggle";
    pub const NAV_CLOSE: &str = "nav-close";
    pub const CONTACT_FORM: &str = "contact-form";
    pub const FORM_SUCCESS: &str = "form-success";
    pub const FORM_ERROR: &str = "form-error";
}

/// State classes the behaviors toggle; the stylesheet owns what they look
/// like.
pub mod class {
    /// Open state for the nav drawer and its overlay; also the revealed
    /// state for `.reveal` sections.
    pub const ACTIVE: &str = "active";
    /// Header past the scroll threshold.
    pub const SCROLLED: &str = "scrolled";
    /// Visible state for the status banners.
    pub const SHOW: &str = "show";
    /// A lazy image whose real source has been requested.
    pub const LOADED: &str = "loaded";
}

/// Selectors for the collection-style bindings.
pub mod select {
    pub const NAV_LINKS: &str = ".nav-link";
    pub const REVEAL: &str = ".reveal";
    pub const SERVICE_CARDS: &str = ".service-card";
    pub const ANCHORS: &str = "a[href^=\"#\"]";
    pub const TEL_LINKS: &str = "a[href^=\"tel:\"]";
    pub const LAZY_IMAGES: &str = "img[loading=\"lazy\"]";
    pub const SUBMIT_BUTTON: &str = "button[type=\"submit\"]";
    pub const FORM_FIELDS: &str = "input, select, textarea";
}

/// One contact-form field: its input id and validation rules.
#[derive(Debug, Clone, Copy)]
pub struct ContactField {
    pub id: &'static str,
    pub spec: FieldSpec,
}

/// The contact form's field table, in page order. `address` and
/// `site-visit` are the optional entries; everything else is required.
pub const CONTACT_FIELDS: &[ContactField] = &[
    ContactField {
        id: "name",
        spec: FieldSpec::REQUIRED,
    },
    ContactField {
        id: "email",
        spec: FieldSpec::EMAIL,
    },
    ContactField {
        id: "phone",
        spec: FieldSpec::REQUIRED,
    },
    ContactField {
        id: "address",
        spec: FieldSpec::OPTIONAL,
    },
    ContactField {
        id: "service-type",
        spec: FieldSpec::REQUIRED,
    },
    ContactField {
        id: "description",
        spec: FieldSpec::REQUIRED,
    },
    ContactField {
        id: "site-visit",
        spec: FieldSpec::OPTIONAL,
    },
];

/// Look up the validation rules for a field id, if the table knows it.
pub fn field_spec(id: &str) -> Option<FieldSpec> {
    CONTACT_FIELDS
        .iter()
        .find(|field| field.id == id)
        .map(|field| field.spec)
}
