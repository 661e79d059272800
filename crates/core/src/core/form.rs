//! Contact form payload and validation.
//!
//! [`Submission`] is built once per submit attempt, checked here, handed to
//! the send capability, and dropped when the attempt resolves. Nothing in
//! this module is persisted anywhere.

use thiserror::Error;

/// Transient value object holding one submit attempt's field values.
///
/// With the `serde` feature the payload serializes in camelCase
/// (`serviceType`, `siteVisit`), which is the shape a submission endpoint
/// receives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Optional; blank is fine.
    pub address: String,
    pub service_type: String,
    pub description: String,
    /// Whether the customer asked for an on-site assessment.
    pub site_visit: bool,
}

impl Submission {
    /// Validate per the submit contract: required fields first, then the
    /// email shape. The first failure wins; the page shows one message at
    /// a time. Blank-ness is checked trimmed, but the email shape runs on
    /// the raw value, so surrounding whitespace rejects the address.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            &self.name,
            &self.email,
            &self.phone,
            &self.service_type,
            &self.description,
        ];
        if required.iter().any(|value| value.trim().is_empty()) {
            return Err(ValidationError::MissingField);
        }
        if !email_looks_valid(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

/// Validation failures surfaced inline. Neither aborts anything beyond the
/// current attempt; the form stays editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is empty or whitespace-only.
    #[error("a required field is missing")]
    MissingField,
    /// The email does not look like `local@domain.tld`.
    #[error("the email address is not valid")]
    InvalidEmail,
}

impl ValidationError {
    /// Inline banner fragment for this failure, in the site's language.
    /// The markup is part of the banner content and is set as HTML.
    pub fn banner_html(self) -> &'static str {
        match self {
            ValidationError::MissingField => {
                "<strong>Vennligst fyll ut alle obligatoriske felt.</strong>"
            }
            ValidationError::InvalidEmail => {
                "<strong>Vennligst oppgi en gyldig e-postadresse.</strong>"
            }
        }
    }
}

/// Lightweight email shape check, equivalent to the classic
/// `^[^\s@]+@[^\s@]+\.[^\s@]+$`: no whitespace anywhere, exactly one `@`,
/// and at least one `.` strictly inside the domain part. Deliberately
/// permissive beyond that; the authoritative check belongs to whatever
/// receives the payload.
pub fn email_looks_valid(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Static validation rules for one input, independent of the submit flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub required: bool,
    pub expects_email: bool,
}

impl FieldSpec {
    /// Required, free-form.
    pub const REQUIRED: FieldSpec = FieldSpec {
        required: true,
        expects_email: false,
    };
    /// Required and must look like an email address.
    pub const EMAIL: FieldSpec = FieldSpec {
        required: true,
        expects_email: true,
    };
    /// Optional, free-form.
    pub const OPTIONAL: FieldSpec = FieldSpec {
        required: false,
        expects_email: false,
    };
}

/// Visual affordance for a single field, as a pure description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldAffordance {
    /// Mark the field as passing its rules (accent border).
    Valid,
    /// Mark the field as failing its rules (error border).
    Invalid,
    /// Drop any field-level mark. Applied optimistically on the next edit
    /// after an invalid mark, without re-validating.
    Cleared,
}

/// Blur-time verdict for one field. Values are trimmed before checking, so
/// a whitespace-only entry in a required field reads as missing.
pub fn verdict_on_blur(spec: FieldSpec, raw: &str) -> FieldAffordance {
    let value = raw.trim();
    if spec.required && value.is_empty() {
        return FieldAffordance::Invalid;
    }
    if spec.expects_email && !value.is_empty() && !email_looks_valid(value) {
        return FieldAffordance::Invalid;
    }
    FieldAffordance::Valid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> Submission {
        Submission {
            name: "Kari Nordmann".into(),
            email: "kari@example.no".into(),
            phone: "98765432".into(),
            address: "Fjordgata 1".into(),
            service_type: "installasjon".into(),
            description: "Trenger nytt sikringsskap.".into(),
            site_visit: false,
        }
    }

    #[test]
    fn complete_submission_validates() {
        assert_eq!(complete().validate(), Ok(()));
    }

    #[test]
    fn optional_fields_may_be_blank() {
        let mut form = complete();
        form.address = String::new();
        form.site_visit = false;
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn each_required_field_is_enforced() {
        let blank_out: [fn(&mut Submission); 5] = [
            |f| f.name = String::new(),
            |f| f.email = String::new(),
            |f| f.phone = String::new(),
            |f| f.service_type = String::new(),
            |f| f.description = String::new(),
        ];
        for blank in blank_out {
            let mut form = complete();
            blank(&mut form);
            assert_eq!(form.validate(), Err(ValidationError::MissingField));
        }
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut form = complete();
        form.name = "   \t".into();
        assert_eq!(form.validate(), Err(ValidationError::MissingField));
    }

    #[test]
    fn missing_field_wins_over_bad_email() {
        let mut form = complete();
        form.name = String::new();
        form.email = "not-an-address".into();
        assert_eq!(form.validate(), Err(ValidationError::MissingField));
    }

    #[test]
    fn email_is_checked_raw_not_trimmed() {
        // The blur affordance trims; the submit path does not.
        let mut form = complete();
        form.email = "  kari@example.no  ".into();
        assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));
        assert_eq!(
            verdict_on_blur(FieldSpec::EMAIL, "  kari@example.no  "),
            FieldAffordance::Valid
        );
    }

    #[test]
    fn email_shapes_accepted() {
        for email in [
            "ola@ex.no",
            "a@b.c",
            "first.last@example.co.uk",
            "a@b..c",
            "øla@eksempel.nø",
            "tag+filter@example.no",
        ] {
            assert!(email_looks_valid(email), "{email:?} should pass");
        }
    }

    #[test]
    fn email_shapes_rejected() {
        for email in [
            "",
            "ola",
            "ola@ex",
            "ola@",
            "@ex.no",
            "ola@@ex.no",
            "ola@ex@no",
            "ola@.no",
            "ola@ex.",
            "ola nordmann@ex.no",
            "ola@ex .no",
            "ola@ex.no ",
            "\tola@ex.no",
        ] {
            assert!(!email_looks_valid(email), "{email:?} should fail");
        }
    }

    #[test]
    fn tld_less_email_fails_validation() {
        let mut form = complete();
        form.email = "ola@ex".into();
        assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn banner_fragments_are_stable() {
        assert!(ValidationError::MissingField
            .banner_html()
            .contains("obligatoriske felt"));
        assert!(ValidationError::InvalidEmail
            .banner_html()
            .contains("gyldig e-postadresse"));
    }

    #[test]
    fn blur_verdicts() {
        assert_eq!(
            verdict_on_blur(FieldSpec::REQUIRED, ""),
            FieldAffordance::Invalid
        );
        assert_eq!(
            verdict_on_blur(FieldSpec::REQUIRED, "  "),
            FieldAffordance::Invalid
        );
        assert_eq!(
            verdict_on_blur(FieldSpec::REQUIRED, "noe"),
            FieldAffordance::Valid
        );
        assert_eq!(
            verdict_on_blur(FieldSpec::OPTIONAL, ""),
            FieldAffordance::Valid
        );
        assert_eq!(
            verdict_on_blur(FieldSpec::EMAIL, "ola@ex"),
            FieldAffordance::Invalid
        );
        assert_eq!(
            verdict_on_blur(FieldSpec::EMAIL, "ola@ex.no"),
            FieldAffordance::Valid
        );
        // Emptiness is reported as missing, not as a bad address.
        assert_eq!(
            verdict_on_blur(FieldSpec::EMAIL, ""),
            FieldAffordance::Invalid
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn payload_serializes_in_camel_case() {
        let value = serde_json::to_value(complete()).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("serviceType"));
        assert!(object.contains_key("siteVisit"));
        assert!(!object.contains_key("service_type"));
        assert_eq!(object.len(), 7);
    }
}
