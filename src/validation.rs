//! Declarative validation rules for the intake form
//!
//! Rules are evaluated in field declaration order and only the first
//! failure is reported; the remaining rules are not consulted.

use crate::state::{FieldId, Submission};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

/// One failed constraint from a submit attempt.
///
/// Recoverable: the user corrects the field and resubmits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {}", .field.name(), .message)]
pub struct ValidationError {
    pub field: FieldId,
    pub message: &'static str,
}

/// One field constraint: a predicate plus the message shown when it fails
struct Rule {
    field: FieldId,
    message: &'static str,
    check: fn(&str) -> bool,
}

/// The rule table, in field declaration order
const RULES: [Rule; 5] = [
    Rule {
        field: FieldId::FullName,
        message: "Full name must be at least 2 characters.",
        check: min_two_chars,
    },
    Rule {
        field: FieldId::Email,
        message: "Invalid email address.",
        check: email_shape,
    },
    Rule {
        field: FieldId::Company,
        message: "Company name must be at least 2 characters.",
        check: min_two_chars,
    },
    Rule {
        field: FieldId::Country,
        message: "Country name must be at least 2 characters.",
        check: min_two_chars,
    },
    Rule {
        field: FieldId::Phone,
        message: "Phone number must be at least 2 characters.",
        check: min_two_chars,
    },
];

// Counts chars, not bytes, so multi-byte names are not over-counted
fn min_two_chars(value: &str) -> bool {
    value.chars().count() >= 2
}

fn email_shape(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

fn field_value(submission: &Submission, field: FieldId) -> &str {
    match field {
        FieldId::FullName => &submission.full_name,
        FieldId::Email => &submission.email,
        FieldId::Company => &submission.company,
        FieldId::Country => &submission.country,
        FieldId::Phone => &submission.phone,
    }
}

/// Evaluate all rules against a snapshot, keeping the first failure
pub fn validate(submission: &Submission) -> Result<(), ValidationError> {
    for rule in &RULES {
        if !(rule.check)(field_value(submission, rule.field)) {
            return Err(ValidationError {
                field: rule.field,
                message: rule.message,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_submission() -> Submission {
        Submission {
            full_name: "Al".to_string(),
            email: "a@b.com".to_string(),
            company: "Acme".to_string(),
            country: "US".to_string(),
            phone: "12".to_string(),
        }
    }

    #[test]
    fn test_valid_submission_passes() {
        assert!(validate(&valid_submission()).is_ok());
    }

    #[test]
    fn test_short_full_name_fails() {
        let submission = Submission {
            full_name: "A".to_string(),
            ..valid_submission()
        };
        let err = validate(&submission).unwrap_err();
        assert_eq!(err.field, FieldId::FullName);
        assert_eq!(err.message, "Full name must be at least 2 characters.");
    }

    #[test]
    fn test_invalid_email_fails() {
        let submission = Submission {
            full_name: "Alice".to_string(),
            email: "not-an-email".to_string(),
            ..valid_submission()
        };
        let err = validate(&submission).unwrap_err();
        assert_eq!(err.field, FieldId::Email);
        assert_eq!(err.message, "Invalid email address.");
    }

    #[test]
    fn test_first_failure_wins_in_declaration_order() {
        // Everything is invalid; only fullName should be reported
        let submission = Submission {
            full_name: String::new(),
            email: "nope".to_string(),
            company: "x".to_string(),
            country: String::new(),
            phone: "1".to_string(),
        };
        let err = validate(&submission).unwrap_err();
        assert_eq!(err.field, FieldId::FullName);
    }

    #[test]
    fn test_short_company_country_phone_fail() {
        for (field, patch) in [
            (FieldId::Company, Submission {
                company: "x".to_string(),
                ..valid_submission()
            }),
            (FieldId::Country, Submission {
                country: "U".to_string(),
                ..valid_submission()
            }),
            (FieldId::Phone, Submission {
                phone: "1".to_string(),
                ..valid_submission()
            }),
        ] {
            let err = validate(&patch).unwrap_err();
            assert_eq!(err.field, field);
        }
    }

    #[test]
    fn test_email_shapes() {
        assert!(email_shape("test@example.com"));
        assert!(email_shape("first.last+tag@sub.domain.co"));
        assert!(!email_shape("plainaddress"));
        assert!(!email_shape("@missing-local.com"));
        assert!(!email_shape("missing-at.com"));
        assert!(!email_shape("user@no-tld"));
        assert!(!email_shape("user @spaces.com"));
    }

    #[test]
    fn test_min_two_chars_counts_chars_not_bytes() {
        assert!(min_two_chars("日本"));
        assert!(!min_two_chars("日"));
    }

    #[test]
    fn test_validation_error_display_names_wire_field() {
        let err = ValidationError {
            field: FieldId::FullName,
            message: "Full name must be at least 2 characters.",
        };
        assert_eq!(
            err.to_string(),
            "fullName: Full name must be at least 2 characters."
        );
    }
}
