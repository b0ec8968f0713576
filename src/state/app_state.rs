//! Application state definitions

use crate::state::{FieldId, IntakeForm};
use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};

/// The validated snapshot of all fields sent to the backend.
///
/// Serialized as a flat camelCase object, matching what the backend expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub full_name: String,
    pub email: String,
    pub company: String,
    pub country: String,
    pub phone: String,
}

/// User-facing notice shown after a submit attempt resolves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success { details: String },
    Failure { message: String },
}

impl Notification {
    /// Success notice carrying the submitted data as readable text
    pub fn success(submission: &Submission) -> Self {
        let details = serde_json::to_string_pretty(submission)
            .unwrap_or_else(|_| format!("{submission:#?}"));
        Self::Success { details }
    }

    /// Generic failure notice; the specific failure detail is not surfaced
    pub fn failure() -> Self {
        Self::Failure {
            message: "Failed to submit form. Please try again.".to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Success { .. } => "Form submitted successfully!",
            Self::Failure { .. } => "Error",
        }
    }

    pub fn body(&self) -> &str {
        match self {
            Self::Success { details } => details,
            Self::Failure { message } => message,
        }
    }
}

/// Main application state.
///
/// Single writer (the controller in `App`), single reader (the render layer).
#[derive(Default)]
pub struct AppState {
    /// Field values and focus
    pub form: IntakeForm,
    /// Set while the outbound call is in flight; submit is a no-op meanwhile
    pub submitting: bool,
    /// First failing field from the last submit attempt, if any
    pub field_error: Option<ValidationError>,
    /// Pending notification dialog; modal until dismissed
    pub notification: Option<Notification>,
    /// Backend endpoint shown in the status bar
    pub endpoint: String,
}

impl AppState {
    /// Error message for a field, if it was the one marked by the last submit
    pub fn error_for(&self, field: FieldId) -> Option<&'static str> {
        self.field_error
            .as_ref()
            .filter(|e| e.field == field)
            .map(|e| e.message)
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_submission() -> Submission {
        Submission {
            full_name: "Al".to_string(),
            email: "a@b.com".to_string(),
            company: "Acme".to_string(),
            country: "US".to_string(),
            phone: "12".to_string(),
        }
    }

    #[test]
    fn test_submission_serializes_camel_case() {
        let json = serde_json::to_value(sample_submission()).unwrap();
        assert_eq!(json["fullName"], "Al");
        assert_eq!(json["email"], "a@b.com");
        assert_eq!(json["company"], "Acme");
        assert_eq!(json["country"], "US");
        assert_eq!(json["phone"], "12");
        assert_eq!(json.as_object().unwrap().len(), 5);
    }

    #[test]
    fn test_submission_round_trips() {
        let submission = sample_submission();
        let json = serde_json::to_string(&submission).unwrap();
        let parsed: Submission = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, submission);
    }

    #[test]
    fn test_success_notification_contains_payload() {
        let notification = Notification::success(&sample_submission());
        assert!(notification.is_success());
        assert_eq!(notification.title(), "Form submitted successfully!");
        assert!(notification.body().contains("\"fullName\": \"Al\""));
        assert!(notification.body().contains("\"email\": \"a@b.com\""));
    }

    #[test]
    fn test_failure_notification_is_generic() {
        let notification = Notification::failure();
        assert!(!notification.is_success());
        assert_eq!(notification.title(), "Error");
        assert_eq!(notification.body(), "Failed to submit form. Please try again.");
    }

    #[test]
    fn test_error_for_only_matches_marked_field() {
        let mut state = AppState::default();
        state.field_error = Some(ValidationError {
            field: FieldId::Email,
            message: "Invalid email address.",
        });
        assert_eq!(state.error_for(FieldId::Email), Some("Invalid email address."));
        assert_eq!(state.error_for(FieldId::FullName), None);
    }

    #[test]
    fn test_dismiss_notification() {
        let mut state = AppState::default();
        state.notification = Some(Notification::failure());
        state.dismiss_notification();
        assert!(state.notification.is_none());
    }
}
