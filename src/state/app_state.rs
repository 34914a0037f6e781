//! Application state definitions

use super::forms::{IntakeForm, ValidationErrors};
use serde::Serialize;

/// Submission lifecycle for the single submit action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmitStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "ready",
            Self::Submitting => "submitting…",
            Self::Succeeded => "submitted",
            Self::Failed => "failed",
        }
    }
}

/// The email payload: every form field with the file fields replaced by
/// their uploaded URLs. Wire names match the existing email template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub campaign: String,
    pub first_name: String,
    pub last_name: String,
    pub ssn: String,
    pub dob: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    #[serde(rename = "uploadId")]
    pub id_document_url: String,
    #[serde(rename = "headshotImage")]
    pub headshot_url: String,
    #[serde(rename = "CardImage")]
    pub card_photo_url: String,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// The one intake form instance for this session
    pub form: IntakeForm,
    /// Where the submit orchestration currently stands
    pub submit_status: SubmitStatus,
    /// Per-field errors from the last failed submit attempt
    pub validation_errors: ValidationErrors,
    /// Transient success message shown in the status bar
    pub status_message: Option<String>,
    /// Failure banner message, shown as a dismissable dialog
    pub error_message: Option<String>,
}

impl AppState {
    /// Whether a submission is currently in flight
    pub fn is_submitting(&self) -> bool {
        matches!(self.submit_status, SubmitStatus::Submitting)
    }

    /// Drop any transient messages
    pub fn clear_messages(&mut self) {
        self.status_message = None;
        self.error_message = None;
    }
}
