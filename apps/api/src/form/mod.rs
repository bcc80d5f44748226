//! The multi-step application form: field state, per-step validation, and
//! the submission lifecycle.
//!
//! The controller is deliberately front-end agnostic. It owns the wizard
//! state machine and talks to the endpoint through the `SubmitApplication`
//! seam; rendering is left to whatever drives it (see the `apply` binary).

pub mod client;
pub mod validation;

use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::form::client::{with_min_duration, SubmitApplication};
use crate::form::validation::{
    validate_background, validate_contact, validate_record, FieldError,
};
use crate::models::application::ApplicationRecord;

/// Fixed notice text shown when a submission attempt fails for any reason.
pub const SUBMIT_FAILED_NOTICE: &str =
    "An error occurred while submitting your application. Please try again.";

/// How long the busy indicator stays up at minimum, so a fast round trip
/// does not flicker.
const MIN_FEEDBACK: Duration = Duration::from_secs(2);

/// Which screen of the wizard is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Name, email, phone.
    Contact,
    /// Date of birth, address, position.
    Background,
    /// Read-only review of everything entered.
    Review,
}

/// Feedback recorded after a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The server accepted the record; carries its acknowledgement message.
    Submitted { message: String },
    /// Transport failure or error status; the entered data is untouched.
    Failed { message: String },
}

/// Drives one application through the wizard: collects fields across the
/// first two steps, gates each transition on that step's rules, and submits
/// the completed record from the review step.
pub struct FormController {
    step: Step,
    fields: ApplicationRecord,
    errors: Vec<FieldError>,
    submitting: bool,
    notice: Option<Notice>,
    client: Arc<dyn SubmitApplication>,
    min_feedback: Duration,
}

impl FormController {
    pub fn new(client: Arc<dyn SubmitApplication>) -> Self {
        Self {
            step: Step::Contact,
            fields: ApplicationRecord::default(),
            errors: Vec::new(),
            submitting: false,
            notice: None,
            client,
            min_feedback: MIN_FEEDBACK,
        }
    }

    /// Overrides the minimum busy-indicator duration.
    pub fn with_min_feedback(mut self, min: Duration) -> Self {
        self.min_feedback = min;
        self
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn fields(&self) -> &ApplicationRecord {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut ApplicationRecord {
        &mut self.fields
    }

    /// Inline errors from the last blocked transition or submission attempt.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Feedback from the most recent submission attempt, if any.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Label/value pairs for the review screen, in form order.
    pub fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("name", self.fields.name.as_str()),
            ("email", self.fields.email.as_str()),
            ("phone", self.fields.phone.as_str()),
            ("dob", self.fields.dob.as_str()),
            ("address", self.fields.address.as_str()),
            ("position", self.fields.position.as_str()),
        ]
    }

    /// Advances to the next step if the current step's fields pass their
    /// rules. On failure the step does not change and the errors are kept
    /// for inline display. Returns whether the transition happened.
    pub fn next(&mut self) -> bool {
        if self.submitting {
            return false;
        }

        let (errors, target) = match self.step {
            Step::Contact => (validate_contact(&self.fields), Step::Background),
            Step::Background => (validate_background(&self.fields), Step::Review),
            Step::Review => return false,
        };

        if !errors.is_empty() {
            self.errors = errors;
            return false;
        }

        self.errors.clear();
        self.step = target;
        true
    }

    /// Steps back without clearing anything already entered. Returns whether
    /// the transition happened.
    pub fn back(&mut self) -> bool {
        if self.submitting {
            return false;
        }

        self.step = match self.step {
            Step::Contact => return false,
            Step::Background => Step::Contact,
            Step::Review => Step::Background,
        };
        self.errors.clear();
        true
    }

    /// Sends the completed record to the endpoint. Only valid from the
    /// review step with no submission already in flight; the full record is
    /// re-validated first so nothing incomplete ever reaches the wire.
    ///
    /// On success the form resets to an empty contact step; on failure every
    /// field and the current step are preserved for another attempt. Either
    /// way the busy state is held for the minimum feedback duration.
    pub async fn submit(&mut self) -> Option<Notice> {
        if self.submitting || self.step != Step::Review {
            return None;
        }

        let errors = validate_record(&self.fields);
        if !errors.is_empty() {
            self.errors = errors;
            return None;
        }

        self.submitting = true;
        let outcome =
            with_min_duration(self.min_feedback, self.client.submit(&self.fields)).await;
        self.submitting = false;

        let notice = match outcome {
            Ok(ack) => {
                self.fields = ApplicationRecord::default();
                self.errors.clear();
                self.step = Step::Contact;
                Notice::Submitted {
                    message: ack.message,
                }
            }
            Err(e) => {
                warn!("Error submitting application: {e}");
                Notice::Failed {
                    message: SUBMIT_FAILED_NOTICE.to_string(),
                }
            }
        };

        self.notice = Some(notice.clone());
        Some(notice)
    }
}
