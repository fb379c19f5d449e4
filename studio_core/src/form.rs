//! Lead form state machine.
//!
//! ```text
//! idle --valid submit--> submitting --2xx--> success --timeout--> idle
//!                             |
//!                             +--failure--> idle (draft kept)
//! ```
//!
//! The machine never performs I/O. [`LeadForm::submit`] hands back the payload
//! to send, and the caller reports the result through [`LeadForm::finish`].
//! Submit attempts outside `idle` are ignored, which is what keeps a double
//! click from producing a second request.

use std::time::Duration;

use crate::error::TransmissionError;
use crate::lead::LeadDraft;
use crate::payload::LeadPayload;
use crate::validation::{self, Field, FieldErrors};

pub const DEFAULT_SUCCESS_DISPLAY: Duration = Duration::from_millis(4000);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Success,
}

/// Result of a submit click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed; issue exactly one POST with this body.
    Send(LeadPayload),
    /// Validation failed; errors are stored on the form, nothing is sent.
    Invalid,
    /// The form is busy (submitting or showing success).
    Ignored,
}

/// Result of reporting a relay response back to the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FinishOutcome {
    /// Show the success state, then call [`LeadForm::success_elapsed`] after the delay.
    Succeeded { reset_after: Duration },
    /// Tell the visitor; the form is idle again with the draft untouched.
    Failed(TransmissionError),
    /// No request was in flight.
    Ignored,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadForm {
    draft: LeadDraft,
    phase: FormPhase,
    errors: FieldErrors,
    success_display: Duration,
}

impl Default for LeadForm {
    fn default() -> Self {
        Self::new(DEFAULT_SUCCESS_DISPLAY)
    }
}

impl LeadForm {
    pub fn new(success_display: Duration) -> Self {
        Self {
            draft: LeadDraft::default(),
            phase: FormPhase::Idle,
            errors: FieldErrors::default(),
            success_display,
        }
    }

    pub fn draft(&self) -> &LeadDraft {
        &self.draft
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(field)
    }

    pub fn set_project(&mut self, value: impl Into<String>) {
        self.draft.project = value.into();
        self.errors.clear(Field::Project);
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.draft.email = value.into();
        self.errors.clear(Field::Email);
    }

    /// Edit any field that carries no validation rule (goal, timeline, channel, ...).
    pub fn update_draft(&mut self, edit: impl FnOnce(&mut LeadDraft)) {
        edit(&mut self.draft);
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.phase != FormPhase::Idle {
            tracing::debug!(phase = ?self.phase, "submit ignored while busy");
            return SubmitOutcome::Ignored;
        }

        match validation::validate(&self.draft) {
            Ok(lead) => {
                self.errors = FieldErrors::default();
                self.phase = FormPhase::Submitting;
                tracing::info!(contact = %lead.draft().contact, "submitting lead");
                SubmitOutcome::Send(lead.payload())
            }
            Err(errors) => {
                self.errors = errors;
                SubmitOutcome::Invalid
            }
        }
    }

    pub fn finish(&mut self, result: Result<(), TransmissionError>) -> FinishOutcome {
        if self.phase != FormPhase::Submitting {
            tracing::warn!(phase = ?self.phase, "relay response without a request in flight");
            return FinishOutcome::Ignored;
        }

        match result {
            Ok(()) => {
                self.phase = FormPhase::Success;
                FinishOutcome::Succeeded {
                    reset_after: self.success_display,
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "lead submission failed");
                self.phase = FormPhase::Idle;
                FinishOutcome::Failed(err)
            }
        }
    }

    /// The success display is over: start again with a fresh draft.
    pub fn success_elapsed(&mut self) {
        if self.phase != FormPhase::Success {
            return;
        }
        self.draft = LeadDraft::default();
        self.errors = FieldErrors::default();
        self.phase = FormPhase::Idle;
    }

    pub fn submit_disabled(&self) -> bool {
        self.phase != FormPhase::Idle
    }

    pub fn submit_label(&self) -> &'static str {
        match self.phase {
            FormPhase::Idle => "Submit Request",
            FormPhase::Submitting => "Submitting...",
            FormPhase::Success => "✓ Submitted! We'll be in touch soon",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::{ContactChannel, Goal, Timeline};
    use pretty_assertions::assert_eq;

    fn filled_form() -> LeadForm {
        let mut form = LeadForm::default();
        form.set_project("sol.xyz");
        form.set_email("a@b.com");
        form.update_draft(|d| d.contact = ContactChannel::Email);
        form
    }

    fn sends(outcomes: &[SubmitOutcome]) -> usize {
        outcomes
            .iter()
            .filter(|o| matches!(o, SubmitOutcome::Send(_)))
            .count()
    }

    #[test]
    fn invalid_submit_sends_nothing_and_reports_fields() {
        let mut form = LeadForm::default();
        form.set_email("not-an-email");

        assert_eq!(form.submit(), SubmitOutcome::Invalid);
        assert_eq!(form.phase(), FormPhase::Idle);
        assert!(form.error(Field::Project).is_some());
        assert!(form.error(Field::Email).is_some());
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut form = LeadForm::default();
        form.submit();
        form.set_project("sol.xyz");
        assert_eq!(form.error(Field::Project), None);
        assert!(form.error(Field::Email).is_some());
    }

    #[test]
    fn valid_submit_sends_once_and_blocks_repeats() {
        let mut form = filled_form();
        let outcomes = [form.submit(), form.submit(), form.submit()];

        assert_eq!(sends(&outcomes), 1);
        assert_eq!(outcomes[1], SubmitOutcome::Ignored);
        assert_eq!(form.phase(), FormPhase::Submitting);
        assert!(form.submit_disabled());
        assert_eq!(form.submit_label(), "Submitting...");
    }

    #[test]
    fn example_payload_uses_defaults() {
        let mut form = filled_form();
        let SubmitOutcome::Send(payload) = form.submit() else {
            panic!("expected a request");
        };
        assert_eq!(payload.needs, "");
        assert_eq!(payload.timeline, Timeline::Asap);
        assert_eq!(payload.revenue, None);
    }

    #[test]
    fn success_holds_then_resets_to_idle() {
        let mut form = LeadForm::new(Duration::from_millis(3000));
        form.set_project("sol.xyz");
        form.set_email("a@b.com");
        form.submit();

        assert_eq!(
            form.finish(Ok(())),
            FinishOutcome::Succeeded {
                reset_after: Duration::from_millis(3000)
            }
        );
        assert_eq!(form.phase(), FormPhase::Success);
        assert!(form.submit_disabled());
        assert_eq!(form.submit(), SubmitOutcome::Ignored);

        form.success_elapsed();
        assert_eq!(form.phase(), FormPhase::Idle);
        assert!(!form.submit_disabled());
        assert_eq!(form.draft(), &LeadDraft::default());
        assert_eq!(form.submit_label(), "Submit Request");
    }

    #[test]
    fn failure_returns_to_idle_with_values_intact() {
        let mut form = filled_form();
        form.update_draft(|d| {
            d.goal = Goal::Specific;
            d.needs = "teaser".into();
        });
        let before = form.draft().clone();
        form.submit();

        let outcome = form.finish(Err(TransmissionError::Status(500)));
        assert_eq!(outcome, FinishOutcome::Failed(TransmissionError::Status(500)));
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.draft(), &before);

        // immediate retry is allowed
        assert!(matches!(form.submit(), SubmitOutcome::Send(_)));
    }

    #[test]
    fn network_failure_behaves_like_status_failure() {
        let mut form = filled_form();
        form.submit();
        let outcome = form.finish(Err(TransmissionError::Network("offline".into())));
        assert!(matches!(outcome, FinishOutcome::Failed(TransmissionError::Network(_))));
        assert!(!form.submit_disabled());
    }

    #[test]
    fn stray_events_are_ignored() {
        let mut form = filled_form();
        assert_eq!(form.finish(Ok(())), FinishOutcome::Ignored);
        form.success_elapsed();
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.draft().project, "sol.xyz");

        form.submit();
        form.success_elapsed();
        assert_eq!(form.phase(), FormPhase::Submitting);
    }
}
