//! Schema check run on every submit attempt.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lead::LeadDraft;
use crate::payload::LeadPayload;

pub const PROJECT_MIN_LEN: usize = 3;

pub const PROJECT_REQUIRED: &str = "Project name or link is required";
pub const EMAIL_INVALID: &str = "Valid email required";

// Local part: dot-separated runs of [A-Za-z0-9_'+-], no leading/trailing/double dot,
// no trailing apostrophe. Domain: labels starting alphanumeric, alphabetic TLD of 2+.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:[A-Za-z0-9_'+-]+\.)*[A-Za-z0-9_'+-]*[A-Za-z0-9_+-]@(?:[A-Za-z0-9][A-Za-z0-9-]*\.)+[A-Za-z]{2,}$",
    )
    .expect("email pattern is valid")
});

/// Form fields that can carry an inline error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Project,
    Email,
}

/// Per-field error messages from a failed submit attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, &'static str>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    /// Drop the error for a field the visitor just edited.
    pub fn clear(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.errors.insert(field, message);
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email.trim())
}

/// A draft that passed validation. Only obtainable through [`validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidLead(LeadDraft);

impl ValidLead {
    pub fn draft(&self) -> &LeadDraft {
        &self.0
    }

    pub fn payload(&self) -> LeadPayload {
        LeadPayload::from_draft(&self.0)
    }
}

impl LeadDraft {
    pub fn validate(&self) -> Result<ValidLead, FieldErrors> {
        validate(self)
    }
}

/// Check required fields. Revenue and the contact details are optional.
pub fn validate(draft: &LeadDraft) -> Result<ValidLead, FieldErrors> {
    let mut errors = FieldErrors::default();

    if draft.project.trim().chars().count() < PROJECT_MIN_LEN {
        errors.insert(Field::Project, PROJECT_REQUIRED);
    }
    if !is_valid_email(&draft.email) {
        errors.insert(Field::Email, EMAIL_INVALID);
    }

    if errors.is_empty() {
        Ok(ValidLead(draft.clone()))
    } else {
        tracing::debug!(
            fields = ?errors.fields().collect::<Vec<_>>(),
            "lead draft failed validation"
        );
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn draft(project: &str, email: &str) -> LeadDraft {
        LeadDraft {
            project: project.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    #[test]
    fn accepts_minimal_valid_lead() {
        assert!(validate(&draft("sol.xyz", "a@b.com")).is_ok());
        assert!(draft("sol.xyz", "a@b.com").validate().is_ok());
    }

    #[test]
    fn missing_project_is_reported() {
        let errors = validate(&draft("", "a@b.com")).unwrap_err();
        assert_eq!(errors.get(Field::Project), Some(PROJECT_REQUIRED));
        assert_eq!(errors.get(Field::Email), None);
    }

    #[test]
    fn short_or_blank_project_is_rejected() {
        assert!(validate(&draft("ab", "a@b.com")).is_err());
        assert!(validate(&draft("   ab   ", "a@b.com")).is_err());
        assert!(validate(&draft("abc", "a@b.com")).is_ok());
    }

    #[test]
    fn missing_email_is_reported() {
        let errors = validate(&draft("sol.xyz", "")).unwrap_err();
        assert_eq!(errors.get(Field::Email), Some(EMAIL_INVALID));
    }

    #[test]
    fn both_errors_surface_together() {
        let errors = validate(&draft("", "nope")).unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Project, Field::Email]);
    }

    #[test]
    fn email_shapes() {
        for ok in [
            "a@b.com",
            "first.last+tag@sub.example.io",
            "  a@b.co  ",
            "o'neil@my-startup.xyz",
            "Ops_Team@Drift.Trade",
        ] {
            assert!(is_valid_email(ok), "{ok} should be accepted");
        }
        for bad in [
            "",
            "plain",
            "a@b",
            "@b.com",
            "a@.com",
            "a@b.",
            "a@b..com",
            "a b@c.com",
            "a@b@c.com",
            "a@b.c",
            "a..b@x.com",
            ".a@x.com",
            "a.@x.com",
            "a'@x.com",
            "a@-x.com",
            "a@b.123",
            "a\"<>@x.com",
        ] {
            assert!(!is_valid_email(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn clearing_an_error_leaves_the_rest() {
        let mut errors = validate(&draft("", "")).unwrap_err();
        errors.clear(Field::Project);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Email]);
    }
}
