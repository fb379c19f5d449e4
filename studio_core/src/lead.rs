//! The lead submission draft and its option sets.
//!
//! A [`LeadDraft`] is the editable copy of what the visitor has typed so far.
//! It is created with defaults per form render, mutated one field at a time
//! and validated on submit (see [`crate::validation`]).

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ParseFieldError;

/// What the visitor is asking for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Free audit of the current media presence
    #[default]
    Audit,
    /// The visitor has something specific in mind (unlocks `needs`)
    Specific,
}

impl Goal {
    pub const ALL: [Goal; 2] = [Goal::Audit, Goal::Specific];

    pub fn as_str(self) -> &'static str {
        match self {
            Goal::Audit => "audit",
            Goal::Specific => "specific",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Goal::Audit => "Free audit of current media presence",
            Goal::Specific => "I have something specific in mind",
        }
    }

    pub fn hint(self) -> Option<&'static str> {
        match self {
            Goal::Audit => Some("We'll review what you have and suggest improvements."),
            Goal::Specific => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Timeline {
    #[default]
    #[serde(rename = "ASAP")]
    Asap,
    #[serde(rename = "2-4 weeks")]
    TwoToFourWeeks,
    #[serde(rename = "Flexible")]
    Flexible,
}

impl Timeline {
    pub const ALL: [Timeline; 3] = [Timeline::Asap, Timeline::TwoToFourWeeks, Timeline::Flexible];

    /// Wire value; also the label shown on the segmented control.
    pub fn as_str(self) -> &'static str {
        match self {
            Timeline::Asap => "ASAP",
            Timeline::TwoToFourWeeks => "2-4 weeks",
            Timeline::Flexible => "Flexible",
        }
    }
}

/// Monthly revenue bracket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Revenue {
    #[serde(rename = "pre-revenue")]
    PreRevenue,
    #[serde(rename = "1k-10k")]
    From1kTo10k,
    #[serde(rename = "10k-50k")]
    From10kTo50k,
    #[serde(rename = "50k-100k")]
    From50kTo100k,
    #[serde(rename = "100k+")]
    Over100k,
}

impl Revenue {
    pub const ALL: [Revenue; 5] = [
        Revenue::PreRevenue,
        Revenue::From1kTo10k,
        Revenue::From10kTo50k,
        Revenue::From50kTo100k,
        Revenue::Over100k,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Revenue::PreRevenue => "pre-revenue",
            Revenue::From1kTo10k => "1k-10k",
            Revenue::From10kTo50k => "10k-50k",
            Revenue::From50kTo100k => "50k-100k",
            Revenue::Over100k => "100k+",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Revenue::PreRevenue => "Pre-revenue",
            Revenue::From1kTo10k => "$1k - $10k",
            Revenue::From10kTo50k => "$10k - $50k",
            Revenue::From50kTo100k => "$50k - $100k",
            Revenue::Over100k => "$100k+",
        }
    }
}

/// Preferred way to reach the visitor. Exactly one is selected at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactChannel {
    #[default]
    Email,
    Twitter,
    Telegram,
    Call,
}

impl ContactChannel {
    pub const ALL: [ContactChannel; 4] = [
        ContactChannel::Email,
        ContactChannel::Twitter,
        ContactChannel::Telegram,
        ContactChannel::Call,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContactChannel::Email => "email",
            ContactChannel::Twitter => "twitter",
            ContactChannel::Telegram => "telegram",
            ContactChannel::Call => "call",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactChannel::Email => "Email",
            ContactChannel::Twitter => "X DM",
            ContactChannel::Telegram => "Telegram",
            ContactChannel::Call => "15min Call",
        }
    }

    /// The supplementary field that belongs to this channel, if any.
    /// Email needs none: the address is always collected.
    pub fn detail_field(self) -> Option<DetailField> {
        match self {
            ContactChannel::Email => None,
            ContactChannel::Twitter => Some(DetailField::XHandle),
            ContactChannel::Telegram => Some(DetailField::TelegramHandle),
            ContactChannel::Call => Some(DetailField::CallLink),
        }
    }
}

/// Channel-specific contact detail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DetailField {
    TelegramHandle,
    XHandle,
    CallLink,
}

impl DetailField {
    pub const ALL: [DetailField; 3] = [
        DetailField::TelegramHandle,
        DetailField::XHandle,
        DetailField::CallLink,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DetailField::TelegramHandle => "Telegram handle",
            DetailField::XHandle => "X handle",
            DetailField::CallLink => "Booking link or preferred times",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            DetailField::TelegramHandle => "@yourhandle",
            DetailField::XHandle => "@YourTwitter",
            DetailField::CallLink => "calendly.com/you or \"weekdays after 3pm UTC\"",
        }
    }
}

macro_rules! impl_wire_enum {
    ($ty:ty, $field:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseFieldError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty>::ALL
                    .into_iter()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| ParseFieldError::new($field, s))
            }
        }
    };
}

impl_wire_enum!(Goal, "goal");
impl_wire_enum!(Timeline, "timeline");
impl_wire_enum!(Revenue, "revenue");
impl_wire_enum!(ContactChannel, "contact channel");

/// Editable lead, one per form render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadDraft {
    pub project: String,
    pub goal: Goal,
    pub needs: String,
    pub timeline: Timeline,
    pub revenue: Option<Revenue>,
    pub email: String,
    pub contact: ContactChannel,
    pub telegram_handle: String,
    pub x_handle: String,
    pub call_link: String,
}

impl LeadDraft {
    /// `needs` is only relevant when the visitor has a specific request.
    pub fn needs_visible(&self) -> bool {
        self.goal == Goal::Specific
    }

    /// Whether `field` is the detail input for the selected channel.
    pub fn detail_visible(&self, field: DetailField) -> bool {
        self.contact.detail_field() == Some(field)
    }

    pub fn detail(&self, field: DetailField) -> &str {
        match field {
            DetailField::TelegramHandle => &self.telegram_handle,
            DetailField::XHandle => &self.x_handle,
            DetailField::CallLink => &self.call_link,
        }
    }

    pub fn set_detail(&mut self, field: DetailField, value: impl Into<String>) {
        let slot = match field {
            DetailField::TelegramHandle => &mut self.telegram_handle,
            DetailField::XHandle => &mut self.x_handle,
            DetailField::CallLink => &mut self.call_link,
        };
        *slot = value.into();
    }

    /// Detail text that belongs to the selected channel; hidden fields are dropped.
    pub(crate) fn visible_detail(&self, field: DetailField) -> &str {
        if self.detail_visible(field) {
            self.detail(field).trim()
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_form_initial_state() {
        let draft = LeadDraft::default();
        assert_eq!(draft.goal, Goal::Audit);
        assert_eq!(draft.timeline, Timeline::Asap);
        assert_eq!(draft.revenue, None);
        assert_eq!(draft.contact, ContactChannel::Email);
        assert!(!draft.needs_visible());
    }

    #[test]
    fn needs_shown_only_for_specific_goal() {
        let mut draft = LeadDraft::default();
        draft.goal = Goal::Specific;
        assert!(draft.needs_visible());
        draft.goal = Goal::Audit;
        assert!(!draft.needs_visible());
    }

    #[test]
    fn telegram_shows_only_telegram_handle() {
        let draft = LeadDraft {
            contact: ContactChannel::Telegram,
            ..Default::default()
        };
        let visible: Vec<_> = DetailField::ALL
            .into_iter()
            .filter(|f| draft.detail_visible(*f))
            .collect();
        assert_eq!(visible, vec![DetailField::TelegramHandle]);
    }

    #[test]
    fn switching_to_call_shows_only_call_link() {
        let mut draft = LeadDraft {
            contact: ContactChannel::Telegram,
            ..Default::default()
        };
        draft.contact = ContactChannel::Call;
        let visible: Vec<_> = DetailField::ALL
            .into_iter()
            .filter(|f| draft.detail_visible(*f))
            .collect();
        assert_eq!(visible, vec![DetailField::CallLink]);
    }

    #[test]
    fn email_channel_has_no_detail_field() {
        let draft = LeadDraft::default();
        assert!(DetailField::ALL.iter().all(|f| !draft.detail_visible(*f)));
    }

    #[test]
    fn wire_values_parse_back() {
        assert_eq!("2-4 weeks".parse::<Timeline>(), Ok(Timeline::TwoToFourWeeks));
        assert_eq!("100k+".parse::<Revenue>(), Ok(Revenue::Over100k));
        assert_eq!("telegram".parse::<ContactChannel>(), Ok(ContactChannel::Telegram));
        assert_eq!(Goal::Specific.to_string(), "specific");

        let err = "weekly".parse::<Timeline>().unwrap_err();
        assert_eq!(err.field, "timeline");
        assert_eq!(err.value, "weekly");
    }

    #[test]
    fn serde_uses_wire_values() {
        let json = serde_json::to_string(&Revenue::PreRevenue).unwrap();
        assert_eq!(json, "\"pre-revenue\"");
        let json = serde_json::to_string(&Timeline::TwoToFourWeeks).unwrap();
        assert_eq!(json, "\"2-4 weeks\"");
    }
}
