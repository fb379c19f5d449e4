//! JSON body posted to the form relay.

use serde::{Serialize, Serializer};

use crate::lead::{ContactChannel, DetailField, Goal, LeadDraft, Revenue, Timeline};

/// Flat string map the relay forwards as an email.
///
/// Optional values are always present, as `""` when absent or hidden, so the
/// relay template renders every row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    pub project: String,
    pub goal: Goal,
    pub needs: String,
    pub timeline: Timeline,
    #[serde(serialize_with = "empty_when_unset")]
    pub revenue: Option<Revenue>,
    pub email: String,
    pub contact: ContactChannel,
    pub telegram_handle: String,
    pub x_handle: String,
    pub call_link: String,
    #[serde(rename = "_subject")]
    pub subject: String,
}

impl LeadPayload {
    pub fn from_draft(draft: &LeadDraft) -> Self {
        let project = draft.project.trim().to_string();
        let needs = if draft.goal == Goal::Specific {
            draft.needs.trim().to_string()
        } else {
            String::new()
        };

        Self {
            subject: subject_line(&project),
            goal: draft.goal,
            needs,
            timeline: draft.timeline,
            revenue: draft.revenue,
            email: draft.email.trim().to_string(),
            contact: draft.contact,
            telegram_handle: draft.visible_detail(DetailField::TelegramHandle).to_string(),
            x_handle: draft.visible_detail(DetailField::XHandle).to_string(),
            call_link: draft.visible_detail(DetailField::CallLink).to_string(),
            project,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

pub fn subject_line(project: &str) -> String {
    format!("New audit request: {}", project)
}

fn empty_when_unset<S: Serializer>(revenue: &Option<Revenue>, s: S) -> Result<S::Ok, S::Error> {
    match revenue {
        Some(revenue) => revenue.serialize(s),
        None => s.serialize_str(""),
    }
}
