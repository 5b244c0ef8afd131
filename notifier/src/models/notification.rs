use serde::Serialize;

use crate::models::weekend::Preference;

pub const REMINDER_SUBJECT: &str = "[REMINDR] Upcoming Long Weekend!";

/// Values substituted into the reminder template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReminderContent {
    pub title: String,
    pub message: String,
}

/// A single message addressed to every subscriber of one preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryRequest {
    pub recipients: Vec<String>,
    pub subject: String,
    pub html_body: String,
}

impl DeliveryRequest {
    pub fn reminder(recipients: Vec<String>, html_body: String) -> Self {
        Self {
            recipients,
            subject: REMINDER_SUBJECT.to_string(),
            html_body,
        }
    }
}

/// What a single invocation ended up doing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum NotificationOutcome {
    NoLongWeekend,
    NoSubscribers {
        preference: Preference,
    },
    Delivered {
        preference: Preference,
        recipients: usize,
        holiday: String,
    },
    Failed {
        reason: String,
    },
}

impl NotificationOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, NotificationOutcome::Delivered { .. })
    }
}
