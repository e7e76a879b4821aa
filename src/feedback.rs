//! Feedback form.
//!
//! Submissions are logged and the form is cleared; nothing is sent anywhere.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Shown after a successful submit
pub const THANK_YOU: &str = "感謝您的回饋！我們會儘快回覆。";

/// Editable form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A submitted form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl FeedbackForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Parse `name|email|message`; missing fields are left empty
    pub fn from_pipe_separated(input: &str) -> Self {
        let mut fields = input.splitn(3, '|').map(str::trim);
        Self::new(
            fields.next().unwrap_or_default(),
            fields.next().unwrap_or_default(),
            fields.next().unwrap_or_default(),
        )
    }

    /// Log the form contents and reset every field
    pub fn submit(&mut self) -> FeedbackRecord {
        let form = std::mem::take(self);
        let record = FeedbackRecord {
            name: form.name,
            email: form.email,
            message: form.message,
            timestamp: Utc::now(),
        };

        info!(
            name = %record.name,
            email = %record.email,
            message = %record.message,
            timestamp = %record.timestamp.to_rfc3339(),
            "Feedback received"
        );
        record
    }
}
