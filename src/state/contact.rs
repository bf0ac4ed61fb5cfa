//! Contact form state
//!
//! The form never leaves the machine: a submission is logged, acknowledged
//! and the fields are cleared.

use chrono::{DateTime, Utc};
use iced::widget::text_editor;

/// Shown to the user after every submission
pub const ACKNOWLEDGMENT: &str = "Thank you for your message! I will get back to you soon.";

/// Editable form fields
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: text_editor::Content,
}

/// A snapshot of the form taken at submission time
#[derive(Debug, Clone, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: text_editor::Content::new(),
        }
    }
}

impl ContactForm {
    /// Take the current values and reset every field
    pub fn submit(&mut self) -> ContactSubmission {
        let message = self.message.text().trim_end_matches('\n').to_string();
        let submission = ContactSubmission {
            name: std::mem::take(&mut self.name),
            email: std::mem::take(&mut self.email),
            message,
            submitted_at: Utc::now(),
        };

        self.message = text_editor::Content::new();
        submission
    }
}
