//! Contact form validation and simulated submission.
//!
//! Nothing is stored or sent anywhere: a valid submission waits for the
//! configured delay, is logged with a generated reference, and the reader
//! gets a thank-you page.

use std::time::Duration;

use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::catalog::overview::{self, InquiryType};
use crate::observability::metrics;

/// Longest accepted message body, in characters.
pub const MAX_MESSAGE_CHARS: usize = 5000;

/// Longest accepted single-line field, in characters.
pub const MAX_FIELD_CHARS: usize = 200;

fn default_inquiry_type() -> String {
    "general".to_string()
}

/// Raw form input as posted by the browser.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default = "default_inquiry_type")]
    pub inquiry_type: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            organization: String::new(),
            subject: String::new(),
            message: String::new(),
            inquiry_type: default_inquiry_type(),
        }
    }
}

/// A rejected form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    /// Form field name.
    pub field: &'static str,
    /// Reader-facing message.
    pub message: &'static str,
}

/// A validated submission.
#[derive(Debug, Clone)]
pub struct Submission {
    pub reference: Uuid,
    pub inquiry: &'static InquiryType,
    pub name: String,
    pub email: String,
    pub organization: Option<String>,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Validates the form.
    ///
    /// # Errors
    ///
    /// Returns every rejected field, in form order.
    pub fn validate(&self) -> Result<Submission, Vec<FieldError>> {
        let mut errors = Vec::new();
        let name = self.name.trim();
        let email = self.email.trim();
        let subject = self.subject.trim();
        let message = self.message.trim();

        let inquiry = overview::inquiry_type(&self.inquiry_type);
        if inquiry.is_none() {
            errors.push(FieldError {
                field: "inquiry_type",
                message: "Okänd typ av förfrågan",
            });
        }
        if name.is_empty() {
            errors.push(FieldError {
                field: "name",
                message: "Namn krävs",
            });
        }
        if email.is_empty() {
            errors.push(FieldError {
                field: "email",
                message: "E-post krävs",
            });
        } else if !is_plausible_email(email) {
            errors.push(FieldError {
                field: "email",
                message: "Ange en giltig e-postadress",
            });
        }
        if subject.is_empty() {
            errors.push(FieldError {
                field: "subject",
                message: "Ämne krävs",
            });
        }
        if message.is_empty() {
            errors.push(FieldError {
                field: "message",
                message: "Meddelande krävs",
            });
        } else if message.chars().count() > MAX_MESSAGE_CHARS {
            errors.push(FieldError {
                field: "message",
                message: "Meddelandet är för långt",
            });
        }
        for (field, value) in [
            ("name", name),
            ("email", email),
            ("organization", self.organization.trim()),
            ("subject", subject),
        ] {
            if value.chars().count() > MAX_FIELD_CHARS {
                errors.push(FieldError {
                    field,
                    message: "Fältet är för långt",
                });
            }
        }

        match inquiry {
            Some(inquiry) if errors.is_empty() => Ok(Submission {
                reference: Uuid::new_v4(),
                inquiry,
                name: name.to_string(),
                email: email.to_string(),
                organization: Some(self.organization.trim())
                    .filter(|o| !o.is_empty())
                    .map(ToString::to_string),
                subject: subject.to_string(),
                message: message.to_string(),
            }),
            _ => Err(errors),
        }
    }
}

/// `local@domain` with both parts non-empty.
fn is_plausible_email(email: &str) -> bool {
    email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty() && !domain.contains('@'))
}

/// Simulates sending a submission: waits `delay`, then logs it.
pub async fn submit(submission: &Submission, delay: Duration) {
    tokio::time::sleep(delay).await;
    metrics::record_contact_submission(true);
    info!(
        reference = %submission.reference,
        inquiry = submission.inquiry.value,
        subject_chars = submission.subject.chars().count(),
        message_chars = submission.message.chars().count(),
        "contact submission received"
    );
}
