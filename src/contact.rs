//! Contact form: client-side validation for the simulated submission and the
//! payload for the mail relay.

use crate::notify::NotificationKind;
use serde::Serialize;
use std::future::Future;
use thiserror::Error;

pub const FORM_ID: &str = "contactForm";
pub const NAME_FIELD_ID: &str = "name";
pub const EMAIL_FIELD_ID: &str = "email";
pub const SUBJECT_FIELD_ID: &str = "subject";
pub const MESSAGE_FIELD_ID: &str = "message";
pub const SUBMIT_SELECTOR: &str = ".submit-btn";
pub const SENDING_LABEL: &str = "SENDING...";
pub const SIMULATED_LATENCY_MS: u32 = 1_500;

pub const RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const RELAY_SERVICE_ID: &str = "YOUR_SERVICE_ID";
pub const RELAY_TEMPLATE_ID: &str = "YOUR_TEMPLATE_ID";
pub const RELAY_PUBLIC_KEY: &str = "YOUR_PUBLIC_KEY";
pub const RELAY_SUCCESS_ALERT: &str = "Message sent successfully!";
pub const RELAY_FAILURE_ALERT: &str = "Failed to send message. Please try again.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingField,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

impl ContactFields {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [&self.name, &self.email, &self.subject, &self.message];
        if fields.iter().any(|value| value.is_empty()) {
            return Err(ValidationError::MissingField);
        }

        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(())
    }

    pub fn template_params(&self) -> TemplateParams<'_> {
        TemplateParams {
            from_name: &self.name,
            from_email: &self.email,
            subject: &self.subject,
            message: &self.message,
        }
    }

    pub fn relay_request(&self) -> RelayRequest<'_> {
        RelayRequest {
            service_id: RELAY_SERVICE_ID,
            template_id: RELAY_TEMPLATE_ID,
            user_id: RELAY_PUBLIC_KEY,
            template_params: self.template_params(),
        }
    }
}

/// `local@domain.tld`: exactly one `@`, no whitespace anywhere, and a dot in
/// the domain with at least one character on each side of it.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(index, c)| c == '.' && index > 0 && index + 1 < domain.len())
}

pub fn success_message(name: &str) -> String {
    format!("Thank you, {name}! Your message has been received. I'll get back to you soon!")
}

/// The parts of the page the simulated submission touches.
pub trait SubmissionView {
    /// Current label of the submit control, `None` when the form has none.
    fn submit_label(&self) -> Option<String>;
    fn set_submit(&self, label: &str, disabled: bool);
    fn notify(&self, message: &str, kind: NotificationKind);
    fn reset(&self);
}

/// Validated submission with a simulated network delay. Invalid input only
/// raises an error toast. Valid input shows the sending state, waits, thanks
/// the sender by name, clears the form and restores the submit control.
pub async fn submit<V, S, F>(view: &V, fields: &ContactFields, mut sleep: S)
where
    V: SubmissionView,
    S: FnMut(u32) -> F,
    F: Future<Output = ()>,
{
    if let Err(error) = fields.validate() {
        view.notify(&error.to_string(), NotificationKind::Error);
        return;
    }

    let original_label = view.submit_label();
    if original_label.is_some() {
        view.set_submit(SENDING_LABEL, true);
    }

    sleep(SIMULATED_LATENCY_MS).await;

    view.notify(&success_message(&fields.name), NotificationKind::Success);
    view.reset();
    if let Some(label) = original_label {
        view.set_submit(&label, false);
    }
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct TemplateParams<'a> {
    pub from_name: &'a str,
    pub from_email: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct RelayRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: TemplateParams<'a>,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RelayError {
    #[error("mail relay request failed: {0}")]
    Transport(String),
    #[error("mail relay rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}
