//! Contact form validation and delivery.
//!
//! Delivery is an external collaborator: the site ships with
//! [`SimulatedTransport`], which performs no network I/O.

use std::fmt;

use thiserror::Error;

use crate::config::contact;
use crate::models::{ToastKind, ToastOptions};

/// A required contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("missing required fields: {}", join(.0))]
    Incomplete(Vec<Field>),
}

fn join(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("message delivery failed: {0}")]
pub struct TransportError(pub String);

/// Raw field values as read from the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A validated message with trimmed fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Trims every field and requires all three to be non-empty.
    pub fn validate(&self) -> Result<ContactMessage, ContactError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        let missing: Vec<Field> = [
            (Field::Name, name),
            (Field::Email, email),
            (Field::Message, message),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(ContactError::Incomplete(missing));
        }

        Ok(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

/// Delivers validated messages.
pub trait ContactTransport {
    fn send(&self, message: &ContactMessage) -> Result<(), TransportError>;
}

/// Local-only delivery: logs the message and reports success.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedTransport;

impl ContactTransport for SimulatedTransport {
    fn send(&self, message: &ContactMessage) -> Result<(), TransportError> {
        crate::utils::log::debug(&format!(
            "contact message from {} <{}> ({} chars)",
            message.name,
            message.email,
            message.message.chars().count()
        ));
        Ok(())
    }
}

/// Result of a submit attempt, as the form should present it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub toast: &'static str,
    pub options: ToastOptions,
    /// Whether the form fields should be reset.
    pub clear_form: bool,
}

/// Validates and delivers `form`, describing the notification to show.
pub fn submit(form: &ContactForm, transport: &impl ContactTransport) -> SubmitOutcome {
    let message = match form.validate() {
        Ok(message) => message,
        Err(e) => {
            crate::utils::log::debug(&format!("contact form rejected: {e}"));
            return SubmitOutcome::warning(contact::INCOMPLETE_MESSAGE);
        }
    };

    match transport.send(&message) {
        Ok(()) => SubmitOutcome {
            toast: contact::SENT_MESSAGE,
            options: ToastOptions::kind(ToastKind::Success),
            clear_form: true,
        },
        Err(e) => {
            crate::utils::log::warn(&e.to_string());
            SubmitOutcome::warning(contact::FAILED_MESSAGE)
        }
    }
}

impl SubmitOutcome {
    fn warning(toast: &'static str) -> Self {
        Self {
            toast,
            options: ToastOptions::kind(ToastKind::Warning),
            clear_form: false,
        }
    }
}
