//! Contact form draft
//!
//! The draft only lives for the duration of a request. A successful submit
//! logs the message locally; nothing is stored or sent anywhere.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    /// Form control label
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Nombre",
            ContactField::Email => "Email",
            ContactField::Message => "Mensaje",
        }
    }

    /// `name` attribute of the form control
    pub fn key(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }

    /// Field for a form control `name`, if it is one of ours
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Browsers strip leading and trailing whitespace from email inputs
    /// before the required check; text inputs and textareas keep it.
    fn normalize<'a>(&self, value: &'a str) -> &'a str {
        match self {
            ContactField::Email => value.trim(),
            ContactField::Name | ContactField::Message => value,
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactFormError {
    #[error("Missing required fields: {}", join_labels(.0))]
    Missing(Vec<ContactField>),
}

fn join_labels(fields: &[ContactField]) -> String {
    fields.iter().map(|f| f.label()).collect::<Vec<_>>().join(", ")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A draft that passed the required-field check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Build a draft from form pairs in submission order. Later values win;
    /// unrecognised names are skipped.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut draft = Self::default();
        for (key, value) in pairs {
            match ContactField::from_key(key.as_ref()) {
                Some(field) => draft.set_field(field, value),
                None => tracing::debug!("Ignoring unknown contact field '{}'", key.as_ref()),
            }
        }
        draft
    }

    /// Fields a browser's `required` check would reject, in form order.
    /// Only an empty value is missing; whitespace in name or message counts.
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|f| f.normalize(self.field(*f)).is_empty())
            .collect()
    }

    pub fn submit(&self) -> Result<ContactSubmission, ContactFormError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            tracing::debug!("Contact form rejected, missing: {:?}", missing);
            return Err(ContactFormError::Missing(missing));
        }

        let submission = ContactSubmission {
            name: self.name.clone(),
            email: ContactField::Email.normalize(&self.email).to_string(),
            message: self.message.clone(),
        };

        tracing::info!(
            name = %submission.name,
            email = %submission.email,
            message_len = submission.message.len(),
            "Form submitted: {}",
            submission.message
        );

        Ok(submission)
    }
}
