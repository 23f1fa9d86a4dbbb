use std::fmt;

use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    /// Value of the `id`/`name` attribute on the form control.
    pub fn id(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::Name => "Your Name",
            ContactField::Email => "your.email@example.com",
            ContactField::Subject => "What's this about?",
            ContactField::Message => "Tell me about your project...",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(ContactField),
    #[error("could not reach the contact service: {0}")]
    Request(String),
    #[error("the contact service rejected the message (status {0})")]
    Rejected(u16),
}

/// Live contents of the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A complete message, ready to hand to a submitter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Copy of the form with one field replaced.
    pub fn with(&self, field: ContactField, value: String) -> Self {
        let mut next = self.clone();
        next.set(field, value);
        next
    }

    /// Every field must hold something other than whitespace. The email is not checked further.
    pub fn validate(&self) -> Result<ContactMessage, ContactError> {
        if let Some(missing) = ContactField::ALL
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
        {
            return Err(ContactError::MissingField(missing));
        }

        Ok(ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Let's build something.".to_string(),
        }
    }

    #[test]
    fn starts_empty() {
        let form = ContactForm::default();
        for field in ContactField::ALL {
            assert_eq!(form.get(field), "");
        }
    }

    #[test]
    fn set_touches_only_one_field() {
        let form = ContactForm::default().with(ContactField::Subject, "Hi".to_string());
        assert_eq!(form.subject, "Hi");
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.message.is_empty());
    }

    #[test]
    fn complete_form_validates() {
        let message = filled().validate().unwrap();
        assert_eq!(message.name, "Ada");
        assert_eq!(message.subject, "Hello");
    }

    #[test]
    fn reports_first_missing_field() {
        let form = filled()
            .with(ContactField::Email, String::new())
            .with(ContactField::Message, String::new());
        assert_eq!(form.validate(), Err(ContactError::MissingField(ContactField::Email)));
    }

    #[test]
    fn whitespace_counts_as_missing() {
        let form = filled().with(ContactField::Name, "   ".to_string());
        assert_eq!(form.validate(), Err(ContactError::MissingField(ContactField::Name)));
    }

    #[test]
    fn email_shape_is_not_checked() {
        let form = filled().with(ContactField::Email, "not-an-email".to_string());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn message_serializes_with_plain_field_names() {
        let json = serde_json::to_value(filled().validate().unwrap()).unwrap();
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["message"], "Let's build something.");
    }

    #[test]
    fn errors_read_naturally() {
        assert_eq!(
            ContactError::MissingField(ContactField::Subject).to_string(),
            "Subject is required"
        );
        assert_eq!(
            ContactError::Rejected(503).to_string(),
            "the contact service rejected the message (status 503)"
        );
    }
}
