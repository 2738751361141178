//! Contact form state and validation.
//!
//! Validation is a pure function over the field values — calling it twice
//! with the same input yields the same error map, and it never touches the
//! form itself.  The caller decides what to do with the result (block the
//! submit, surface messages, …).

use once_cell::sync::Lazy;
use regex::Regex;

/// Letters, spaces, hyphens, apostrophes — nothing else.
static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z\s'-]+$").unwrap());

/// A loose `local@domain.tld` shape.  Deliberately not RFC 5322.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub const MESSAGE_MAX: usize = 1000;

/// The four form fields, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: &[Field] = &[Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your name",
            Field::Email => "your@email.com",
            Field::Subject => "What's this about?",
            Field::Message => "Tell me about your project or idea...",
        }
    }
}

/// In-memory form values.  Created empty, mutated on input, cleared on a
/// confirmed successful send.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Field → message mapping.  A `None` slot means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Subject => self.subject.as_deref(),
            Field::Message => self.message.as_deref(),
        }
    }

    /// Drop the error for one field — called when the user edits it.
    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Subject => self.subject = None,
            Field::Message => self.message = None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.subject.is_none() && self.message.is_none()
    }
}

/// Validate all fields at once.  Trims before measuring.
pub fn validate(form: &ContactForm) -> FieldErrors {
    let mut errors = FieldErrors::default();

    let name = form.name.trim();
    if name.is_empty() {
        errors.name = Some("Name is required".into());
    } else if name.chars().count() < 2 {
        errors.name = Some("Name must be at least 2 characters".into());
    } else if name.chars().count() > 50 {
        errors.name = Some("Name must be less than 50 characters".into());
    } else if !NAME_RE.is_match(name) {
        errors.name = Some("Name can only contain letters, spaces, hyphens, and apostrophes".into());
    }

    let email = form.email.trim();
    if email.is_empty() {
        errors.email = Some("Email is required".into());
    } else if !EMAIL_RE.is_match(email) {
        errors.email = Some("Please enter a valid email address".into());
    }

    let subject = form.subject.trim();
    if subject.is_empty() {
        errors.subject = Some("Subject is required".into());
    } else if subject.chars().count() < 5 {
        errors.subject = Some("Subject must be at least 5 characters".into());
    } else if subject.chars().count() > 100 {
        errors.subject = Some("Subject must be less than 100 characters".into());
    }

    let message = form.message.trim();
    if message.is_empty() {
        errors.message = Some("Message is required".into());
    } else if message.chars().count() < 10 {
        errors.message = Some("Message must be at least 10 characters".into());
    } else if message.chars().count() > MESSAGE_MAX {
        errors.message = Some("Message must be less than 1000 characters".into());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    #[test]
    fn every_field_can_fail_at_once() {
        let errors = validate(&form("A", "bad", "", ""));
        assert!(errors.name.is_some());
        assert!(errors.email.is_some());
        assert!(errors.subject.is_some());
        assert!(errors.message.is_some());
    }

    #[test]
    fn a_well_formed_submission_passes() {
        let errors = validate(&form(
            "Jo Ann",
            "a@b.com",
            "Hello there",
            "This is a valid message body.",
        ));
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn validation_is_idempotent() {
        let f = form("A", "bad", "", "");
        assert_eq!(validate(&f), validate(&f));
    }

    #[test]
    fn values_are_trimmed_before_measuring() {
        // "  A  " trims to one character — still too short.
        let errors = validate(&form("  A  ", " a@b.com ", "  Hello there  ", "  long enough message  "));
        assert!(errors.name.is_some());
        assert!(errors.email.is_none());
        assert!(errors.subject.is_none());
        assert!(errors.message.is_none());
    }

    #[test]
    fn name_pattern_rejects_digits_and_symbols() {
        assert!(validate(&form("R2D2", "a@b.com", "Hello there", "A perfectly fine message.")).name.is_some());
        assert!(validate(&form("Jo-Ann O'Neil", "a@b.com", "Hello there", "A perfectly fine message."))
            .name
            .is_none());
    }

    #[test]
    fn email_shape_checks() {
        for bad in ["plainaddress", "missing@tld", "two@@a.com", "spaces in@a.com", "@nolocal.com"] {
            let errors = validate(&form("Jo Ann", bad, "Hello there", "A perfectly fine message."));
            assert!(errors.email.is_some(), "{bad} should be rejected");
        }
        for good in ["a@b.com", "first.last@sub.domain.io"] {
            let errors = validate(&form("Jo Ann", good, "Hello there", "A perfectly fine message."));
            assert!(errors.email.is_none(), "{good} should be accepted");
        }
    }

    #[test]
    fn length_boundaries() {
        // Name: 2..=50.
        assert!(validate(&form("Jo", "a@b.com", "Hello there", "A perfectly fine message.")).name.is_none());
        let fifty_one = "a".repeat(51);
        assert!(validate(&form(&fifty_one, "a@b.com", "Hello there", "A perfectly fine message."))
            .name
            .is_some());

        // Subject: 5..=100.
        assert!(validate(&form("Jo", "a@b.com", "Hi yo", "A perfectly fine message.")).subject.is_none());
        assert!(validate(&form("Jo", "a@b.com", "Hiya", "A perfectly fine message.")).subject.is_some());

        // Message: 10..=1000.
        assert!(validate(&form("Jo", "a@b.com", "Hello there", "0123456789")).message.is_none());
        assert!(validate(&form("Jo", "a@b.com", "Hello there", "012345678")).message.is_some());
        let too_long = "m".repeat(1001);
        assert!(validate(&form("Jo", "a@b.com", "Hello there", &too_long)).message.is_some());
    }

    #[test]
    fn per_field_clear_on_edit() {
        let mut errors = validate(&form("A", "bad", "", ""));
        errors.clear(Field::Email);
        assert!(errors.email.is_none());
        assert!(errors.name.is_some()); // others untouched
    }
}
