//! Contact form: field values, focus styling, validation and the simulated
//! delivery delay.

use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;

use crate::error::ValidationError;

pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
        .is_match(value)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Subject,
        Field::Message,
    ];

    /// Form control name.
    pub fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Delivery {
    #[default]
    Idle,
    Sending {
        remaining: Duration,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    values: [String; 5],
    focused: [bool; 5],
    delivery: Delivery,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    pub fn focus(&mut self, field: Field) {
        self.focused[field.index()] = true;
    }

    /// A field keeps its focused styling after blur while it holds a value.
    pub fn blur(&mut self, field: Field) {
        if self.value(field).is_empty() {
            self.focused[field.index()] = false;
        }
    }

    pub fn is_focused(&self, field: Field) -> bool {
        self.focused[field.index()]
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if Field::ALL.iter().any(|field| self.value(*field).is_empty()) {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(self.value(Field::Email)) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }

    /// Validates and, when valid, starts the simulated delivery. A form that
    /// is already sending is left alone.
    pub fn submit(&mut self, delay: Duration) -> Result<(), ValidationError> {
        if self.is_sending() {
            return Ok(());
        }

        self.validate()?;
        self.delivery = Delivery::Sending { remaining: delay };
        Ok(())
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.delivery, Delivery::Sending { .. })
    }

    /// Returns true when the delivery completes during `elapsed`. The form is
    /// cleared at that point.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let Delivery::Sending { remaining } = self.delivery else {
            return false;
        };

        let remaining = remaining.saturating_sub(elapsed);
        if !remaining.is_zero() {
            self.delivery = Delivery::Sending { remaining };
            return false;
        }

        self.reset();
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(2_000);

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(Field::FirstName, "Ada");
        form.set(Field::LastName, "Lovelace");
        form.set(Field::Email, "ada@engine.org");
        form.set(Field::Subject, "project");
        form.set(Field::Message, "Hello there");
        form
    }

    #[test]
    fn email_pattern_cases() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("ab.co"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a b@c.de"));
    }

    #[test]
    fn missing_message_is_rejected_without_touching_fields() {
        let mut form = filled();
        form.set(Field::Message, "");

        assert_eq!(form.submit(DELAY), Err(ValidationError::MissingFields));
        assert!(!form.is_sending());
        assert_eq!(form.value(Field::FirstName), "Ada");
        assert_eq!(form.value(Field::Email), "ada@engine.org");
    }

    #[test]
    fn malformed_email_is_reported_after_required_fields() {
        let mut form = filled();
        form.set(Field::Email, "ada@engine");
        assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email address."
        );
    }

    #[test]
    fn valid_submission_clears_form_after_delay() {
        let mut form = filled();
        form.focus(Field::Message);

        assert_eq!(form.submit(DELAY), Ok(()));
        assert!(form.is_sending());
        assert!(!form.advance(Duration::from_millis(1_999)));
        assert_eq!(form.value(Field::Subject), "project");

        assert!(form.advance(Duration::from_millis(1)));
        assert!(!form.is_sending());
        assert!(Field::ALL.iter().all(|field| form.value(*field).is_empty()));
        assert!(!form.is_focused(Field::Message));
    }

    #[test]
    fn resubmitting_while_sending_keeps_original_deadline() {
        let mut form = filled();
        form.submit(DELAY).expect("valid form");
        form.advance(Duration::from_millis(1_500));
        form.submit(DELAY).expect("still valid");

        assert!(form.advance(Duration::from_millis(500)));
    }

    #[test]
    fn blur_keeps_focus_only_with_value() {
        let mut form = ContactForm::default();
        form.focus(Field::FirstName);
        form.blur(Field::FirstName);
        assert!(!form.is_focused(Field::FirstName));

        form.focus(Field::LastName);
        form.set(Field::LastName, "L");
        form.blur(Field::LastName);
        assert!(form.is_focused(Field::LastName));
    }
}
