//! Contact form checks. Nothing is ever sent anywhere.

use crate::config::FormConfig;

/// Keeps only ASCII digits (the phone field accepts nothing else).
pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Field values as read from the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Outcome of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    /// At least one field is blank; the form keeps its contents.
    Incomplete,
    /// Every field is filled; the form is cleared.
    Accepted,
}

impl ContactForm {
    /// Checks that every field is filled. Text fields are trimmed first; the
    /// phone field is already digits only.
    pub fn submit(&self) -> FormStatus {
        let filled = !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.phone.is_empty()
            && !self.message.trim().is_empty();
        if filled {
            FormStatus::Accepted
        } else {
            FormStatus::Incomplete
        }
    }
}

impl FormStatus {
    pub fn message(self, config: &FormConfig) -> &str {
        match self {
            Self::Incomplete => &config.incomplete_message,
            Self::Accepted => &config.accepted_message,
        }
    }

    pub fn color(self, config: &FormConfig) -> &str {
        match self {
            Self::Incomplete => &config.incomplete_color,
            Self::Accepted => &config.accepted_color,
        }
    }

    /// Whether the form should be reset after showing the status.
    pub fn resets_form(self) -> bool {
        matches!(self, Self::Accepted)
    }
}
