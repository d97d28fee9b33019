//! Contact form model: field values, field-level errors, submission status.
//!
//! DESIGN
//! ======
//! The form moves `Idle -> Submitting -> Submitted` and back to `Idle` via
//! `reset`. Validation is synchronous and pure; a failing field never hides
//! another field's error. The async wait between `begin_submit` and
//! `complete_submit` lives in the component, so this model stays testable
//! without a runtime.
//!
//! Values are trimmed before checking and lengths count characters, not bytes.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::collections::BTreeMap;

use crate::util::email::is_valid_email;

/// Inputs on the contact form, in render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Phone, Self::Message];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Message => "Message",
        }
    }

    /// Maximum length in characters after trimming.
    #[must_use]
    pub fn max_len(self) -> usize {
        match self {
            Self::Name => 100,
            Self::Email => 255,
            Self::Phone => 20,
            Self::Message => 1000,
        }
    }

    /// DOM id / name attribute of the input.
    #[must_use]
    pub fn input_id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Message => "message",
        }
    }
}

/// Validation failure attached to a single field.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{} is required", .0.label())]
    Required(ContactField),
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("{} must be at most {max} characters", .field.label())]
    TooLong { field: ContactField, max: usize },
}

pub type FieldErrors = BTreeMap<ContactField, FieldError>;

/// Validated, trimmed payload handed to the submission boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

/// Contact form state owned by the contact section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    phone: String,
    message: String,
    errors: FieldErrors,
    status: FormStatus,
    form_error: Option<String>,
}

/// Check one raw input against its field's constraints.
///
/// # Errors
///
/// Returns the first constraint the trimmed value violates.
pub fn validate_field(field: ContactField, raw: &str) -> Result<String, FieldError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(FieldError::Required(field));
    }
    if field == ContactField::Email && !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }
    let max = field.max_len();
    if value.chars().count() > max {
        return Err(FieldError::TooLong { field, max });
    }
    Ok(value.to_owned())
}

impl ContactForm {
    #[must_use]
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Message => &mut self.message,
        }
    }

    #[must_use]
    pub fn error(&self, field: ContactField) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Form-level message from a failed submission, if any.
    #[must_use]
    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    #[must_use]
    pub fn status(&self) -> FormStatus {
        self.status
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.status == FormStatus::Submitted
    }

    /// Store a keystroke. Clears this field's error only.
    pub fn set_field(&mut self, field: ContactField, value: String) {
        *self.value_mut(field) = value;
        self.errors.remove(&field);
        self.form_error = None;
    }

    /// Validate every field independently.
    ///
    /// # Errors
    ///
    /// Returns one error per failing field.
    pub fn validate(&self) -> Result<ContactSubmission, FieldErrors> {
        let mut errors = FieldErrors::new();
        let mut take = |field: ContactField| match validate_field(field, self.value(field)) {
            Ok(value) => value,
            Err(err) => {
                errors.insert(field, err);
                String::new()
            }
        };
        let submission = ContactSubmission {
            name: take(ContactField::Name),
            email: take(ContactField::Email),
            phone: take(ContactField::Phone),
            message: take(ContactField::Message),
        };
        if errors.is_empty() { Ok(submission) } else { Err(errors) }
    }

    /// Handle the submit action from `Idle`.
    ///
    /// Returns the payload and enters `Submitting` when every field passes.
    /// Otherwise records the field errors and stays `Idle`.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.status != FormStatus::Idle {
            return None;
        }
        self.form_error = None;
        match self.validate() {
            Ok(submission) => {
                self.errors.clear();
                self.status = FormStatus::Submitting;
                Some(submission)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Finish an in-flight submission: clear all values, enter `Submitted`.
    pub fn complete_submit(&mut self) -> bool {
        if self.status != FormStatus::Submitting {
            return false;
        }
        for field in ContactField::ALL {
            self.value_mut(field).clear();
        }
        self.status = FormStatus::Submitted;
        true
    }

    /// Abort an in-flight submission with a form-level message. Input is kept.
    pub fn fail_submit(&mut self, message: impl Into<String>) -> bool {
        if self.status != FormStatus::Submitting {
            return false;
        }
        self.form_error = Some(message.into());
        self.status = FormStatus::Idle;
        true
    }

    /// "Send another message": `Submitted -> Idle` with a blank form.
    pub fn reset(&mut self) -> bool {
        if self.status != FormStatus::Submitted {
            return false;
        }
        *self = Self::default();
        true
    }
}
