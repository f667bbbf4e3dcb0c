//! Contact form data and the in-progress form state.

use crate::contact::schema::{ContactSchema, ValidationOutcome};
use crate::contact::submission::SubmissionState;
use crate::i18n::LanguageStrings;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Upper bound on the message length, shown in the character counter.
pub const MESSAGE_MAX_CHARS: usize = 1000;

/// Raw values typed into the contact form.
///
/// Every field is a string; an untouched field is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Free-text group size ("2 people, family of 4")
    pub company: String,
    pub subject: String,
    pub message: String,
}

impl ContactFormData {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Company => &self.company,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Company => &mut self.company,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL
            .iter()
            .all(|field| self.get(*field).is_empty())
    }
}

/// One of the six contact form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Company,
    Subject,
    Message,
}

impl ContactField {
    /// All fields in display order.
    pub const ALL: [ContactField; 6] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Company,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Company => "company",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    /// Whether the field must be filled in (marked with `*` in the form).
    pub fn is_required(&self) -> bool {
        !matches!(self, ContactField::Phone | ContactField::Company)
    }

    /// Localized label of the field.
    pub fn label(&self, strings: &LanguageStrings) -> &'static str {
        match self {
            ContactField::Name => strings.field_name,
            ContactField::Email => strings.field_email,
            ContactField::Phone => strings.field_phone,
            ContactField::Company => strings.field_company,
            ContactField::Subject => strings.field_subject,
            ContactField::Message => strings.field_message,
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown contact field: '{}'", s))
    }
}

/// Choices offered by the subject dropdown.
///
/// The form submits the `value`; validation treats it as a free string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectOption {
    General,
    Booking,
    Custom,
    Support,
    Group,
    Other,
}

impl SubjectOption {
    pub const ALL: [SubjectOption; 6] = [
        SubjectOption::General,
        SubjectOption::Booking,
        SubjectOption::Custom,
        SubjectOption::Support,
        SubjectOption::Group,
        SubjectOption::Other,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            SubjectOption::General => "general",
            SubjectOption::Booking => "booking",
            SubjectOption::Custom => "custom",
            SubjectOption::Support => "support",
            SubjectOption::Group => "group",
            SubjectOption::Other => "other",
        }
    }

    pub fn label(&self, strings: &LanguageStrings) -> &'static str {
        match self {
            SubjectOption::General => strings.subject_general,
            SubjectOption::Booking => strings.subject_booking,
            SubjectOption::Custom => strings.subject_custom,
            SubjectOption::Support => strings.subject_support,
            SubjectOption::Group => strings.subject_group,
            SubjectOption::Other => strings.subject_other,
        }
    }
}

/// Live state of one contact form instance.
///
/// Validation runs synchronously on every change. Errors are reported for
/// all fields, but only fields the visitor has edited expose them through
/// [`ContactForm::error`].
#[derive(Debug, Clone)]
pub struct ContactForm {
    data: ContactFormData,
    schema: ContactSchema,
    outcome: ValidationOutcome,
    touched: BTreeSet<ContactField>,
}

impl ContactForm {
    /// Mount an empty form validated by `schema`.
    pub fn new(schema: ContactSchema) -> Self {
        let data = ContactFormData::default();
        let outcome = schema.validate(&data);
        Self {
            data,
            schema,
            outcome,
            touched: BTreeSet::new(),
        }
    }

    pub fn data(&self) -> &ContactFormData {
        &self.data
    }

    /// Update one field and revalidate.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.data.set(field, value.into());
        self.touched.insert(field);
        self.outcome = self.schema.validate(&self.data);
    }

    /// Swap in a schema built for another locale, keeping typed values.
    pub fn rebuild_schema(&mut self, schema: ContactSchema) {
        self.schema = schema;
        self.outcome = self.schema.validate(&self.data);
    }

    /// Error to display next to `field`, if it was edited and is invalid.
    pub fn error(&self, field: ContactField) -> Option<&str> {
        if !self.touched.contains(&field) {
            return None;
        }
        self.outcome.error(field)
    }

    /// Validation result over every field, edited or not.
    pub fn outcome(&self) -> &ValidationOutcome {
        &self.outcome
    }

    pub fn is_valid(&self) -> bool {
        self.outcome.is_valid()
    }

    /// Whether any field differs from its initial empty value.
    pub fn is_dirty(&self) -> bool {
        !self.data.is_empty()
    }

    /// Submit is enabled for a valid, dirty form with no send in flight.
    pub fn can_submit(&self, state: SubmissionState) -> bool {
        self.is_valid() && self.is_dirty() && state != SubmissionState::Submitting
    }

    /// Characters typed in the message, for the `n/1000` counter.
    pub fn message_char_count(&self) -> usize {
        self.data.message.chars().count()
    }

    /// Back to the freshly mounted state.
    pub fn reset(&mut self) {
        self.data = ContactFormData::default();
        self.touched.clear();
        self.outcome = self.schema.validate(&self.data);
    }
}
