//! Declarative validation schema for the contact form.
//!
//! Each field carries an ordered list of rules. The first rule that fails
//! decides the field's message, so a field shows at most one error at a time.

use crate::contact::form::{ContactField, ContactFormData};
use crate::contact::messages::ValidationMessages;
use crate::i18n::Language;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;

// Patterns are shared by every schema instance
static NAME_REGEX: OnceLock<Regex> = OnceLock::new();
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
static LETTER_REGEX: OnceLock<Regex> = OnceLock::new();

fn name_regex() -> &'static Regex {
    NAME_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ\s]+$").expect("name pattern compiles")
    })
}

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
            .expect("email pattern compiles")
    })
}

fn phone_regex() -> &'static Regex {
    PHONE_REGEX.get_or_init(|| {
        Regex::new(r"^[+]?[0-9\s\-()]{10,}$").expect("phone pattern compiles")
    })
}

fn letter_regex() -> &'static Regex {
    LETTER_REGEX.get_or_init(|| {
        Regex::new(r"[a-zA-ZáéíóúÁÉÍÓÚñÑ]").expect("letter pattern compiles")
    })
}

/// Email syntax check: no leading dot and no `..` anywhere, on top of the
/// local@label.tld shape.
fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && email_regex().is_match(value)
}

#[derive(Debug, Clone)]
enum Rule {
    MinChars { min: usize, message: String },
    MaxChars { max: usize, message: String },
    Matches { regex: &'static Regex, message: String },
    Email { message: String },
}

impl Rule {
    /// Message of this rule if `value` violates it.
    fn check(&self, value: &str) -> Option<&str> {
        let passes = match self {
            Rule::MinChars { min, .. } => value.chars().count() >= *min,
            Rule::MaxChars { max, .. } => value.chars().count() <= *max,
            Rule::Matches { regex, .. } => regex.is_match(value),
            Rule::Email { .. } => is_email(value),
        };
        if passes {
            return None;
        }

        match self {
            Rule::MinChars { message, .. }
            | Rule::MaxChars { message, .. }
            | Rule::Matches { message, .. }
            | Rule::Email { message } => Some(message.as_str()),
        }
    }
}

#[derive(Debug, Clone)]
struct FieldRules {
    /// Empty input counts as "not provided" and skips every rule
    optional: bool,
    rules: Vec<Rule>,
}

impl FieldRules {
    fn required(rules: Vec<Rule>) -> Self {
        Self {
            optional: false,
            rules,
        }
    }

    fn optional(rules: Vec<Rule>) -> Self {
        Self {
            optional: true,
            rules,
        }
    }

    fn first_error(&self, value: &str) -> Option<&str> {
        if self.optional && value.is_empty() {
            return None;
        }
        self.rules.iter().find_map(|rule| rule.check(value))
    }
}

/// Immutable validator for [`ContactFormData`].
///
/// Building is deterministic: two schemas built from equal messages accept
/// and reject exactly the same inputs with the same messages.
#[derive(Debug, Clone)]
pub struct ContactSchema {
    name: FieldRules,
    email: FieldRules,
    phone: FieldRules,
    company: FieldRules,
    subject: FieldRules,
    message: FieldRules,
}

impl ContactSchema {
    pub fn new(messages: ValidationMessages) -> Self {
        let ValidationMessages {
            name,
            email,
            phone,
            company,
            subject,
            message,
        } = messages;

        Self {
            name: FieldRules::required(vec![
                Rule::MinChars {
                    min: 2,
                    message: name.min,
                },
                Rule::MaxChars {
                    max: 50,
                    message: name.max,
                },
                Rule::Matches {
                    regex: name_regex(),
                    message: name.invalid,
                },
            ]),
            email: FieldRules::required(vec![
                Rule::Email {
                    message: email.invalid,
                },
                Rule::MinChars {
                    min: 5,
                    message: email.min,
                },
                Rule::MaxChars {
                    max: 100,
                    message: email.max,
                },
            ]),
            phone: FieldRules::optional(vec![Rule::Matches {
                regex: phone_regex(),
                message: phone.invalid,
            }]),
            company: FieldRules::optional(vec![Rule::MaxChars {
                max: 50,
                message: company.max,
            }]),
            subject: FieldRules::required(vec![
                Rule::MinChars {
                    min: 1,
                    message: subject.required,
                },
                Rule::MaxChars {
                    max: 100,
                    message: subject.max,
                },
            ]),
            message: FieldRules::required(vec![
                Rule::MinChars {
                    min: 10,
                    message: message.min,
                },
                Rule::MaxChars {
                    max: 1000,
                    message: message.max,
                },
                Rule::Matches {
                    regex: letter_regex(),
                    message: message.invalid,
                },
            ]),
        }
    }

    /// Schema with the messages of `language`.
    pub fn for_language(language: Language) -> Self {
        Self::new(ValidationMessages::for_language(language))
    }

    fn rules(&self, field: ContactField) -> &FieldRules {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Company => &self.company,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// First violated rule's message for `value` in `field`.
    pub fn validate_field(&self, field: ContactField, value: &str) -> Option<&str> {
        self.rules(field).first_error(value)
    }

    /// Validate every field of `data` independently.
    pub fn validate(&self, data: &ContactFormData) -> ValidationOutcome {
        let errors = ContactField::ALL
            .into_iter()
            .filter_map(|field| {
                self.validate_field(field, data.get(field))
                    .map(|message| (field, message.to_string()))
            })
            .collect();

        ValidationOutcome { errors }
    }
}

/// Per-field result of validating a whole form.
///
/// Serializes as a map from field name to message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationOutcome {
    errors: BTreeMap<ContactField, String>,
}

impl ValidationOutcome {
    /// True iff every field passed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: ContactField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<ContactField, String> {
        &self.errors
    }
}
