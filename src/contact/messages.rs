//! Per-field validation messages injected into the contact schema.
//!
//! The schema never looks inside these strings; they are whatever the string
//! provider returns for the active locale.

use crate::i18n::{Language, LanguageStrings};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMessages {
    pub min: String,
    pub max: String,
    pub invalid: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessages {
    pub invalid: String,
    pub min: String,
    pub max: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneMessages {
    pub invalid: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyMessages {
    pub max: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectMessages {
    pub required: String,
    pub max: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageMessages {
    pub min: String,
    pub max: String,
    pub invalid: String,
}

/// One message per violation kind, per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationMessages {
    pub name: NameMessages,
    pub email: EmailMessages,
    pub phone: PhoneMessages,
    pub company: CompanyMessages,
    pub subject: SubjectMessages,
    pub message: MessageMessages,
}

impl ValidationMessages {
    /// Resolve every message through the `validation.<field>.<kind>` keys.
    pub fn from_strings(strings: &LanguageStrings) -> Self {
        let t = |key: &str| strings.translate(key).to_string();

        Self {
            name: NameMessages {
                min: t("validation.name.min"),
                max: t("validation.name.max"),
                invalid: t("validation.name.invalid"),
            },
            email: EmailMessages {
                invalid: t("validation.email.invalid"),
                min: t("validation.email.min"),
                max: t("validation.email.max"),
            },
            phone: PhoneMessages {
                invalid: t("validation.phone.invalid"),
            },
            company: CompanyMessages {
                max: t("validation.company.max"),
            },
            subject: SubjectMessages {
                required: t("validation.subject.required"),
                max: t("validation.subject.max"),
            },
            message: MessageMessages {
                min: t("validation.message.min"),
                max: t("validation.message.max"),
                invalid: t("validation.message.invalid"),
            },
        }
    }

    pub fn for_language(language: Language) -> Self {
        Self::from_strings(language.strings())
    }
}
