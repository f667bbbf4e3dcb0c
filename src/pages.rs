//! Localized page models served as JSON to the front end.
//!
//! Layout and styling live in the front end; these structs only carry the
//! copy, links and form metadata each page needs.

use crate::contact::channels::{contact_channels, social_links, ContactChannel, SocialLink};
use crate::contact::{ContactField, SubjectOption, MESSAGE_MAX_CHARS};
use crate::i18n::{localize_href, switch_locale_path, Language, LanguageStrings};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LanguageOption {
    pub code: &'static str,
    pub label: &'static str,
    pub flag: &'static str,
    pub native_name: &'static str,
    /// Where the switcher navigates for this locale
    pub href: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Header {
    pub brand: &'static str,
    pub tagline: &'static str,
    pub nav: Vec<NavLink>,
    pub language_caption: &'static str,
    pub languages: Vec<LanguageOption>,
    pub book_now: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub locale: &'static str,
    pub header: Header,
    pub title: &'static str,
    pub description: &'static str,
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    pub name: ContactField,
    pub label: &'static str,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubjectView {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactFormView {
    pub title: &'static str,
    pub fields: Vec<FieldView>,
    pub subjects: Vec<SubjectView>,
    pub submit_button: &'static str,
    pub loading_button: &'static str,
    pub message_max_chars: usize,
    /// Counter text for an empty message (e.g. "0/1000 characters")
    pub message_counter: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactPage {
    pub locale: &'static str,
    pub header: Header,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub badge: &'static str,
    pub form: ContactFormView,
    pub contact_info_title: &'static str,
    pub channels: Vec<ContactChannel>,
    pub social_media_title: &'static str,
    pub social: Vec<SocialLink>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotFoundPage {
    pub status: u16,
    pub title: &'static str,
    pub description: &'static str,
    pub go_back_label: &'static str,
    pub go_back_href: String,
}

/// Site-relative nav entries, before localization.
fn nav_entries(strings: &LanguageStrings) -> [(&'static str, &'static str); 5] {
    [
        ("/", strings.nav_home),
        ("/destinos", strings.nav_destinations),
        ("/experiencias", strings.nav_experiences),
        ("/ofertas", strings.nav_offers),
        ("/contacto", strings.nav_contact),
    ]
}

/// Shared header for a page rendered at `current_path` in `language`.
pub fn header(language: Language, current_path: &str) -> Header {
    let strings = language.strings();

    let nav = nav_entries(strings)
        .into_iter()
        .map(|(href, label)| {
            let href = localize_href(href, language);
            NavLink {
                label,
                active: href == current_path,
                href,
            }
        })
        .collect();

    let languages = Language::all()
        .into_iter()
        .map(|option| {
            let config = option.config();
            LanguageOption {
                code: config.code,
                label: config.label,
                flag: config.flag,
                native_name: config.native_name,
                href: switch_locale_path(current_path, option),
                selected: option == language,
            }
        })
        .collect();

    Header {
        brand: strings.brand,
        tagline: strings.tagline,
        nav,
        language_caption: strings.language,
        languages,
        book_now: strings.book_now,
    }
}

pub fn home_page(language: Language) -> HomePage {
    let strings = language.strings();
    HomePage {
        locale: language.code(),
        header: header(language, &localize_href("/", language)),
        title: strings.home_meta_title,
        description: strings.home_meta_description,
        hero_title: strings.home_hero_title,
        hero_subtitle: strings.home_hero_subtitle,
    }
}

pub fn contact_page(language: Language) -> ContactPage {
    let strings = language.strings();

    let fields = ContactField::ALL
        .into_iter()
        .map(|field| FieldView {
            name: field,
            label: field.label(strings),
            required: field.is_required(),
            placeholder: match field {
                ContactField::Company => Some(strings.field_company_placeholder),
                _ => None,
            },
        })
        .collect();

    let subjects = SubjectOption::ALL
        .into_iter()
        .map(|option| SubjectView {
            value: option.value(),
            label: option.label(strings),
        })
        .collect();

    ContactPage {
        locale: language.code(),
        header: header(language, &localize_href("/contacto", language)),
        title: strings.contact_title,
        subtitle: strings.contact_subtitle,
        badge: strings.contact_badge,
        form: ContactFormView {
            title: strings.form_title,
            fields,
            subjects,
            submit_button: strings.submit_button,
            loading_button: strings.loading_button,
            message_max_chars: MESSAGE_MAX_CHARS,
            message_counter: message_counter(strings, 0),
        },
        contact_info_title: strings.contact_info_title,
        channels: contact_channels(strings),
        social_media_title: strings.social_media_title,
        social: social_links(),
    }
}

pub fn not_found_page(language: Language) -> NotFoundPage {
    let strings = language.strings();
    NotFoundPage {
        status: 404,
        title: strings.not_found_title,
        description: strings.not_found_description,
        go_back_label: strings.not_found_go_back,
        go_back_href: localize_href("/", language),
    }
}

/// Fill the message length counter, e.g. "12/1000 caracteres".
pub fn message_counter(strings: &LanguageStrings, count: usize) -> String {
    strings
        .message_counter
        .replace("{count}", &count.to_string())
        .replace("{max}", &MESSAGE_MAX_CHARS.to_string())
}
