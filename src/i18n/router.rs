//! Locale-aware path rewriting for the language switcher.
//!
//! Every function here is pure: callers decide how to navigate to the result.

use crate::i18n::{Language, LanguageRegistry};

/// Compute the path to navigate to when switching to `target`.
///
/// If `current_path` starts with `/{locale}` for a registered locale, that
/// prefix is replaced by `/{target}`; otherwise `/{target}` is prepended.
/// Defined for every input, including `/` and the empty string.
///
/// ```ignore
/// assert_eq!(switch_locale_path("/es/contacto", Language::ENGLISH), "/en/contacto");
/// assert_eq!(switch_locale_path("/contacto", Language::FRENCH), "/fr/contacto");
/// ```
pub fn switch_locale_path(current_path: &str, target: Language) -> String {
    if let Some(rest) = strip_locale_prefix(current_path) {
        return format!("/{}{}", target, rest);
    }

    if current_path.is_empty() {
        format!("/{}", target)
    } else if current_path.starts_with('/') {
        format!("/{}{}", target, current_path)
    } else {
        format!("/{}/{}", target, current_path)
    }
}

/// Locale whose prefix `path` starts with, or the canonical locale.
pub fn detect_locale(path: &str) -> Language {
    LanguageRegistry::get()
        .list_all()
        .into_iter()
        .find(|config| path.starts_with(&format!("/{}", config.code)))
        .and_then(|config| Language::from_code(config.code).ok())
        .unwrap_or_else(Language::canonical)
}

/// Prefix a site-relative link (e.g. a nav entry) with `language`.
///
/// The home link `/` maps to the locale root `/{code}`.
pub fn localize_href(href: &str, language: Language) -> String {
    if href == "/" {
        return format!("/{}", language);
    }
    switch_locale_path(href, language)
}

/// Remainder of `path` after a leading `/{locale}`, if any.
fn strip_locale_prefix(path: &str) -> Option<&str> {
    LanguageRegistry::get()
        .list_all()
        .into_iter()
        .find_map(|config| path.strip_prefix('/')?.strip_prefix(config.code))
}
