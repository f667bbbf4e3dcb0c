//! Language type: validated locale representation.
//!
//! A `Language` can only be constructed for a code present and enabled in the
//! registry, so holding one is proof that the site serves that locale.

use crate::i18n::strings::{ENGLISH_STRINGS, FRENCH_STRINGS, SPANISH_STRINGS};
use crate::i18n::{LanguageConfig, LanguageRegistry, LanguageStrings};
use anyhow::{bail, Result};
use std::fmt;

/// A validated site locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "es")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };

    pub const SPANISH: Language = Language { code: "es" };

    pub const FRENCH: Language = Language { code: "fr" };

    /// Create a Language from a locale code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is registered and enabled
    /// * `Err` if the code is unknown or the locale is disabled
    ///
    /// # Example
    /// ```ignore
    /// let spanish = Language::from_code("es")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// All enabled locales, in switcher order.
    pub fn all() -> Vec<Language> {
        LanguageRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Language { code: config.code })
            .collect()
    }

    /// Get the canonical (default) locale.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not found in the registry. This cannot happen for
    /// a Language built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language (e.g., "Español").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the canonical locale.
    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }

    /// Localized string table for this locale.
    pub fn strings(&self) -> &'static LanguageStrings {
        match self.code {
            "es" => &SPANISH_STRINGS,
            "fr" => &FRENCH_STRINGS,
            _ => &ENGLISH_STRINGS,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_constants() {
        assert_eq!(Language::ENGLISH.code(), "en");
        assert_eq!(Language::SPANISH.code(), "es");
        assert_eq!(Language::FRENCH.code(), "fr");
        assert_eq!(Language::FRENCH.name(), "French");
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_known_locales() {
        for code in ["es", "en", "fr"] {
            let language = Language::from_code(code).expect("Should succeed");
            assert_eq!(language.code(), code);
        }
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("de");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert!(Language::from_code("ES").is_err());
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    // ==================== canonical / all Tests ====================

    #[test]
    fn test_canonical_returns_english() {
        let canonical = Language::canonical();
        assert_eq!(canonical, Language::ENGLISH);
        assert!(canonical.is_canonical());
        assert!(!Language::SPANISH.is_canonical());
    }

    #[test]
    fn test_all_lists_every_locale() {
        assert_eq!(
            Language::all(),
            vec![Language::SPANISH, Language::ENGLISH, Language::FRENCH]
        );
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_language_equality() {
        assert_eq!(Language::ENGLISH, Language::from_code("en").unwrap());
        assert_ne!(Language::ENGLISH, Language::SPANISH);
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(Language::FRENCH.to_string(), "fr");
        assert_eq!(format!("/{}", Language::SPANISH), "/es");
    }

    // ==================== Config Access Tests ====================

    #[test]
    fn test_native_name() {
        assert_eq!(Language::ENGLISH.native_name(), "English");
        assert_eq!(Language::SPANISH.native_name(), "Español");
        assert_eq!(Language::FRENCH.native_name(), "Français");
    }

    #[test]
    fn test_strings_match_locale() {
        assert_eq!(Language::SPANISH.strings().submit_button, "Enviar Mensaje");
        assert_eq!(Language::ENGLISH.strings().submit_button, "Send Message");
        assert_eq!(Language::FRENCH.strings().submit_button, "Envoyer le message");
    }
}
