//! Language registry: Single source of truth for all supported site locales.
//!
//! Every locale the site serves is listed here. Route prefixes, the language
//! switcher and the string tables are all derived from this list, so adding a
//! locale starts with a new entry in `default_languages()`.

use std::sync::OnceLock;

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code, also the URL prefix (e.g., "en", "es", "fr")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Spanish", "French")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Español", "Français")
    pub native_name: &'static str,

    /// Short label shown in the language switcher (e.g., "EN")
    pub label: &'static str,

    /// Flag emoji shown next to the label
    pub flag: &'static str,

    /// Whether this is the canonical/default locale (only one should be true)
    pub is_canonical: bool,

    /// Whether this locale is served
    pub enabled: bool,
}

/// Global language registry singleton.
///
/// Initialized once on first access and immutable thereafter.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a locale configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the locale exists
    /// * `None` if the locale is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled locales, in switcher order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get all locales (including disabled ones).
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the canonical locale configuration.
    ///
    /// The canonical locale is served when a request names no locale.
    ///
    /// # Panics
    /// Panics if no canonical locale is found or if multiple canonical
    /// locales are defined (this indicates a configuration error).
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }

    /// Check if a locale code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

/// Default locale configurations.
///
/// Order matches the switcher in the site header: Spanish, English, French.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            label: "ES",
            flag: "🇪🇸",
            is_canonical: false,
            enabled: true,
        },
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            label: "EN",
            flag: "🇺🇸",
            is_canonical: true,
            enabled: true,
        },
        LanguageConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            label: "FR",
            flag: "🇫🇷",
            is_canonical: false,
            enabled: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_spanish() {
        let config = LanguageRegistry::get()
            .get_by_code("es")
            .expect("Spanish should be registered");

        assert_eq!(config.name, "Spanish");
        assert_eq!(config.native_name, "Español");
        assert_eq!(config.label, "ES");
        assert!(!config.is_canonical);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_french() {
        let config = LanguageRegistry::get()
            .get_by_code("fr")
            .expect("French should be registered");

        assert_eq!(config.native_name, "Français");
        assert_eq!(config.flag, "🇫🇷");
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LanguageRegistry::get().get_by_code("de").is_none());
        assert!(LanguageRegistry::get().get_by_code("").is_none());
    }

    #[test]
    fn test_list_enabled_in_switcher_order() {
        let codes: Vec<_> = LanguageRegistry::get()
            .list_enabled()
            .iter()
            .map(|lang| lang.code)
            .collect();

        assert_eq!(codes, vec!["es", "en", "fr"]);
    }

    #[test]
    fn test_list_all_matches_enabled() {
        let registry = LanguageRegistry::get();
        assert_eq!(registry.list_all().len(), registry.list_enabled().len());
    }

    #[test]
    fn test_canonical_returns_english() {
        let canonical = LanguageRegistry::get().canonical();

        assert_eq!(canonical.code, "en");
        assert!(canonical.is_canonical);
    }

    #[test]
    fn test_is_enabled() {
        let registry = LanguageRegistry::get();
        assert!(registry.is_enabled("es"));
        assert!(registry.is_enabled("en"));
        assert!(registry.is_enabled("fr"));
        assert!(!registry.is_enabled("pt"));
    }
}
