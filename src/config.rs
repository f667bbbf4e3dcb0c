use crate::i18n::Language;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,
    pub site_url: String,

    // Locales
    pub default_locale: Language,

    // Contact form
    pub contact_webhook_url: Option<String>,
    pub simulated_send_delay_ms: u64,
    pub status_reset_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            site_url: "https://mexicotravel.vercel.app".to_string(),
            default_locale: Language::canonical(),
            contact_webhook_url: None,
            simulated_send_delay_ms: 2000,
            status_reset_secs: 5,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let default_locale = match std::env::var("DEFAULT_LOCALE") {
            Ok(code) => {
                Language::from_code(&code).context("DEFAULT_LOCALE is not a served locale")?
            }
            Err(_) => defaults.default_locale,
        };

        Ok(Self {
            // Server
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            site_url: std::env::var("SITE_URL").unwrap_or(defaults.site_url),

            // Locales
            default_locale,

            // Contact form - webhook is optional, simulated delivery otherwise
            contact_webhook_url: std::env::var("CONTACT_WEBHOOK_URL")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            simulated_send_delay_ms: std::env::var("SIMULATED_SEND_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.simulated_send_delay_ms),
            status_reset_secs: std::env::var("STATUS_RESET_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.status_reset_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 6] = [
        "PORT",
        "SITE_URL",
        "DEFAULT_LOCALE",
        "CONTACT_WEBHOOK_URL",
        "SIMULATED_SEND_DELAY_MS",
        "STATUS_RESET_SECS",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env().expect("Should load defaults");

        assert_eq!(config.port, 8080);
        assert_eq!(config.default_locale, Language::ENGLISH);
        assert_eq!(config.contact_webhook_url, None);
        assert_eq!(config.simulated_send_delay_ms, 2000);
        assert_eq!(config.status_reset_secs, 5);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("PORT", "3000");
        std::env::set_var("DEFAULT_LOCALE", "es");
        std::env::set_var("CONTACT_WEBHOOK_URL", "https://hooks.example.com/c");
        std::env::set_var("STATUS_RESET_SECS", "10");

        let config = Config::from_env().expect("Should load");
        clear_env();

        assert_eq!(config.port, 3000);
        assert_eq!(config.default_locale, Language::SPANISH);
        assert_eq!(
            config.contact_webhook_url.as_deref(),
            Some("https://hooks.example.com/c")
        );
        assert_eq!(config.status_reset_secs, 10);
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_unknown_locale() {
        clear_env();
        std::env::set_var("DEFAULT_LOCALE", "de");

        let result = Config::from_env();
        clear_env();

        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_blank_webhook_url_is_ignored() {
        clear_env();
        std::env::set_var("CONTACT_WEBHOOK_URL", "  ");

        let config = Config::from_env().expect("Should load");
        clear_env();

        assert_eq!(config.contact_webhook_url, None);
    }

    #[test]
    #[serial]
    fn test_unparsable_numbers_fall_back() {
        clear_env();
        std::env::set_var("PORT", "eighty");

        let config = Config::from_env().expect("Should load");
        clear_env();

        assert_eq!(config.port, 8080);
    }
}
