//! Internationalization (i18n) module for the site's locales.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all served locales
//! - `language`: Validated `Language` type backed by the registry
//! - `strings`: Localized string tables, addressable by dotted key
//! - `router`: Locale-aware path rewriting for the language switcher
//!
//! # Example
//!
//! ```rust,ignore
//! use travel_site::i18n::{switch_locale_path, Language};
//!
//! let french = Language::from_code("fr")?;
//! assert_eq!(switch_locale_path("/es/contacto", french), "/fr/contacto");
//! ```

mod language;
mod registry;
mod router;
mod strings;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use router::{detect_locale, localize_href, switch_locale_path};
pub use strings::LanguageStrings;
