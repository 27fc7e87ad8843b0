//! Jargon internationalization
//!
//! Maps fixed UI string keys to display text in the user's language:
//! - locale normalization and a single-level fallback chain
//!   (`es-MX` -> `es` -> default locale)
//! - a flat `key = value` catalog format with built-in `en` and `es` tables
//! - an explicit [`Strings`] resolver constructed at startup and passed by
//!   reference to consumers (no process-wide singleton)
//!
//! A key missing from every catalog in the chain resolves to the key itself;
//! resolution never panics.

mod catalog;
mod error;
pub mod keys;
mod locale;
mod locales;
mod strings;

pub use catalog::{Catalog, CatalogParseError};
pub use error::I18nError;
pub use locale::{base_locale, detect_locale, fallback_chain, normalize_locale};
pub use locales::{DEFAULT_LOCALE, EN_CATALOG, ES_CATALOG};
pub use strings::Strings;
