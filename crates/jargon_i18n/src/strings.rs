use std::collections::HashMap;

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::I18nError;
use crate::locale::{detect_locale, fallback_chain, normalize_locale};
use crate::locales::{DEFAULT_LOCALE, EN_CATALOG, ES_CATALOG};

/// Locale-aware string table.
///
/// An explicit value, constructed once at startup and passed by reference
/// to whatever renders text. Resolution walks the fallback chain (active
/// locale, its base language, then the default locale); a key defined
/// nowhere resolves to the key itself.
#[derive(Debug, Clone)]
pub struct Strings {
    locale: String,
    default_locale: String,
    catalogs: HashMap<String, Catalog>,
}

impl Strings {
    /// An empty resolver. The active locale starts at the default.
    pub fn new(default_locale: impl Into<String>) -> Self {
        let default_locale = normalize_locale(&default_locale.into());
        Self {
            locale: default_locale.clone(),
            default_locale,
            catalogs: HashMap::new(),
        }
    }

    /// The built-in `en` and `es` tables, with the active locale taken from
    /// the host system when it reports one.
    pub fn with_builtin() -> Result<Self, I18nError> {
        let mut strings = Self::new(DEFAULT_LOCALE);
        strings.load_catalog_str("en", EN_CATALOG)?;
        strings.load_catalog_str("es", ES_CATALOG)?;
        if let Some(loc) = detect_locale() {
            strings.set_locale(&loc);
        }
        Ok(strings)
    }

    pub fn load_catalog(&mut self, locale: &str, catalog: Catalog) {
        self.catalogs.insert(normalize_locale(locale), catalog);
    }

    pub fn load_catalog_str(&mut self, locale: &str, src: &str) -> Result<(), I18nError> {
        let cat = Catalog::parse(src)?;
        self.load_catalog(locale, cat);
        Ok(())
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Switch the active locale. Empty input is ignored.
    pub fn set_locale(&mut self, locale: &str) {
        let loc = normalize_locale(locale);
        if loc.is_empty() || loc == self.locale {
            return;
        }
        debug!("locale: {} -> {}", self.locale, loc);
        self.locale = loc;
    }

    /// Look up a key without the key-as-text fallback.
    pub fn try_resolve(&self, key: &str) -> Option<&str> {
        for loc in fallback_chain(&self.locale, &self.default_locale) {
            if let Some(value) = self.catalogs.get(&loc).and_then(|cat| cat.get(key)) {
                return Some(value);
            }
        }
        None
    }

    /// Display text for a key.
    ///
    /// Falls back through the chain; a key defined in no catalog resolves
    /// to the key itself, so a stray lookup renders as its key instead of
    /// panicking.
    pub fn resolve(&self, key: &str) -> String {
        match self.try_resolve(key) {
            Some(value) => value.to_string(),
            None => {
                debug!(key, locale = %self.locale, "string key not found in any catalog");
                key.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;
    use pretty_assertions::assert_eq;

    fn fixture() -> Strings {
        let mut s = Strings::new("en");
        s.load_catalog_str("en", "greeting = Hello\nfarewell = Bye").unwrap();
        s.load_catalog_str("es", "greeting = Hola").unwrap();
        s
    }

    #[test]
    fn region_suffix_resolves_through_base_code() {
        let mut s = fixture();
        s.set_locale("es-MX");
        assert_eq!(s.resolve("greeting"), "Hola");
    }

    #[test]
    fn missing_key_falls_back_to_default_locale() {
        let mut s = fixture();
        s.set_locale("es");
        // `farewell` is not in the es catalog.
        assert_eq!(s.resolve("farewell"), "Bye");
    }

    #[test]
    fn unknown_locale_uses_default() {
        let mut s = fixture();
        s.set_locale("fr-FR");
        assert_eq!(s.resolve("greeting"), "Hello");
    }

    #[test]
    fn key_missing_everywhere_resolves_to_itself() {
        let s = fixture();
        assert_eq!(s.resolve("no.such.key"), "no.such.key");
        assert_eq!(s.try_resolve("no.such.key"), None);
    }

    #[test]
    fn empty_or_same_locale_is_ignored() {
        let mut s = fixture();
        s.set_locale("");
        assert_eq!(s.locale(), "en");
        s.set_locale("en");
        assert_eq!(s.locale(), "en");
    }

    #[test]
    fn android_style_locale_is_normalized() {
        let mut s = fixture();
        s.set_locale("es_MX");
        assert_eq!(s.locale(), "es-MX");
        assert_eq!(s.resolve("greeting"), "Hola");
    }

    #[test]
    fn builtin_resolver_translates_in_both_locales() {
        let mut s = Strings::with_builtin().unwrap();
        s.set_locale("en");
        assert_eq!(s.resolve(keys::SEARCH_TITLE), "Search");
        s.set_locale("es-419");
        assert_eq!(s.resolve(keys::SEARCH_TITLE), "Buscar");
    }
}
