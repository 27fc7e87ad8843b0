/// Normalize a reported locale identifier for lookup.
///
/// - Trims whitespace.
/// - Converts `_` to `-` (Android often reports `en_US`).
/// - Strips an encoding suffix (`es_MX.UTF-8` -> `es-MX`).
pub fn normalize_locale(s: &str) -> String {
    let s = s.trim();
    let s = s.split('.').next().unwrap_or(s);
    s.replace('_', "-")
}

/// The language subtag with any region suffix stripped (`es-MX` -> `es`).
///
/// Returns `None` for an empty input.
pub fn base_locale(locale: &str) -> Option<&str> {
    let lang = locale.split('-').next().unwrap_or("");
    if lang.is_empty() {
        None
    } else {
        Some(lang)
    }
}

/// Lookup order for a locale: the locale itself, its base language, then
/// the default locale. Deduplicated, order preserved.
///
/// - `fallback_chain("es-MX", "en")` -> `["es-MX", "es", "en"]`
/// - `fallback_chain("en", "en")` -> `["en"]`
pub fn fallback_chain(locale: &str, default: &str) -> Vec<String> {
    let loc = normalize_locale(locale);
    let mut chain: Vec<String> = Vec::with_capacity(3);

    if !loc.is_empty() {
        chain.push(loc.clone());
        if let Some(lang) = base_locale(&loc) {
            if !chain.iter().any(|c| c == lang) {
                chain.push(lang.to_string());
            }
        }
    }

    let def = normalize_locale(default);
    if !def.is_empty() && !chain.iter().any(|c| c == &def) {
        chain.push(def);
    }

    chain
}

/// Best-effort system locale: `sys_locale` first, then the `LANG` and
/// `LC_ALL` environment variables. `None` when nothing usable is reported.
pub fn detect_locale() -> Option<String> {
    if let Some(loc) = sys_locale::get_locale() {
        let loc = normalize_locale(&loc);
        if !loc.is_empty() {
            return Some(loc);
        }
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(raw) = std::env::var(var) {
            let loc = normalize_locale(&raw);
            // "C" and "POSIX" are not display languages.
            if !loc.is_empty() && loc != "C" && loc != "POSIX" {
                return Some(loc);
            }
        }
    }
    None
}
