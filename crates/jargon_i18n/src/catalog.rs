use std::collections::HashMap;

use thiserror::Error;

/// A flat `key = value` string table for one locale.
///
/// Format:
/// - one entry per line: `key = value`
/// - comments: `# ...` or `// ...`; blank lines ignored
/// - keys: `[A-Za-z0-9][A-Za-z0-9_.-]*`
/// - values optionally quoted (`"..."` or `'...'`) with `\n`, `\r`, `\t`,
///   `\\`, `\"`, `\'` escapes
/// - duplicate keys: last one wins
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

#[derive(Debug, Error)]
#[error("catalog syntax error at line {line}: {msg}")]
pub struct CatalogParseError {
    pub line: usize,
    pub msg: String,
}

fn is_valid_key(key: &str) -> bool {
    let mut it = key.chars();
    match it.next() {
        Some(c) if c.is_ascii_alphanumeric() => {}
        _ => return false,
    }
    it.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-')
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn parse(src: &str) -> Result<Self, CatalogParseError> {
        let mut cat = Self::new();

        for (idx, raw) in src.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
                continue;
            }

            let Some(eq) = line.find('=') else {
                return Err(CatalogParseError {
                    line: line_no,
                    msg: "expected `key = value`".to_string(),
                });
            };

            let key = line[..eq].trim();
            if !is_valid_key(key) {
                return Err(CatalogParseError {
                    line: line_no,
                    msg: format!("invalid key `{key}` (allowed: [A-Za-z0-9][A-Za-z0-9_.-]*)"),
                });
            }

            let mut value = line[eq + 1..].trim().to_string();

            // Inline comments only apply to unquoted values.
            if !value.starts_with('"') && !value.starts_with('\'') {
                if let Some(pos) = value.find(" #").or_else(|| value.find(" //")) {
                    value.truncate(pos);
                    value = value.trim_end().to_string();
                }
            }

            let value = unquote(&value).map_err(|msg| CatalogParseError { line: line_no, msg })?;
            cat.insert(key, value);
        }

        Ok(cat)
    }
}

fn unquote(s: &str) -> Result<String, String> {
    for q in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(q) && s.ends_with(q) {
            return unescape(&s[1..s.len() - 1]);
        }
    }
    Ok(s.to_string())
}

fn unescape(s: &str) -> Result<String, String> {
    let mut out = String::with_capacity(s.len());
    let mut it = s.chars();
    while let Some(c) = it.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(n) = it.next() else {
            return Err("dangling escape".to_string());
        };
        match n {
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            '\\' => out.push('\\'),
            '"' => out.push('"'),
            '\'' => out.push('\''),
            // Unknown escapes pass through unchanged.
            _ => out.push(n),
        }
    }
    Ok(out)
}
