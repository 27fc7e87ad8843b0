//! Jargon configuration file handling (jargon.toml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level configuration
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct JargonConfig {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub ui: UiSection,
}

/// Service connection settings
#[derive(Debug, Deserialize, Serialize)]
pub struct ApiSection {
    /// Deployment target, e.g. `http://localhost:8000`
    #[serde(default)]
    pub base_url: Option<String>,
    /// Per-request timeout
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Display settings
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiSection {
    /// Display language; detected from the system when unset
    #[serde(default)]
    pub locale: Option<String>,
}

impl JargonConfig {
    pub fn parse(src: &str) -> Result<Self> {
        toml::from_str(src).context("invalid configuration")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// An explicitly given path must exist; the implicit `./jargon.toml`
    /// may be absent.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new("jargon.toml");
                if default.exists() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

/// Deployment target precedence: flag, then `JARGON_API_URL`, then the
/// config file, then the local development default.
pub fn resolve_base_url(flag: Option<&str>, config: &JargonConfig) -> String {
    if let Some(url) = flag {
        return url.to_string();
    }
    if let Ok(url) = std::env::var(jargon_api::ENV_BASE_URL) {
        if !url.trim().is_empty() {
            return url.trim().to_string();
        }
    }
    if let Some(url) = &config.api.base_url {
        return url.clone();
    }
    "http://localhost:8000".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_gets_defaults() {
        let config = JargonConfig::parse("").unwrap();
        assert_eq!(config.api.base_url, None);
        assert_eq!(config.api.timeout_ms, 10_000);
        assert_eq!(config.ui.locale, None);
    }

    #[test]
    fn sections_parse() {
        let config = JargonConfig::parse(
            r#"
            [api]
            base_url = "http://api.example.com"
            timeout_ms = 2500

            [ui]
            locale = "es-MX"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("http://api.example.com"));
        assert_eq!(config.api.timeout_ms, 2500);
        assert_eq!(config.ui.locale.as_deref(), Some("es-MX"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config = JargonConfig::parse("[future]\nx = 1").unwrap();
        assert_eq!(config.api.timeout_ms, 10_000);
    }

    #[test]
    fn flag_beats_config_file() {
        let config = JargonConfig::parse("[api]\nbase_url = \"http://from-file\"").unwrap();
        assert_eq!(
            resolve_base_url(Some("http://from-flag"), &config),
            "http://from-flag"
        );
    }

    #[test]
    fn config_file_beats_default() {
        let config = JargonConfig::parse("[api]\nbase_url = \"http://from-file\"").unwrap();
        assert_eq!(resolve_base_url(None, &config), "http://from-file");
    }
}
