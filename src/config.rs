use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Configuration validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("config field '{field}' must not be empty")]
    EmptyList { field: &'static str },

    #[error("config field 'delay_unit_ms' must be greater than zero")]
    ZeroDelayUnit,
}

/// Tunable constants used by the effect handlers.
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```toml
/// default_title = "Crawlbin"
/// delay_unit_ms = 250
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Title used when `random_title` is absent.
    pub default_title: String,
    /// Pool `random_title` draws from.
    pub titles: Vec<String>,
    /// Realm in the `WWW-Authenticate` header sent with a 401.
    pub auth_realm: String,
    /// Length of one delay unit in milliseconds. `delay_3` waits three units.
    pub delay_unit_ms: u64,
    /// Directive paths `*_canonical_random` appends to the base URL.
    pub random_url_fragments: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_title: "Crawlbin".to_owned(),
            titles: vec!["Crawlbin".to_owned(), "Crawlbin Alternative".to_owned()],
            auth_realm: "crawlbin:".to_owned(),
            delay_unit_ms: 1000,
            random_url_fragments: [
                "meta_no_index+meta_nofollow",
                "response_301",
                "meta_noindex",
                "canonical_self+vary_user_agent",
                "canonical_self",
                "vary_user_agent",
                "meta_noindex+canonical_random",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`CrawlbinError`](crate::CrawlbinError) on TOML syntax errors,
    /// unknown keys, or failed validation.
    pub fn from_toml_str(input: &str) -> Result<Self, crate::CrawlbinError> {
        let config: EngineConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CrawlbinError`](crate::CrawlbinError) on I/O, parse, or
    /// validation failure.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, crate::CrawlbinError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_toml_str(&input)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError`] if a list the handlers draw from is empty or
    /// the delay unit is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.titles.is_empty() {
            return Err(ConfigError::EmptyList { field: "titles" });
        }
        if self.random_url_fragments.is_empty() {
            return Err(ConfigError::EmptyList {
                field: "random_url_fragments",
            });
        }
        if self.delay_unit_ms == 0 {
            return Err(ConfigError::ZeroDelayUnit);
        }
        Ok(())
    }

    #[must_use]
    pub fn delay_unit(&self) -> Duration {
        Duration::from_millis(self.delay_unit_ms)
    }
}
