//! Runtime configuration.
//!
//! Loaded from an optional TOML file with `IPTV_CATALOG_*` environment
//! overrides layered on top; every field carries a serde default so an empty
//! config is valid.

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub resolver: ResolverConfig,
}

impl AppConfig {
    /// Load configuration, layering defaults, an optional TOML file and
    /// environment overrides (`IPTV_CATALOG_RESOLVER__CATALOG_CONCURRENCY`
    /// and friends).
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        let config: AppConfig = figment
            .merge(Env::prefixed("IPTV_CATALOG_").split("__"))
            .extract()
            .context("failed to load configuration")?;
        info!(
            catalog_concurrency = config.resolver.catalog_concurrency,
            lookup_timeout = %config.resolver.lookup_timeout,
            "configuration loaded"
        );
        Ok(config)
    }
}

/// Tuning for the entitlement resolver's catalog fan-out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Upper bound on in-flight catalog lookups.
    #[serde(default = "default_catalog_concurrency")]
    pub catalog_concurrency: usize,
    /// Per-lookup deadline, humantime syntax.
    #[serde(default = "default_lookup_timeout")]
    pub lookup_timeout: String,
}

impl ResolverConfig {
    /// Parsed lookup deadline; malformed values fall back to the default.
    pub fn lookup_timeout(&self) -> Duration {
        humantime::parse_duration(&self.lookup_timeout)
            .unwrap_or(DEFAULT_LOOKUP_TIMEOUT)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            catalog_concurrency: default_catalog_concurrency(),
            lookup_timeout: default_lookup_timeout(),
        }
    }
}

const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

fn default_catalog_concurrency() -> usize {
    8
}

fn default_lookup_timeout() -> String {
    "5s".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = AppConfig::default();
        assert_eq!(config.resolver.catalog_concurrency, 8);
        assert_eq!(config.resolver.lookup_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn malformed_timeout_falls_back_to_default() {
        let config = ResolverConfig {
            lookup_timeout: "not a duration".to_string(),
            ..ResolverConfig::default()
        };
        assert_eq!(config.lookup_timeout(), DEFAULT_LOOKUP_TIMEOUT);
    }

    #[test]
    fn toml_fragment_overrides_defaults() {
        let figment = Figment::from(Serialized::defaults(AppConfig::default())).merge(
            figment::providers::Toml::string("[resolver]\ncatalog_concurrency = 2\n"),
        );
        let config: AppConfig = figment.extract().unwrap();
        assert_eq!(config.resolver.catalog_concurrency, 2);
        assert_eq!(config.resolver.lookup_timeout, "5s");
    }
}
