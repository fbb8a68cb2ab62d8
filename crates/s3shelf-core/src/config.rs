//! Store configuration.
//!
//! Provides [`StoreConfig`] for configuring an in-memory store. Values can be
//! loaded from environment variables through [`StoreConfig::from_env`].

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::listing::DEFAULT_MAX_KEYS;

/// Store configuration.
///
/// # Examples
///
/// ```
/// use s3shelf_core::config::StoreConfig;
///
/// let config = StoreConfig::default();
/// assert_eq!(config.default_max_keys, 1000);
/// assert_eq!(config.log_level, "info");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Page size used when a listing request does not set max-keys.
    #[builder(default = DEFAULT_MAX_KEYS)]
    pub default_max_keys: usize,

    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("info"))]
    pub log_level: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            default_max_keys: DEFAULT_MAX_KEYS,
            log_level: String::from("info"),
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `S3_DEFAULT_MAX_KEYS` | `1000` |
    /// | `LOG_LEVEL` | `info` |
    ///
    /// Values that fail to parse keep their default.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`StoreConfig::from_env`], reading variables through `lookup`.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = lookup("S3_DEFAULT_MAX_KEYS") {
            if let Ok(n) = v.trim().parse::<usize>() {
                config.default_max_keys = n;
            }
        }
        if let Some(v) = lookup("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }
}
