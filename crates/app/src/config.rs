//! Service configuration loaded from the environment.

use thiserror::Error;

/// Number of films returned by `get_popular` when the caller gives no count.
pub const DEFAULT_POPULAR_COUNT: i64 = 10;

const POPULAR_COUNT_VAR: &str = "FILMORATE_POPULAR_DEFAULT_COUNT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidPopularCount { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Used when `get_popular` is called without a count.
    pub default_popular_count: i64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_popular_count: DEFAULT_POPULAR_COUNT,
        }
    }
}

impl ServiceConfig {
    /// Read settings from the process environment.
    ///
    /// Invalid values are logged and replaced by their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok()).unwrap_or_else(|e| {
            tracing::warn!("{e}; using defaults");
            Self::default()
        })
    }

    /// Build a config from an arbitrary key lookup (the environment, a map in tests).
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(POPULAR_COUNT_VAR) {
            let count = raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigError::InvalidPopularCount {
                    var: POPULAR_COUNT_VAR,
                    value: raw.clone(),
                })?;
            config.default_popular_count = count;
        }

        Ok(config)
    }
}
