use std::str::FromStr;

use thiserror::Error;

const FILTER_VAR: &str = "RUST_LOG";
const FORMAT_VAR: &str = "FILMORATE_LOG_FORMAT";
const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ObservabilityConfigError {
    #[error("{var} must be one of `json` or `pretty`, got {value:?}")]
    UnknownFormat { var: &'static str, value: String },
}

/// Output format of the installed subscriber.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Human-readable multi-line output for local runs.
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ObservabilityConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            _ => Err(ObservabilityConfigError::UnknownFormat {
                var: FORMAT_VAR,
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives, e.g. `info,filmorate_social=debug`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    /// Read `RUST_LOG` and `FILMORATE_LOG_FORMAT`.
    ///
    /// No subscriber exists yet at this point, so an unknown format is
    /// reported on stderr and JSON is used.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok()).unwrap_or_else(|e| {
            eprintln!("{e}; falling back to json logs");
            Self {
                filter: std::env::var(FILTER_VAR).unwrap_or_else(|_| DEFAULT_FILTER.to_string()),
                format: LogFormat::Json,
            }
        })
    }

    pub fn from_lookup<L>(lookup: L) -> Result<Self, ObservabilityConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let filter = lookup(FILTER_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());
        let format = match lookup(FORMAT_VAR) {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };
        Ok(Self { filter, format })
    }
}
