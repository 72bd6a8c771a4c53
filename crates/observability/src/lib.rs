//! Process-wide tracing setup shared by binaries and tests.

/// Environment-driven logging settings.
pub mod config;

/// Subscriber installation (filters, output format).
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig, ObservabilityConfigError};

/// Initialize logging from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(&ObservabilityConfig::from_env());
}
