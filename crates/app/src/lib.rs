//! Application services: the synchronous API the outside world calls.
//!
//! Layout:
//! - `dataset.rs`: the single lock-guarded dataset holding both stores
//! - `users.rs` / `films.rs`: orchestration (validation, stores, relationship engine)
//! - `services.rs`: wiring of a dataset, clock and config into the services
//! - `config.rs`: environment-driven settings

pub mod config;
pub mod dataset;
pub mod films;
pub mod services;
pub mod users;

pub use config::{ConfigError, ServiceConfig, DEFAULT_POPULAR_COUNT};
pub use dataset::{Dataset, SharedDataset};
pub use films::FilmService;
pub use services::Services;
pub use users::UserService;
