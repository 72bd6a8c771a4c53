use std::sync::Arc;

use filmorate_core::{Clock, SystemClock};
use filmorate_films::Film;
use filmorate_store::{EntityStore, InMemoryEntityStore};
use filmorate_users::User;

use crate::config::ServiceConfig;
use crate::dataset::SharedDataset;
use crate::films::FilmService;
use crate::users::UserService;

/// Both services, sharing one dataset and one clock.
pub struct Services<U = InMemoryEntityStore<User>, F = InMemoryEntityStore<Film>> {
    pub users: UserService<U, F>,
    pub films: FilmService<U, F>,
}

impl<U, F> Clone for Services<U, F> {
    fn clone(&self) -> Self {
        Self {
            users: self.users.clone(),
            films: self.films.clone(),
        }
    }
}

impl<U, F> Services<U, F>
where
    U: EntityStore<User>,
    F: EntityStore<Film>,
{
    pub fn new(
        dataset: Arc<SharedDataset<U, F>>,
        clock: Arc<dyn Clock>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            users: UserService::new(Arc::clone(&dataset), Arc::clone(&clock)),
            films: FilmService::new(dataset, clock, config),
        }
    }
}

impl Services {
    /// In-memory wiring with the system clock and environment config.
    pub fn in_memory() -> Self {
        let config = ServiceConfig::from_env();
        tracing::info!(
            default_popular_count = config.default_popular_count,
            "building in-memory services"
        );
        Self::new(
            Arc::new(SharedDataset::in_memory()),
            Arc::new(SystemClock),
            config,
        )
    }
}
