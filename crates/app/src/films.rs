//! Film application service.

use std::sync::Arc;

use filmorate_core::{Clock, DomainError, DomainResult, Entity, FilmId, UserId};
use filmorate_films::{validate_film, Film, FilmDraft};
use filmorate_store::{EntityStore, InMemoryEntityStore};
use filmorate_users::User;

use crate::config::ServiceConfig;
use crate::dataset::SharedDataset;

pub struct FilmService<U = InMemoryEntityStore<User>, F = InMemoryEntityStore<Film>> {
    dataset: Arc<SharedDataset<U, F>>,
    clock: Arc<dyn Clock>,
    config: ServiceConfig,
}

impl<U, F> Clone for FilmService<U, F> {
    fn clone(&self) -> Self {
        Self {
            dataset: Arc::clone(&self.dataset),
            clock: Arc::clone(&self.clock),
            config: self.config.clone(),
        }
    }
}

impl<U, F> FilmService<U, F>
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
            dataset,
            clock,
            config,
        }
    }

    pub fn list_films(&self) -> DomainResult<Vec<Film>> {
        let data = self.dataset.read()?;
        Ok(data.films.list().into_iter().cloned().collect())
    }

    pub fn create_film(&self, draft: FilmDraft) -> DomainResult<Film> {
        let valid = validate_film(&draft, self.clock.today())?;

        let mut data = self.dataset.write()?;
        let film = data
            .films
            .create(Film::from_validated(FilmId::default(), valid));
        tracing::info!(film_id = %film.id(), "film created");
        Ok(film)
    }

    /// Replace the fields of an existing film. Its likes are kept.
    pub fn update_film(&self, draft: FilmDraft) -> DomainResult<Film> {
        let Some(id) = draft.id else {
            tracing::warn!("film update without id");
            return Err(DomainError::validation("id must be specified"));
        };
        let today = self.clock.today();

        let mut data = self.dataset.write()?;
        let Some(existing) = data.films.find_by_id(id) else {
            tracing::warn!(film_id = %id, "film update for unknown id");
            return Err(DomainError::not_found(Film::KIND, id));
        };
        let mut film = existing.clone();

        film.apply_update(validate_film(&draft, today)?);
        let film = data.films.update(film)?;
        tracing::info!(film_id = %id, "film updated");
        Ok(film)
    }

    pub fn get_film(&self, id: FilmId) -> DomainResult<Film> {
        let data = self.dataset.read()?;
        data.films
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(Film::KIND, id))
    }

    pub fn add_like(&self, film: FilmId, user: UserId) -> DomainResult<()> {
        let mut guard = self.dataset.write()?;
        let data = &mut *guard;
        filmorate_social::add_like(&mut data.films, &data.users, film, user)?;
        tracing::info!(film_id = %film, user_id = %user, "like added");
        Ok(())
    }

    pub fn remove_like(&self, film: FilmId, user: UserId) -> DomainResult<()> {
        let mut guard = self.dataset.write()?;
        let data = &mut *guard;
        filmorate_social::remove_like(&mut data.films, &data.users, film, user)?;
        tracing::info!(film_id = %film, user_id = %user, "like removed");
        Ok(())
    }

    /// Most-liked films. `None` falls back to the configured default count.
    pub fn get_popular(&self, count: Option<i64>) -> DomainResult<Vec<Film>> {
        let count = count.unwrap_or(self.config.default_popular_count);
        let data = self.dataset.read()?;
        filmorate_social::popular(&data.films, count).inspect_err(|e| {
            tracing::warn!(count, "popular films rejected: {e}");
        })
    }
}
