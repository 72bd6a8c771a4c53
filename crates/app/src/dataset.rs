//! The one shared dataset.
//!
//! Both stores (and the relation sets embedded in their entities) sit behind
//! a single `RwLock`. Every mutation holds the write lock for its whole
//! duration, so a reader never observes one half of a friendship edge.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use filmorate_core::{DomainError, DomainResult};
use filmorate_films::Film;
use filmorate_store::{EntityStore, InMemoryEntityStore};
use filmorate_users::User;

/// User and film stores, owned together.
#[derive(Debug, Default)]
pub struct Dataset<U = InMemoryEntityStore<User>, F = InMemoryEntityStore<Film>> {
    pub users: U,
    pub films: F,
}

impl<U, F> Dataset<U, F>
where
    U: EntityStore<User>,
    F: EntityStore<Film>,
{
    pub fn new(users: U, films: F) -> Self {
        Self { users, films }
    }
}

/// Lock-guarded [`Dataset`] shared by the services.
#[derive(Debug, Default)]
pub struct SharedDataset<U = InMemoryEntityStore<User>, F = InMemoryEntityStore<Film>> {
    inner: RwLock<Dataset<U, F>>,
}

impl<U, F> SharedDataset<U, F>
where
    U: EntityStore<User>,
    F: EntityStore<Film>,
{
    pub fn new(dataset: Dataset<U, F>) -> Self {
        Self {
            inner: RwLock::new(dataset),
        }
    }

    pub fn read(&self) -> DomainResult<RwLockReadGuard<'_, Dataset<U, F>>> {
        self.inner
            .read()
            .map_err(|_| DomainError::internal("dataset lock poisoned"))
    }

    pub fn write(&self) -> DomainResult<RwLockWriteGuard<'_, Dataset<U, F>>> {
        self.inner
            .write()
            .map_err(|_| DomainError::internal("dataset lock poisoned"))
    }
}

impl SharedDataset {
    pub fn in_memory() -> Self {
        Self::new(Dataset::default())
    }
}
