use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use filmorate_core::{Entity, EntityKind, FilmId, UserId};

/// Caller-supplied film payload, before validation and id assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilmDraft {
    /// Ignored on create; required on update.
    pub id: Option<FilmId>,
    pub name: String,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    /// Unit-agnostic; must be positive.
    pub duration: i32,
}

/// A draft that passed validation (see [`crate::validate_film`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedFilm {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) release_date: NaiveDate,
    pub(crate) duration: i32,
}

/// Entity: Film.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    id: FilmId,
    name: String,
    description: Option<String>,
    release_date: NaiveDate,
    duration: i32,
    #[serde(default)]
    likes: BTreeSet<UserId>,
}

impl Film {
    pub fn from_validated(id: FilmId, valid: ValidatedFilm) -> Self {
        Self {
            id,
            name: valid.name,
            description: valid.description,
            release_date: valid.release_date,
            duration: valid.duration,
            likes: BTreeSet::new(),
        }
    }

    /// Replace every validated field, keeping the id and the likes set.
    pub fn apply_update(&mut self, valid: ValidatedFilm) {
        self.name = valid.name;
        self.description = valid.description;
        self.release_date = valid.release_date;
        self.duration = valid.duration;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn release_date(&self) -> NaiveDate {
        self.release_date
    }

    pub fn duration(&self) -> i32 {
        self.duration
    }

    pub fn likes(&self) -> &BTreeSet<UserId> {
        &self.likes
    }

    pub fn like_count(&self) -> usize {
        self.likes.len()
    }

    pub fn is_liked_by(&self, user: UserId) -> bool {
        self.likes.contains(&user)
    }

    /// Returns `true` if the like was new.
    pub fn add_like(&mut self, user: UserId) -> bool {
        self.likes.insert(user)
    }

    /// Returns `true` if the like existed.
    pub fn remove_like(&mut self, user: UserId) -> bool {
        self.likes.remove(&user)
    }
}

impl Entity for Film {
    type Id = FilmId;

    const KIND: EntityKind = EntityKind::Film;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn assign_id(&mut self, id: Self::Id) {
        self.id = id;
    }
}
