use chrono::NaiveDate;

use filmorate_core::{Entity, FilmId, UserId};
use filmorate_films::{validate_film, Film, FilmDraft};
use filmorate_store::{EntityStore, InMemoryEntityStore};
use filmorate_users::{validate_user, User, UserDraft};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// A store holding users 1..=n with logins `user{n}`.
pub fn user_store(n: u64) -> InMemoryEntityStore<User> {
    let mut store = InMemoryEntityStore::new();
    for i in 1..=n {
        let draft = UserDraft {
            id: None,
            email: format!("user{i}@example.com"),
            login: format!("user{i}"),
            name: None,
            birthday: NaiveDate::from_ymd_opt(1990, 1, 1),
        };
        let valid = validate_user(&draft, today()).unwrap();
        store.create(User::from_validated(UserId::default(), valid));
    }
    store
}

/// A store holding films 1..=n named `film{n}`.
pub fn film_store(n: u64) -> InMemoryEntityStore<Film> {
    let mut store = InMemoryEntityStore::new();
    for i in 1..=n {
        let draft = FilmDraft {
            id: None,
            name: format!("film{i}"),
            description: None,
            release_date: NaiveDate::from_ymd_opt(2000, 1, 1),
            duration: 90,
        };
        let valid = validate_film(&draft, today()).unwrap();
        store.create(Film::from_validated(FilmId::default(), valid));
    }
    store
}

pub fn ids<E: Entity>(entities: &[E]) -> Vec<u64> {
    entities.iter().map(|e| filmorate_core::SequentialId::raw(e.id())).collect()
}
