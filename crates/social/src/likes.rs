//! Film likes and popularity ranking.

use filmorate_core::{DomainError, DomainResult, Entity, FilmId, UserId};
use filmorate_films::Film;
use filmorate_store::EntityStore;
use filmorate_users::User;

fn require_liker<U: EntityStore<User>>(users: &U, user: UserId) -> DomainResult<()> {
    if users.contains(user) {
        Ok(())
    } else {
        Err(DomainError::not_found(User::KIND, user))
    }
}

fn require_film_mut<F: EntityStore<Film>>(films: &mut F, film: FilmId) -> DomainResult<&mut Film> {
    films
        .find_by_id_mut(film)
        .ok_or_else(|| DomainError::not_found(Film::KIND, film))
}

/// Record that `user` likes `film`. Repeating a like has no effect.
///
/// The film is resolved before the user, so a call where both are missing
/// reports the film.
pub fn add_like<F, U>(films: &mut F, users: &U, film: FilmId, user: UserId) -> DomainResult<()>
where
    F: EntityStore<Film>,
    U: EntityStore<User>,
{
    if !films.contains(film) {
        return Err(DomainError::not_found(Film::KIND, film));
    }
    require_liker(users, user)?;

    if require_film_mut(films, film)?.add_like(user) {
        tracing::debug!(%film, %user, "like added");
    }
    Ok(())
}

/// Withdraw `user`'s like from `film`. Withdrawing an absent like is a no-op.
pub fn remove_like<F, U>(films: &mut F, users: &U, film: FilmId, user: UserId) -> DomainResult<()>
where
    F: EntityStore<Film>,
    U: EntityStore<User>,
{
    if !films.contains(film) {
        return Err(DomainError::not_found(Film::KIND, film));
    }
    require_liker(users, user)?;

    if require_film_mut(films, film)?.remove_like(user) {
        tracing::debug!(%film, %user, "like removed");
    }
    Ok(())
}

/// The `count` most-liked films, most likes first.
///
/// Films with equal like counts keep the store's listing order: the ranking
/// uses `sort_by`, which is stable.
pub fn popular<F: EntityStore<Film>>(films: &F, count: i64) -> DomainResult<Vec<Film>> {
    if count <= 0 {
        return Err(DomainError::validation(format!(
            "count must be positive, got {count}"
        )));
    }
    let limit = usize::try_from(count).unwrap_or(usize::MAX);

    let mut ranked = films.list();
    ranked.sort_by(|a, b| b.like_count().cmp(&a.like_count()));
    Ok(ranked.into_iter().take(limit).cloned().collect())
}
