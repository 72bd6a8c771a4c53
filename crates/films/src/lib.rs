//! Films domain module.
//!
//! Business rules for film records: the entity, the caller-supplied draft and
//! field validation. Pure domain logic (no IO, no storage).

pub mod film;
pub mod validation;

pub use film::{Film, FilmDraft, ValidatedFilm};
pub use validation::{
    validate_film, EARLIEST_RELEASE_DATE, MAX_DESCRIPTION_CHARS,
};
