//! `filmorate-core`: shared domain building blocks.
//!
//! This crate contains **pure domain** primitives (no storage, no transport):
//! identifiers, the entity trait, the error model and the clock abstraction.

pub mod clock;
pub mod entity;
pub mod error;
pub mod id;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entity::{Entity, EntityKind};
pub use error::{DomainError, DomainResult};
pub use id::{FilmId, SequentialId, UserId};
