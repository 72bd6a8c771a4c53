//! Users domain module.
//!
//! Business rules for user records: the entity itself, the caller-supplied
//! draft, and field validation. Pure domain logic (no IO, no storage).

pub mod user;
pub mod validation;

pub use user::{User, UserDraft, ValidatedUser};
pub use validation::validate_user;
