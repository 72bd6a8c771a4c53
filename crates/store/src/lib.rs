//! Entity storage abstractions.
//!
//! Stores own the id → entity mapping and hand out identifiers. They are
//! plain single-owner structures; synchronization lives one level up, where
//! both stores sit behind one lock.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryEntityStore;
pub use r#trait::EntityStore;
