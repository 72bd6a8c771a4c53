use filmorate_core::{DomainResult, Entity};

/// Authoritative id → entity mapping for one entity type.
///
/// Lookups return `Option`; deciding whether absence is an error is left to
/// the caller.
pub trait EntityStore<E: Entity>: Send + Sync {
    /// All entities in listing order (ascending id, i.e. insertion order).
    fn list(&self) -> Vec<&E>;

    /// Assign a fresh identifier, insert, and return the stored entity.
    ///
    /// Any identifier already present on `entity` is overwritten.
    fn create(&mut self, entity: E) -> E;

    /// Replace the stored entity with the same id.
    ///
    /// Fails with `NotFound` if no such record exists; never inserts.
    fn update(&mut self, entity: E) -> DomainResult<E>;

    fn find_by_id(&self, id: E::Id) -> Option<&E>;

    /// Mutable access for in-place relation-set changes.
    fn find_by_id_mut(&mut self, id: E::Id) -> Option<&mut E>;

    fn contains(&self, id: E::Id) -> bool {
        self.find_by_id(id).is_some()
    }

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
