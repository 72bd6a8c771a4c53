use std::collections::BTreeMap;

use filmorate_core::{DomainError, DomainResult, Entity, SequentialId};

use super::r#trait::EntityStore;

/// In-memory entity store.
///
/// Backed by an ordered map so listing order is ascending id, which equals
/// insertion order because ids only grow.
#[derive(Debug, Clone)]
pub struct InMemoryEntityStore<E: Entity> {
    records: BTreeMap<E::Id, E>,
}

impl<E: Entity> InMemoryEntityStore<E> {
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }

    /// Next id = max existing id + 1, or 1 when empty.
    fn next_id(&self) -> E::Id {
        match self.records.last_key_value() {
            Some((max, _)) => max.next(),
            None => E::Id::from_raw(1),
        }
    }
}

impl<E: Entity> Default for InMemoryEntityStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> EntityStore<E> for InMemoryEntityStore<E> {
    fn list(&self) -> Vec<&E> {
        self.records.values().collect()
    }

    fn create(&mut self, mut entity: E) -> E {
        let id = self.next_id();
        entity.assign_id(id);
        self.records.insert(id, entity.clone());
        tracing::debug!(kind = %E::KIND, %id, "record created");
        entity
    }

    fn update(&mut self, entity: E) -> DomainResult<E> {
        let id = entity.id();
        match self.records.get_mut(&id) {
            Some(slot) => {
                *slot = entity.clone();
                tracing::debug!(kind = %E::KIND, %id, "record replaced");
                Ok(entity)
            }
            None => Err(DomainError::not_found(E::KIND, id.raw())),
        }
    }

    fn find_by_id(&self, id: E::Id) -> Option<&E> {
        self.records.get(&id)
    }

    fn find_by_id_mut(&mut self, id: E::Id) -> Option<&mut E> {
        self.records.get_mut(&id)
    }

    fn contains(&self, id: E::Id) -> bool {
        self.records.contains_key(&id)
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
