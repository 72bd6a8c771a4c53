//! Entity trait: identity + continuity across state changes.

use serde::{Deserialize, Serialize};

use crate::id::SequentialId;

/// The kinds of entity the system tracks.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    User,
    Film,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Film => "film",
        }
    }
}

impl core::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entity marker + minimal interface.
///
/// Stores rely on `assign_id` to stamp a freshly allocated identifier onto a
/// record, overriding whatever the caller put there.
pub trait Entity: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Strongly-typed entity identifier.
    type Id: SequentialId;

    /// Which kind of entity this is (used in `NotFound` errors).
    const KIND: EntityKind;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;

    fn assign_id(&mut self, id: Self::Id);
}
