//! Liveness-checked entity references.

use std::fmt;

use loot_core::EntityId;

/// What a world entity is.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    /// An autonomous thief running stealing/capture behaviors.
    Thief,
    /// The protagonist whose build inventory can be robbed.
    Character,
    /// A resource deposit holding a count of units.
    Deposit,
    /// A worker unit that can be captured and carried off.
    Worker,
}

/// A weak reference to a world entity.
///
/// Copyable and never owning.  Resolve it through the `World` every time it
/// is used: a handle whose generation no longer matches the slot's
/// generation refers to an entity that has been despawned.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityHandle {
    pub id:         EntityId,
    pub generation: u32,
}

impl EntityHandle {
    #[inline]
    pub fn new(id: EntityId, generation: u32) -> Self {
        Self { id, generation }
    }
}

impl fmt::Display for EntityHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.id, self.generation)
    }
}
