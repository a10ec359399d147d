//! Slot identifiers for world entities and loose items.
//!
//! Both are plain `u32` slot numbers.  They carry no liveness information;
//! `loot_world::EntityHandle` pairs an `EntityId` with a generation for that.

use std::fmt;

macro_rules! slot_id {
    ($(#[$attr:meta])* $name:ident, $prefix:literal) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub u32);

        impl $name {
            /// Position of this slot in the owning column.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// `None` if `i` does not fit in a `u32` slot.
            pub fn from_index(i: usize) -> Option<Self> {
                u32::try_from(i).ok().map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

slot_id! {
    /// Slot of a world entity: thief, character, deposit or worker.
    EntityId, "e"
}

slot_id! {
    /// Slot of a dropped, unclaimed item lying in the world.
    ItemId, "item"
}
