//! World-owned items lying on the ground.

use loot_core::{CarriedItem, Vec3};

/// An item that no carrier owns.
///
/// Produced by a carrier drop.  While `pickup_armed` is `true` any collector
/// may claim it via `World::pickup_item`; claiming moves the item out of the
/// world.
#[derive(Clone, Debug, PartialEq)]
pub struct LooseItem {
    pub item:         CarriedItem,
    pub position:     Vec3,
    pub pickup_armed: bool,
}

impl LooseItem {
    pub fn armed(item: CarriedItem, position: Vec3) -> Self {
        Self { item, position, pickup_armed: true }
    }
}
