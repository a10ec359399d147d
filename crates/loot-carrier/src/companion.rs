//! The visual companion of a carried item.

use loot_core::Vec3;

/// Owned visual object that exists exactly while an item is carried.
///
/// Its vertical bob is cosmetic.  Nothing outside the renderer may read
/// `position` for gameplay decisions; distances are always measured from the
/// carrier's owner.
#[derive(Clone, Debug, PartialEq)]
pub struct Companion {
    /// Current offset from the owner, including the bob.
    pub offset:   Vec3,
    /// World position: owner position + `offset`.
    pub position: Vec3,
}

impl Companion {
    pub(crate) fn spawn(owner_position: Vec3, offset: Vec3) -> Self {
        Self {
            offset,
            position: owner_position + offset,
        }
    }
}
