//! Bounded nearest-target scan.

use loot_core::Vec3;
use loot_world::{EntityHandle, EntityKind, World};

/// The nearest live entity of `kind` strictly within `range` of `from`.
///
/// Candidates are visited in the world's scan order; on equal distance the
/// first one visited wins.  Returns the handle, its position, and the
/// distance.
pub fn nearest_within(
    world: &World,
    kind:  EntityKind,
    from:  Vec3,
    range: f32,
) -> Option<(EntityHandle, Vec3, f32)> {
    let mut best: Option<(EntityHandle, Vec3, f32)> = None;
    for (handle, position) in world.live_of_kind(kind) {
        let d = from.distance(position);
        if d < range && best.is_none_or(|(_, _, bd)| d < bd) {
            best = Some((handle, position, d));
        }
    }
    best
}
