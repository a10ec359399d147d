//! The `MovementPort` trait.

use loot_core::Vec3;

/// Steering primitive consumed by behaviors.
///
/// Implementations decide how (and whether) the entity actually gets there;
/// callers must re-check distances on later ticks rather than assume arrival.
pub trait MovementPort {
    /// Start (or keep) steering toward `target`.
    fn move_toward(&mut self, target: Vec3);

    /// Halt immediately.
    fn stop(&mut self);

    /// Current world position of the moving entity.
    fn position(&self) -> Vec3;

    /// Distance from the entity to `target`.
    fn distance_to(&self, target: Vec3) -> f32 {
        self.position().distance(target)
    }

    /// `true` if `target` lies within `distance` (inclusive).
    fn is_within_distance(&self, target: Vec3, distance: f32) -> bool {
        self.distance_to(target) <= distance
    }
}
