//! The steering order a `Mover` is currently executing.

use loot_core::Vec3;

#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum MoveCommand {
    /// Not moving.
    #[default]
    Idle,
    /// Heading toward a point at normal speed.
    Seek(Vec3),
    /// Running directly away from a point at flee speed.
    Flee(Vec3),
}

impl MoveCommand {
    #[inline]
    pub fn is_moving(self) -> bool {
        !matches!(self, MoveCommand::Idle)
    }
}
