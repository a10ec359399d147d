//! Kinematic `MovementPort` implementation.

use loot_core::Vec3;

use crate::{MoveCommand, MovementPort};

/// Speeds for a [`Mover`], in world units per second.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MoverConfig {
    pub speed:      f32,
    pub flee_speed: f32,
    /// Vertical coordinate the mover is clamped to.
    pub ground_y:   f32,
}

impl Default for MoverConfig {
    fn default() -> Self {
        Self {
            speed:      3.0,
            flee_speed: 4.5,
            ground_y:   0.0,
        }
    }
}

/// Straight-line mover clamped to the ground plane.
///
/// `Seek` never overshoots its target; `Flee` moves horizontally away from
/// its origin and keeps going until told otherwise.
#[derive(Clone, Debug)]
pub struct Mover {
    config:   MoverConfig,
    position: Vec3,
    command:  MoveCommand,
}

impl Mover {
    pub fn new(position: Vec3, config: MoverConfig) -> Self {
        let position = position.with_y(config.ground_y);
        Self {
            config,
            position,
            command: MoveCommand::Idle,
        }
    }

    pub fn command(&self) -> MoveCommand {
        self.command
    }

    pub fn config(&self) -> &MoverConfig {
        &self.config
    }

    /// Teleport without changing the current command.
    pub fn place(&mut self, position: Vec3) {
        self.position = position.with_y(self.config.ground_y);
    }

    /// Switch into flee mode away from `origin`.
    pub fn flee_from(&mut self, origin: Vec3) {
        self.command = MoveCommand::Flee(origin);
    }

    /// Advance the position by one tick of `dt_secs`.
    pub fn integrate(&mut self, dt_secs: f32) {
        let dt = dt_secs.max(0.0);
        match self.command {
            MoveCommand::Idle => {}
            MoveCommand::Seek(target) => {
                let goal = target.with_y(self.config.ground_y);
                self.position = self.position.step_towards(goal, self.config.speed * dt);
            }
            MoveCommand::Flee(origin) => {
                let away = (self.position - origin).with_y(0.0).normalized_or_zero();
                // Standing exactly on the origin: pick an arbitrary heading.
                let away = if away == Vec3::ZERO { Vec3::new(1.0, 0.0, 0.0) } else { away };
                self.position += away * (self.config.flee_speed * dt);
            }
        }
    }
}

impl MovementPort for Mover {
    fn move_toward(&mut self, target: Vec3) {
        self.command = MoveCommand::Seek(target);
    }

    fn stop(&mut self) {
        self.command = MoveCommand::Idle;
    }

    fn position(&self) -> Vec3 {
        self.position
    }
}
