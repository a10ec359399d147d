//! Everything a behavior may touch during one call.

use std::fmt;

use loot_carrier::CarrierCapability;
use loot_core::{EntityId, Tick, Vec3};
use loot_mobility::MovementPort;
use loot_world::{EntityHandle, InventoryService, World};

/// Requests a behavior makes of its host.
///
/// Collected during a behavior call and applied by the host afterwards.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HostSignal {
    /// Leave stealing control and run away from `from` (the last known
    /// target position, if any).
    StartFleeing { from: Option<Vec3> },
}

/// Diagnostic logging hooks owned by the host.
///
/// Output goes through `tracing` with the host entity attached.  Muting only
/// suppresses output; no code path may branch on what was logged.
#[derive(Clone, Debug)]
pub struct HostLog {
    entity: EntityId,
    muted:  bool,
}

impl HostLog {
    pub fn new(entity: EntityId) -> Self {
        Self { entity, muted: false }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn debug(&self, message: impl fmt::Display) {
        if !self.muted {
            tracing::debug!(entity = %self.entity, "{message}");
        }
    }

    pub fn warning(&self, message: impl fmt::Display) {
        if !self.muted {
            tracing::warn!(entity = %self.entity, "{message}");
        }
    }

    pub fn error(&self, message: impl fmt::Display) {
        if !self.muted {
            tracing::error!(entity = %self.entity, "{message}");
        }
    }
}

/// Mutable view of the host's siblings and the world, lent for one call.
///
/// Built fresh by the host each tick.  `carrier` and `inventory` are
/// optional so a host lacking one is a configuration error the behavior can
/// detect and report rather than a panic.
pub struct BehaviorContext<'a> {
    /// Current simulation tick.
    pub tick:      Tick,
    /// Seconds covered by this tick.
    pub dt_secs:   f32,
    /// The thief entity running the behavior.
    pub host:      EntityHandle,
    pub world:     &'a mut World,
    pub mover:     &'a mut dyn MovementPort,
    pub carrier:   Option<&'a mut CarrierCapability>,
    pub inventory: Option<&'a mut dyn InventoryService>,
    pub log:       &'a HostLog,
    pub signals:   &'a mut Vec<HostSignal>,
}

impl BehaviorContext<'_> {
    /// `true` if the host's carrier currently holds an item.
    pub fn host_is_carrying(&self) -> bool {
        self.carrier.as_deref().is_some_and(CarrierCapability::is_carrying)
    }

    /// Where the host currently stands.
    pub fn host_position(&self) -> Vec3 {
        self.mover.position()
    }
}
