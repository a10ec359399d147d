//! Hooks for watching a run: traces, counters, test recorders.

use loot_behavior::BehaviorStatus;
use loot_core::{EntityId, Tick, Vec3};
use loot_world::World;

use crate::ThiefHost;

/// Every hook defaults to doing nothing.
///
/// # Example: counting flees
///
/// ```rust,ignore
/// struct FleeCounter(u32);
///
/// impl SimObserver for FleeCounter {
///     fn on_flee(&mut self, _tick: Tick, _host: EntityId, _from: Vec3) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Before any host runs.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once the tick has been fully applied (movement and possession
    /// sync included).
    fn on_tick_end(&mut self, _tick: Tick, _world: &World, _hosts: &[ThiefHost]) {}

    /// A host's active behavior reached `Complete` or `Failed` this tick.
    fn on_behavior_finished(
        &mut self,
        _tick:     Tick,
        _host:     EntityId,
        _behavior: &'static str,
        _status:   BehaviorStatus,
    ) {}

    /// A host switched into flee mode.
    fn on_flee(&mut self, _tick: Tick, _host: EntityId, _from: Vec3) {}

    /// Only from [`Sim::run`][crate::Sim::run], after its last tick.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

pub struct NoopObserver;

impl SimObserver for NoopObserver {}
