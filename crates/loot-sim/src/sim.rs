//! `Sim`: owns the world and its hosts and advances them one tick at a time.

use loot_core::{EntityId, SimClock, SimConfig, Tick};
use loot_world::{InventoryService, World};

use crate::{HostEvent, SimObserver, SimResult, ThiefHost};

/// A world plus the thief hosts acting in it.  Built by
/// [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub config: SimConfig,
    pub clock: SimClock,

    /// Every entity the hosts can see or touch.
    pub world: World,

    /// Thief hosts, ticked in order.
    pub hosts: Vec<ThiefHost>,

    /// The character inventory service lent to stealing behaviors.
    pub inventory: Option<Box<dyn InventoryService>>,
}

impl Sim {
    /// Step until the clock reaches `config.stop_tick()`, then notify `on_sim_end`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.config.stop_tick() {
            self.step(observer);
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Step `n` more ticks regardless of `stop_tick`.  `on_sim_end` is not called.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer);
        }
        Ok(())
    }

    /// Stop every host.  Pending retries are cancelled and every behavior
    /// releases what it holds.
    pub fn stop_all(&mut self) {
        for host in &mut self.hosts {
            host.stop(&self.clock, &mut self.world);
        }
    }

    /// The host driving `id`, if any.
    pub fn host(&self, id: EntityId) -> Option<&ThiefHost> {
        self.hosts.iter().find(|h| h.id() == id)
    }

    pub fn host_mut(&mut self, id: EntityId) -> Option<&mut ThiefHost> {
        self.hosts.iter_mut().find(|h| h.id() == id)
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let tick = self.clock.current_tick;
        observer.on_tick_start(tick);
        self.process_tick(tick, observer);
        observer.on_tick_end(tick, &self.world, &self.hosts);
        self.clock.advance();
    }

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        // Behaviors first, against positions from the end of last tick.
        for host in &mut self.hosts {
            if !self.world.is_alive(host.entity()) {
                continue;
            }
            let inventory = self.inventory.as_deref_mut().map(|i| i as &mut dyn InventoryService);
            let events = host.tick(&self.clock, &mut self.world, inventory);
            for event in events {
                match event {
                    HostEvent::BehaviorFinished { behavior, status } => {
                        tracing::debug!(tick = now.0, host = %host.id(), behavior, %status, "behavior finished");
                        observer.on_behavior_finished(now, host.id(), behavior, status);
                    }
                    HostEvent::StartedFleeing { from } => {
                        tracing::info!(tick = now.0, host = %host.id(), %from, "thief fleeing");
                        observer.on_flee(now, host.id(), from);
                    }
                    HostEvent::RetryScheduled { behavior, at } => {
                        tracing::debug!(tick = now.0, host = %host.id(), behavior, at = at.0, "retry scheduled");
                    }
                }
            }
        }

        // Then movement.
        let dt = self.clock.dt_secs();
        for host in &mut self.hosts {
            if self.world.is_alive(host.entity()) {
                host.integrate(dt, &mut self.world);
            }
        }

        // Captured workers ride with whoever possesses them.
        self.world.sync_possessed();
    }
}
