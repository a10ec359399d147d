//! `ThiefHost`: owns a thief's behaviors and the capabilities they drive.

use loot_behavior::{Behavior, BehaviorContext, BehaviorStatus, HostLog, HostSignal};
use loot_carrier::{CarrierCapability, CarrierObserver};
use loot_core::{EntityId, ItemId, SimClock, Tick, Vec3};
use loot_mobility::{MovementPort, Mover};
use loot_schedule::DeferredQueue;
use loot_world::{EntityHandle, InventoryService, World};

use crate::HostConfig;

// ── Modes, tasks, events ──────────────────────────────────────────────────────

/// Who is steering the thief.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum HostMode {
    /// Behaviors are selected and executed each tick.
    #[default]
    Stealing,
    /// Behaviors are suspended; the mover runs away from the flee origin.
    Fleeing,
}

/// Deferred work scheduled by the host onto its own queue.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum HostTask {
    /// Reset the behavior at `index`, unless the host was stopped since the
    /// task was scheduled (`epoch` no longer current).
    ResetBehavior { index: usize, epoch: u64 },
}

/// What happened inside a host during one tick, for the sim to report.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum HostEvent {
    BehaviorFinished {
        behavior: &'static str,
        status:   BehaviorStatus,
    },
    StartedFleeing {
        from: Vec3,
    },
    RetryScheduled {
        behavior: &'static str,
        at:       Tick,
    },
}

// ── Body ──────────────────────────────────────────────────────────────────────

/// The capabilities a host lends to its behaviors.  Kept apart from the
/// behavior list so both can be borrowed at once.
struct Body {
    entity:  EntityHandle,
    mover:   Mover,
    carrier: CarrierCapability,
    log:     HostLog,
    signals: Vec<HostSignal>,
}

impl Body {
    fn context<'a>(
        &'a mut self,
        clock:     &SimClock,
        world:     &'a mut World,
        inventory: Option<&'a mut dyn InventoryService>,
    ) -> BehaviorContext<'a> {
        BehaviorContext {
            tick:    clock.current_tick,
            dt_secs: clock.dt_secs(),
            host:    self.entity,
            world,
            mover:   &mut self.mover,
            carrier: Some(&mut self.carrier),
            inventory,
            log:     &self.log,
            signals: &mut self.signals,
        }
    }
}

/// Shorter-lived reborrow of an optional inventory service.
fn lend<'b>(inventory: &'b mut Option<&mut dyn InventoryService>) -> Option<&'b mut dyn InventoryService> {
    inventory.as_deref_mut().map(|i| i as &mut dyn InventoryService)
}

struct Slot {
    behavior:    Box<dyn Behavior>,
    initialized: bool,
}

// ── ThiefHost ─────────────────────────────────────────────────────────────────

/// Behavior host for one thief entity.
///
/// Holds an ordered behavior list and a sticky active selection: the active
/// behavior keeps control until it reaches a terminal state, then the first
/// behavior whose `can_execute` is true takes over.  A behavior's
/// `StartFleeing` request switches the host to [`HostMode::Fleeing`] for
/// good; no behavior runs after that.
pub struct ThiefHost {
    body:       Body,
    config:     HostConfig,
    slots:      Vec<Slot>,
    active:     Option<usize>,
    mode:       HostMode,
    tasks:      DeferredQueue<HostTask>,
    epoch:      u64,
    flee_count: u32,
    flee_from:  Option<Vec3>,
}

impl ThiefHost {
    pub fn new(entity: EntityHandle, position: Vec3, config: HostConfig) -> Self {
        let body = Body {
            entity,
            mover:   Mover::new(position, config.mover.clone()),
            carrier: CarrierCapability::new(entity.id, position, config.carrier.clone()),
            log:     HostLog::new(entity.id),
            signals: Vec::new(),
        };
        Self {
            body,
            config,
            slots:      Vec::new(),
            active:     None,
            mode:       HostMode::Stealing,
            tasks:      DeferredQueue::new(),
            epoch:      0,
            flee_count: 0,
            flee_from:  None,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn entity(&self) -> EntityHandle {
        self.body.entity
    }

    pub fn id(&self) -> EntityId {
        self.body.entity.id
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    pub fn position(&self) -> Vec3 {
        self.body.mover.position()
    }

    pub fn mover(&self) -> &Mover {
        &self.body.mover
    }

    pub fn carrier(&self) -> &CarrierCapability {
        &self.body.carrier
    }

    pub fn log(&self) -> &HostLog {
        &self.body.log
    }

    pub fn mode(&self) -> HostMode {
        self.mode
    }

    /// Number of times the host entered flee mode.
    pub fn flee_count(&self) -> u32 {
        self.flee_count
    }

    pub fn flee_origin(&self) -> Option<Vec3> {
        self.flee_from
    }

    pub fn behavior_count(&self) -> usize {
        self.slots.len()
    }

    pub fn behavior(&self, index: usize) -> Option<&dyn Behavior> {
        self.slots.get(index).map(|s| s.behavior.as_ref())
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_behavior(&self) -> Option<&dyn Behavior> {
        self.active.and_then(|i| self.behavior(i))
    }

    /// Deferred tasks not yet run.
    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    pub fn set_log_muted(&mut self, muted: bool) {
        self.body.log.set_muted(muted);
    }

    pub fn subscribe_carrier(&mut self, observer: Box<dyn CarrierObserver>) {
        self.body.carrier.subscribe(observer);
    }

    // ── Enrolment ─────────────────────────────────────────────────────────

    /// Enrol `behavior` at the end of the list.
    ///
    /// An invalid configuration is logged and the behavior is discarded;
    /// returns the new index on success.  Initialization happens at the
    /// start of the next tick.
    pub fn add_behavior(&mut self, behavior: Box<dyn Behavior>) -> Option<usize> {
        if let Err(e) = behavior.validate_config() {
            self.body.log.error(format_args!("{} not enrolled: {e}", behavior.name()));
            return None;
        }
        self.slots.push(Slot { behavior, initialized: false });
        Some(self.slots.len() - 1)
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Run one tick of stealing control.
    pub fn tick(
        &mut self,
        clock:         &SimClock,
        world:         &mut World,
        mut inventory: Option<&mut dyn InventoryService>,
    ) -> Vec<HostEvent> {
        let now = clock.current_tick;
        let mut events = Vec::new();

        for task in self.tasks.drain_due(now) {
            self.run_task(task, clock, world, &mut inventory);
        }

        for slot in self.slots.iter_mut().filter(|s| !s.initialized) {
            let mut ctx = self.body.context(clock, world, lend(&mut inventory));
            slot.behavior.initialize(&mut ctx);
            slot.initialized = true;
        }

        if self.mode == HostMode::Stealing {
            self.active = self.select(clock, world, &mut inventory);
            if let Some(i) = self.active {
                let slot = &mut self.slots[i];
                let was_terminal = slot.behavior.is_terminal();
                {
                    let mut ctx = self.body.context(clock, world, lend(&mut inventory));
                    slot.behavior.execute(&mut ctx);
                }
                let status = slot.behavior.status();
                if !was_terminal && status.is_terminal() {
                    let name = slot.behavior.name();
                    events.push(HostEvent::BehaviorFinished { behavior: name, status });
                    if status == BehaviorStatus::Failed
                        && let Some(at) = self.schedule_retry(i, clock)
                    {
                        events.push(HostEvent::RetryScheduled { behavior: name, at });
                    }
                }
            }
        }

        let signals: Vec<HostSignal> = self.body.signals.drain(..).collect();
        for signal in signals {
            match signal {
                HostSignal::StartFleeing { from } => {
                    let origin = from.unwrap_or_else(|| self.position());
                    if self.start_fleeing(origin) {
                        events.push(HostEvent::StartedFleeing { from: origin });
                    }
                }
            }
        }
        events
    }

    /// Move the thief by one tick and carry its companion along.
    pub fn integrate(&mut self, dt_secs: f32, world: &mut World) {
        self.body.mover.integrate(dt_secs);
        let pos = self.body.mover.position();
        if world.set_position(self.body.entity, pos).is_err() {
            self.body.log.warning("host entity is gone; position not published");
        }
        self.body.carrier.update(pos, dt_secs);
    }

    /// Sticky selection: keep a live active behavior, else first runnable.
    fn select(
        &mut self,
        clock:     &SimClock,
        world:     &mut World,
        inventory: &mut Option<&mut dyn InventoryService>,
    ) -> Option<usize> {
        if let Some(i) = self.active
            && !self.slots[i].behavior.is_terminal()
        {
            return Some(i);
        }
        for (i, slot) in self.slots.iter().enumerate() {
            let ctx = self.body.context(clock, world, lend(inventory));
            if slot.initialized && slot.behavior.can_execute(&ctx) {
                if self.active != Some(i) {
                    self.body.log.debug(format_args!("selected {}", slot.behavior.name()));
                }
                return Some(i);
            }
        }
        None
    }

    fn schedule_retry(&mut self, index: usize, clock: &SimClock) -> Option<Tick> {
        let delay = self.config.retry_delay_secs?;
        let at = clock.current_tick.offset(clock.ticks_for_secs(delay));
        self.tasks.push(at, HostTask::ResetBehavior { index, epoch: self.epoch });
        Some(at)
    }

    fn run_task(
        &mut self,
        task:      HostTask,
        clock:     &SimClock,
        world:     &mut World,
        inventory: &mut Option<&mut dyn InventoryService>,
    ) {
        match task {
            HostTask::ResetBehavior { index, epoch } => {
                if epoch != self.epoch || self.mode != HostMode::Stealing {
                    tracing::debug!(entity = %self.id(), index, "stale reset task dropped");
                    return;
                }
                let Some(slot) = self.slots.get_mut(index) else { return };
                let mut ctx = self.body.context(clock, world, lend(inventory));
                slot.behavior.reset(&mut ctx);
                tracing::debug!(entity = %self.body.entity.id, behavior = slot.behavior.name(), "behavior reset");
            }
        }
    }

    // ── Control ───────────────────────────────────────────────────────────

    /// Leave stealing control and run away from `from`.
    ///
    /// Returns `false` if the host was already fleeing.
    pub fn start_fleeing(&mut self, from: Vec3) -> bool {
        if self.mode == HostMode::Fleeing {
            return false;
        }
        self.mode = HostMode::Fleeing;
        self.flee_from = Some(from);
        self.flee_count += 1;
        self.body.mover.flee_from(from);
        self.body.log.debug(format_args!("fleeing from {from}"));
        true
    }

    /// Hand control back to the behaviors after a flee.
    pub fn resume_stealing(&mut self) {
        if self.mode == HostMode::Fleeing {
            self.mode = HostMode::Stealing;
            self.flee_from = None;
            self.body.mover.stop();
        }
    }

    /// Halt everything and stand still.  Deferred tasks in flight are
    /// cancelled and every initialized behavior is stopped, not just the
    /// active one: a capture that finished before `resume_stealing` still
    /// holds its worker until stopped.
    pub fn stop(&mut self, clock: &SimClock, world: &mut World) {
        self.epoch += 1;
        self.active = None;
        for slot in self.slots.iter_mut().filter(|s| s.initialized) {
            let mut ctx = self.body.context(clock, world, None);
            slot.behavior.stop(&mut ctx);
        }
        self.body.mover.stop();
    }

    /// Drop whatever the carrier holds onto the ground as a world pickup.
    pub fn drop_loot(&mut self, world: &mut World) -> Option<ItemId> {
        let loose = self.body.carrier.drop_item()?;
        Some(world.place_item(loose))
    }
}
