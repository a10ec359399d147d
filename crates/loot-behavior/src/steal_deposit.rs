//! `StealFromDeposit`: walk to the nearest resource deposit and take one
//! unit.

use loot_core::{CarriedItem, Vec3};
use loot_schedule::Cooldown;
use loot_world::{EntityHandle, EntityKind, World};

use crate::pursuit::{Pursuit, Target};
use crate::{
    Approach, Behavior, BehaviorContext, BehaviorResult, BehaviorStatus, DepositStealConfig, Phase,
    nearest_within,
};

/// Steals a single resource unit from the nearest deposit in range.
///
/// The nearest-deposit scan runs at `initialize`, whenever the held deposit
/// is gone, and otherwise at most once per `search_interval_secs`.  Empty
/// deposits are still candidates; taking from one fails.
#[derive(Debug)]
pub struct StealFromDeposit {
    config:  DepositStealConfig,
    pursuit: Pursuit,
    search:  Cooldown,
}

impl StealFromDeposit {
    pub const NAME: &'static str = "steal_from_deposit";

    pub fn new(config: DepositStealConfig) -> Self {
        let search = Cooldown::new(config.search_interval_secs);
        Self { config, pursuit: Pursuit::default(), search }
    }

    pub fn config(&self) -> &DepositStealConfig {
        &self.config
    }

    pub fn target(&self) -> Option<EntityHandle> {
        self.pursuit.target.map(|t| t.handle)
    }

    fn scan(&self, world: &World, from: Vec3) -> Option<Target> {
        nearest_within(world, EntityKind::Deposit, from, self.config.detection_range)
            .map(|(handle, position, _)| Target { handle, position })
    }

    fn rescan(&mut self, world: &World, from: Vec3) {
        self.search.restart();
        if let Some(found) = self.scan(world, from) {
            self.pursuit.target = Some(found);
        }
    }

    fn refresh_target(&mut self, world: &World, from: Vec3) -> Option<Vec3> {
        let held = self
            .pursuit
            .target
            .and_then(|t| world.position_of(t.handle).map(|position| Target { position, ..t }));
        self.pursuit.target = held;
        if held.is_none() || self.search.ready() {
            self.rescan(world, from);
        }
        self.pursuit.target.map(|t| t.position)
    }

    fn fail(&mut self, ctx: &mut BehaviorContext<'_>, reason: &str) {
        ctx.log.warning(format_args!("{}: {reason}", Self::NAME));
        self.on_failed(ctx);
    }

    fn take(&mut self, ctx: &mut BehaviorContext<'_>) {
        self.pursuit.phase = Phase::Acting;
        if ctx.host_is_carrying() {
            return self.fail(ctx, "already carrying an item");
        }
        let Some(target) = self.pursuit.target else {
            return self.fail(ctx, "target unavailable");
        };
        if ctx.carrier.is_none() {
            return self.fail(ctx, "no carrier capability");
        }
        if !ctx.world.try_remove_unit(target.handle) {
            return self.fail(ctx, "deposit is empty");
        }
        let item = CarriedItem::resource_unit();
        ctx.log.debug(format_args!("{}: took {item} from {}", Self::NAME, target.handle));
        if let Some(carrier) = ctx.carrier.as_deref_mut()
            && let Some(displaced) = carrier.attach(item)
        {
            ctx.world.place_item(displaced);
        }
        self.on_complete(ctx);
    }
}

impl Behavior for StealFromDeposit {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn validate_config(&self) -> BehaviorResult<()> {
        self.config.validate()
    }

    fn initialize(&mut self, ctx: &mut BehaviorContext<'_>) {
        self.pursuit.disabled = ctx.carrier.is_none();
        if self.pursuit.disabled {
            ctx.log.error(format_args!("{}: host has no carrier capability", Self::NAME));
        }
        if self.config.holds_outside_reach() {
            ctx.log.warning(format_args!(
                "{}: min_follow_distance {} > take_distance {}; a deposit in between is never reached",
                Self::NAME, self.config.min_follow_distance, self.config.take_distance,
            ));
        }
        self.pursuit.clear();
        self.search = Cooldown::new(self.config.search_interval_secs);
        let from = ctx.host_position();
        self.rescan(ctx.world, from);
        self.pursuit.phase = Phase::Searching;
    }

    fn can_execute(&self, ctx: &BehaviorContext<'_>) -> bool {
        if self.pursuit.status.is_terminal() || self.pursuit.disabled || ctx.host_is_carrying() {
            return false;
        }
        self.pursuit.target.is_some_and(|t| ctx.world.is_alive(t.handle))
            || self.scan(ctx.world, ctx.host_position()).is_some()
    }

    fn execute(&mut self, ctx: &mut BehaviorContext<'_>) {
        if self.pursuit.status.is_terminal() || self.pursuit.disabled {
            return;
        }
        self.pursuit.begin();
        self.search.tick(ctx.dt_secs);

        let from = ctx.host_position();
        let Some(target) = self.refresh_target(ctx.world, from) else {
            return self.fail(ctx, "no deposit in range");
        };
        let distance = ctx.mover.distance_to(target);
        let c = &self.config;
        match Approach::classify(distance, c.take_distance, c.min_follow_distance, c.detection_range) {
            Approach::InReach => self.take(ctx),
            Approach::OutOfRange => self.fail(ctx, "deposit left detection range"),
            Approach::Follow => self.pursuit.follow(ctx, target),
            Approach::Hold => {
                self.pursuit.halt(ctx);
                self.pursuit.phase = Phase::Following;
            }
        }
    }

    fn on_complete(&mut self, ctx: &mut BehaviorContext<'_>) {
        self.pursuit.complete(ctx, Self::NAME);
    }

    fn on_failed(&mut self, ctx: &mut BehaviorContext<'_>) {
        self.pursuit.fail(ctx);
    }

    fn reset(&mut self, ctx: &mut BehaviorContext<'_>) {
        self.pursuit.halt(ctx);
        self.pursuit.clear();
        self.search = Cooldown::new(self.config.search_interval_secs);
        let from = ctx.host_position();
        self.rescan(ctx.world, from);
        self.pursuit.phase = Phase::Searching;
    }

    fn stop(&mut self, ctx: &mut BehaviorContext<'_>) {
        self.pursuit.halt(ctx);
    }

    fn status(&self) -> BehaviorStatus {
        self.pursuit.status
    }

    fn phase(&self) -> Phase {
        self.pursuit.phase
    }

    fn is_following(&self) -> bool {
        self.pursuit.following
    }
}
