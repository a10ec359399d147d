//! `CaptureWorker`: grab the nearest worker unit and carry it off.

use loot_core::Vec3;
use loot_schedule::{Cooldown, Stopwatch};
use loot_world::{EntityHandle, EntityKind, World};

use crate::pursuit::{Pursuit, Target};
use crate::{
    Approach, Behavior, BehaviorContext, BehaviorResult, BehaviorStatus, Phase, WorkerCaptureConfig,
    nearest_within,
};

/// Captures a worker: disables its autonomy and physics and parents it to
/// the thief at `carry_offset`.
///
/// Unlike the stealing variants, losing the target is not immediately fatal.
/// The behavior keeps rescanning on its search cooldown and fails only after
/// [`WorkerCaptureConfig::give_up_after_secs`] without a target.  `stop`
/// (and therefore `reset`) returns a captured worker to the world.
#[derive(Debug)]
pub struct CaptureWorker {
    config:   WorkerCaptureConfig,
    pursuit:  Pursuit,
    search:   Cooldown,
    lost_for: Stopwatch,
    captured: Option<EntityHandle>,
}

impl CaptureWorker {
    pub const NAME: &'static str = "capture_worker";

    pub fn new(config: WorkerCaptureConfig) -> Self {
        let search = Cooldown::new(config.search_interval_secs);
        Self {
            config,
            pursuit: Pursuit::default(),
            search,
            lost_for: Stopwatch::new(),
            captured: None,
        }
    }

    pub fn config(&self) -> &WorkerCaptureConfig {
        &self.config
    }

    pub fn target(&self) -> Option<EntityHandle> {
        self.pursuit.target.map(|t| t.handle)
    }

    /// The worker currently held, if any.
    pub fn captured(&self) -> Option<EntityHandle> {
        self.captured
    }

    /// Seconds spent without a target.
    pub fn lost_secs(&self) -> f32 {
        self.lost_for.elapsed()
    }

    fn scan(&self, world: &World, from: Vec3) -> Option<Target> {
        nearest_within(world, EntityKind::Worker, from, self.config.detection_range)
            .map(|(handle, position, _)| Target { handle, position })
    }

    fn rescan(&mut self, world: &World, from: Vec3) {
        self.search.restart();
        if let Some(found) = self.scan(world, from) {
            self.pursuit.target = Some(found);
        }
    }

    /// A held worker stays a target only while it is alive and free.
    fn still_available(world: &World, t: Target) -> Option<Target> {
        match world.worker(t.handle) {
            Ok(state) if !state.is_possessed() => {
                world.position_of(t.handle).map(|position| Target { position, ..t })
            }
            _ => None,
        }
    }

    fn refresh_target(&mut self, world: &World, from: Vec3) -> Option<Vec3> {
        self.pursuit.target = self.pursuit.target.and_then(|t| Self::still_available(world, t));
        if self.pursuit.target.is_none() || self.search.ready() {
            self.rescan(world, from);
        }
        self.pursuit.target.map(|t| t.position)
    }

    fn fail(&mut self, ctx: &mut BehaviorContext<'_>, reason: &str) {
        ctx.log.warning(format_args!("{}: {reason}", Self::NAME));
        self.on_failed(ctx);
    }

    /// No usable target this tick: stand still and count toward giving up.
    fn searching(&mut self, ctx: &mut BehaviorContext<'_>) {
        self.pursuit.target = None;
        self.pursuit.halt(ctx);
        self.pursuit.phase = Phase::Searching;
        self.lost_for.tick(ctx.dt_secs);
        if self.lost_for.has_reached(self.config.give_up_after_secs()) {
            self.fail(ctx, "no worker found before search timeout");
        }
    }

    fn capture(&mut self, ctx: &mut BehaviorContext<'_>, target: EntityHandle) {
        self.pursuit.phase = Phase::Acting;
        if self.captured.is_some() {
            return self.fail(ctx, "already carrying a worker");
        }
        let host = ctx.host.id;
        match ctx.world.possess_worker(target, host, self.config.carry_offset) {
            Ok(()) => {
                self.captured = Some(target);
                ctx.log.debug(format_args!("{}: captured {target}", Self::NAME));
                self.on_complete(ctx);
            }
            Err(e) => self.fail(ctx, &e.to_string()),
        }
    }

    fn release(&mut self, ctx: &mut BehaviorContext<'_>) {
        let Some(worker) = self.captured.take() else { return };
        match ctx.world.release_worker(worker) {
            Ok(_) => ctx.log.debug(format_args!("{}: released {worker}", Self::NAME)),
            Err(e) => ctx.log.warning(format_args!("{}: release of {worker} skipped: {e}", Self::NAME)),
        }
    }
}

impl Behavior for CaptureWorker {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn validate_config(&self) -> BehaviorResult<()> {
        self.config.validate()
    }

    fn initialize(&mut self, ctx: &mut BehaviorContext<'_>) {
        if self.config.holds_outside_reach() {
            ctx.log.warning(format_args!(
                "{}: min_follow_distance {} > approach_distance {}; an idle worker in between is never reached",
                Self::NAME, self.config.min_follow_distance, self.config.approach_distance,
            ));
        }
        self.pursuit.clear();
        self.search = Cooldown::new(self.config.search_interval_secs);
        self.lost_for.reset();
        let from = ctx.host_position();
        self.rescan(ctx.world, from);
        self.pursuit.phase = Phase::Searching;
    }

    fn can_execute(&self, ctx: &BehaviorContext<'_>) -> bool {
        if self.pursuit.status.is_terminal() || self.captured.is_some() {
            return false;
        }
        self.pursuit.target.and_then(|t| Self::still_available(ctx.world, t)).is_some()
            || self.scan(ctx.world, ctx.host_position()).is_some()
    }

    fn execute(&mut self, ctx: &mut BehaviorContext<'_>) {
        if self.pursuit.status.is_terminal() {
            return;
        }
        self.pursuit.begin();
        self.search.tick(ctx.dt_secs);

        let from = ctx.host_position();
        let Some(position) = self.refresh_target(ctx.world, from) else {
            return self.searching(ctx);
        };
        let Some(handle) = self.target() else {
            return self.searching(ctx);
        };
        let distance = ctx.mover.distance_to(position);
        let c = &self.config;
        match Approach::classify(distance, c.approach_distance, c.min_follow_distance, c.detection_range) {
            Approach::InReach => self.capture(ctx, handle),
            Approach::OutOfRange => self.searching(ctx),
            Approach::Follow => {
                self.lost_for.reset();
                self.pursuit.follow(ctx, position);
            }
            Approach::Hold => {
                self.lost_for.reset();
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
        self.stop(ctx);
        self.initialize(ctx);
    }

    fn stop(&mut self, ctx: &mut BehaviorContext<'_>) {
        self.pursuit.halt(ctx);
        self.release(ctx);
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
