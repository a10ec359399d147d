//! `StealFromCharacter`: tail the player and lift one item from their build
//! inventory.

use loot_core::Vec3;
use loot_schedule::Stopwatch;
use loot_world::{EntityHandle, World};

use crate::pursuit::{Pursuit, Target};
use crate::{
    Approach, Behavior, BehaviorContext, BehaviorResult, BehaviorStatus, CharacterStealConfig, Phase,
};

/// Steals a random occupied slot from the character's build inventory.
///
/// The target is resolved at `initialize` through the world's reference
/// registry, falling back to a tag scan.  It is only re-resolved if the held
/// handle goes stale.  Following starts after `follow_delay_secs` of
/// continuous detection.
#[derive(Debug)]
pub struct StealFromCharacter {
    config:       CharacterStealConfig,
    pursuit:      Pursuit,
    detected_for: Stopwatch,
}

impl StealFromCharacter {
    pub const NAME: &'static str = "steal_from_character";

    pub fn new(config: CharacterStealConfig) -> Self {
        Self {
            config,
            pursuit:      Pursuit::default(),
            detected_for: Stopwatch::new(),
        }
    }

    pub fn config(&self) -> &CharacterStealConfig {
        &self.config
    }

    /// The currently held target, if any.
    pub fn target(&self) -> Option<EntityHandle> {
        self.pursuit.target.map(|t| t.handle)
    }

    /// Seconds of continuous detection accumulated so far.
    pub fn detected_secs(&self) -> f32 {
        self.detected_for.elapsed()
    }

    fn lookup(&self, world: &World) -> Option<EntityHandle> {
        world
            .reference(&self.config.reference_key)
            .or_else(|| world.find_by_tag(&self.config.target_tag))
    }

    fn acquire(&mut self, world: &World) {
        self.pursuit.target = self
            .lookup(world)
            .and_then(|handle| world.position_of(handle).map(|position| Target { handle, position }));
    }

    /// Current target position, re-resolving once if the handle went stale.
    fn refresh_target(&mut self, world: &World) -> Option<Vec3> {
        if let Some(t) = self.pursuit.target
            && let Some(position) = world.position_of(t.handle)
        {
            self.pursuit.target = Some(Target { position, ..t });
            return Some(position);
        }
        self.acquire(world);
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
        if ctx.carrier.is_none() {
            return self.fail(ctx, "no carrier capability");
        }
        let Some(inventory) = ctx.inventory.as_deref_mut() else {
            return self.fail(ctx, "no inventory service");
        };
        let Some(item) = inventory.remove_random_occupied_slot() else {
            return self.fail(ctx, "target inventory is empty");
        };
        ctx.log.debug(format_args!("{}: took {item}", Self::NAME));
        if let Some(carrier) = ctx.carrier.as_deref_mut()
            && let Some(displaced) = carrier.attach(item)
        {
            ctx.world.place_item(displaced);
        }
        self.on_complete(ctx);
    }
}

impl Behavior for StealFromCharacter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn validate_config(&self) -> BehaviorResult<()> {
        self.config.validate()
    }

    fn initialize(&mut self, ctx: &mut BehaviorContext<'_>) {
        self.pursuit.disabled = false;
        if ctx.carrier.is_none() {
            ctx.log.error(format_args!("{}: host has no carrier capability", Self::NAME));
            self.pursuit.disabled = true;
        }
        if ctx.inventory.is_none() {
            ctx.log.error(format_args!("{}: no inventory service available", Self::NAME));
            self.pursuit.disabled = true;
        }
        self.pursuit.clear();
        self.detected_for.reset();
        self.acquire(ctx.world);
        self.pursuit.phase = Phase::Searching;
        if self.pursuit.target.is_none() {
            ctx.log.debug(format_args!("{}: no character found", Self::NAME));
        }
    }

    fn can_execute(&self, ctx: &BehaviorContext<'_>) -> bool {
        if self.pursuit.status.is_terminal() || self.pursuit.disabled || ctx.host_is_carrying() {
            return false;
        }
        // Runnable only while the player is within detection range.
        let handle = match self.pursuit.target {
            Some(t) if ctx.world.is_alive(t.handle) => Some(t.handle),
            _ => self.lookup(ctx.world),
        };
        handle
            .and_then(|h| ctx.world.position_of(h))
            .is_some_and(|p| ctx.mover.is_within_distance(p, self.config.detection_range))
    }

    fn execute(&mut self, ctx: &mut BehaviorContext<'_>) {
        if self.pursuit.status.is_terminal() || self.pursuit.disabled {
            return;
        }
        self.pursuit.begin();

        let Some(target) = self.refresh_target(ctx.world) else {
            return self.fail(ctx, "target unavailable");
        };
        let distance = ctx.mover.distance_to(target);
        let c = &self.config;
        match Approach::classify(distance, c.take_distance, c.min_follow_distance, c.detection_range) {
            Approach::InReach => self.take(ctx),
            Approach::OutOfRange => {
                self.detected_for.reset();
                self.fail(ctx, "target left detection range");
            }
            Approach::Follow => {
                self.detected_for.tick(ctx.dt_secs);
                if self.pursuit.following || self.detected_for.has_reached(self.config.follow_delay_secs) {
                    self.pursuit.follow(ctx, target);
                } else {
                    self.pursuit.phase = Phase::Searching;
                }
            }
            Approach::Hold => {
                self.detected_for.tick(ctx.dt_secs);
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
        self.detected_for.reset();
        self.acquire(ctx.world);
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
