//! Unit tests for loot-behavior.

use loot_carrier::{CarrierCapability, CarrierConfig};
use loot_core::{CarriedItem, Rarity, Tick, Vec3};
use loot_mobility::{MoveCommand, MovementPort, Mover, MoverConfig};
use loot_world::{BuildInventory, EntityHandle, EntityKind, InventoryService, World};

use crate::{
    Approach, Behavior, BehaviorContext, BehaviorStatus, CaptureWorker, CharacterStealConfig,
    DepositStealConfig, HostLog, HostSignal, Phase, StealFromCharacter, StealFromDeposit,
    WorkerCaptureConfig, nearest_within,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Dyadic so timer thresholds land on exact tick counts.
const DT: f32 = 0.125;

/// `Mover` that also records every steering command it receives.
struct RecordingMover {
    inner:    Mover,
    commands: Vec<MoveCommand>,
}

impl RecordingMover {
    fn seeks(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, MoveCommand::Seek(_))).count()
    }
}

impl MovementPort for RecordingMover {
    fn move_toward(&mut self, target: Vec3) {
        self.commands.push(MoveCommand::Seek(target));
        self.inner.move_toward(target);
    }

    fn stop(&mut self) {
        self.commands.push(MoveCommand::Idle);
        self.inner.stop();
    }

    fn position(&self) -> Vec3 {
        self.inner.position()
    }
}

/// One thief plus everything a behavior borrows from its host.
struct Rig {
    world:          World,
    host:           EntityHandle,
    mover:          RecordingMover,
    carrier:        CarrierCapability,
    inventory:      BuildInventory,
    log:            HostLog,
    signals:        Vec<HostSignal>,
    tick:           Tick,
    with_carrier:   bool,
    with_inventory: bool,
}

impl Rig {
    fn new() -> Self {
        let mut world = World::new(0.0);
        let host = world.spawn_thief(Vec3::ZERO);
        let mut log = HostLog::new(host.id);
        log.set_muted(true);
        Self {
            world,
            host,
            mover: RecordingMover {
                inner:    Mover::new(Vec3::ZERO, MoverConfig::default()),
                commands: Vec::new(),
            },
            carrier: CarrierCapability::new(host.id, Vec3::ZERO, CarrierConfig::default()),
            inventory: BuildInventory::new(4, 7),
            log,
            signals: Vec::new(),
            tick: Tick::ZERO,
            with_carrier: true,
            with_inventory: true,
        }
    }

    fn stock(&mut self, n: usize) {
        for i in 0..n {
            let item = CarriedItem::power(format!("relic-{i}"), Rarity::Rare, 2.0, 0.5);
            assert!(self.inventory.insert(item).is_ok());
        }
    }

    fn run<R>(&mut self, f: impl FnOnce(&mut BehaviorContext<'_>) -> R) -> R {
        let inventory: Option<&mut dyn InventoryService> =
            if self.with_inventory { Some(&mut self.inventory) } else { None };
        let mut ctx = BehaviorContext {
            tick:    self.tick,
            dt_secs: DT,
            host:    self.host,
            world:   &mut self.world,
            mover:   &mut self.mover,
            carrier: self.with_carrier.then_some(&mut self.carrier),
            inventory,
            log:     &self.log,
            signals: &mut self.signals,
        };
        f(&mut ctx)
    }

    fn init(&mut self, b: &mut dyn Behavior) {
        self.run(|ctx| b.initialize(ctx));
    }

    /// Execute once, then move the thief and anything it carries.
    fn step(&mut self, b: &mut dyn Behavior) {
        self.run(|ctx| b.execute(ctx));
        self.mover.inner.integrate(DT);
        let pos = self.mover.position();
        self.world.set_position(self.host, pos).unwrap();
        self.world.sync_possessed();
        self.carrier.update(pos, DT);
        self.tick = self.tick.offset(1);
    }

    fn can_execute(&mut self, b: &dyn Behavior) -> bool {
        self.run(|ctx| b.can_execute(ctx))
    }

    fn flee_signals(&self) -> usize {
        self.signals.iter().filter(|s| matches!(s, HostSignal::StartFleeing { .. })).count()
    }
}

fn at(x: f32) -> Vec3 {
    Vec3::new(x, 0.0, 0.0)
}

/// Thresholds from the distance law: take 1.0, min follow 1.5, detection 10.
fn law_character() -> StealFromCharacter {
    StealFromCharacter::new(CharacterStealConfig {
        detection_range:     10.0,
        take_distance:       1.0,
        min_follow_distance: 1.5,
        follow_delay_secs:   0.0,
        ..CharacterStealConfig::default()
    })
}

fn law_deposit() -> StealFromDeposit {
    StealFromDeposit::new(DepositStealConfig {
        detection_range:      10.0,
        take_distance:        1.0,
        min_follow_distance:  1.5,
        search_interval_secs: 1.0,
    })
}

fn law_worker() -> CaptureWorker {
    CaptureWorker::new(WorkerCaptureConfig {
        detection_range:      10.0,
        approach_distance:    1.0,
        min_follow_distance:  1.5,
        search_interval_secs: 1.0,
        ..WorkerCaptureConfig::default()
    })
}

// ── Gate ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod gate_tests {
    use super::*;

    #[test]
    fn bands() {
        let g = |d| Approach::classify(d, 1.0, 1.5, 10.0);
        assert_eq!(g(0.8), Approach::InReach);
        assert_eq!(g(1.0), Approach::InReach);
        assert_eq!(g(1.2), Approach::Hold);
        assert_eq!(g(1.5), Approach::Hold);
        assert_eq!(g(5.0), Approach::Follow);
        assert_eq!(g(10.0), Approach::Follow);
        assert_eq!(g(12.0), Approach::OutOfRange);
    }

    #[test]
    fn reach_beats_hold_when_bands_overlap() {
        assert_eq!(Approach::classify(1.1, 1.2, 1.5, 10.0), Approach::InReach);
        assert!(Approach::Hold.is_detected());
        assert!(!Approach::OutOfRange.is_detected());
    }
}

// ── Acquire ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod acquire_tests {
    use super::*;

    #[test]
    fn picks_nearest() {
        let mut w = World::new(0.0);
        w.spawn_deposit(at(6.0), 1);
        let near = w.spawn_deposit(at(-3.0), 1);
        w.spawn_deposit(at(9.0), 1);
        let (h, pos, d) = nearest_within(&w, EntityKind::Deposit, Vec3::ZERO, 10.0).unwrap();
        assert_eq!(h, near);
        assert_eq!(pos, at(-3.0));
        assert!((d - 3.0).abs() < 1e-6);
    }

    #[test]
    fn range_is_strict() {
        let mut w = World::new(0.0);
        w.spawn_deposit(at(10.0), 1);
        assert!(nearest_within(&w, EntityKind::Deposit, Vec3::ZERO, 10.0).is_none());
        assert!(nearest_within(&w, EntityKind::Deposit, Vec3::ZERO, 10.5).is_some());
    }

    #[test]
    fn tie_goes_to_first_in_scan_order() {
        let mut w = World::new(0.0);
        let first = w.spawn_deposit(at(4.0), 1);
        w.spawn_deposit(at(-4.0), 1);
        let (h, _, _) = nearest_within(&w, EntityKind::Deposit, Vec3::ZERO, 10.0).unwrap();
        assert_eq!(h, first);
    }

    #[test]
    fn skips_dead_and_possessed() {
        let mut w = World::new(0.0);
        let thief = w.spawn_thief(Vec3::ZERO);
        let dead = w.spawn_worker(at(1.0));
        let held = w.spawn_worker(at(2.0));
        let free = w.spawn_worker(at(3.0));
        w.despawn(dead).unwrap();
        w.possess_worker(held, thief.id, Vec3::ZERO).unwrap();
        let (h, _, _) = nearest_within(&w, EntityKind::Worker, at(0.5), 10.0).unwrap();
        assert_eq!(h, free);
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(CharacterStealConfig::default().validate().is_ok());
        assert!(DepositStealConfig::default().validate().is_ok());
        assert!(WorkerCaptureConfig::default().validate().is_ok());
    }

    #[test]
    fn negative_distance_rejected() {
        let c = DepositStealConfig { take_distance: -1.0, ..Default::default() };
        assert!(c.validate().is_err());
        assert!(StealFromDeposit::new(c).validate_config().is_err());
    }

    #[test]
    fn non_finite_rejected() {
        let c = CharacterStealConfig { follow_delay_secs: f32::NAN, ..Default::default() };
        assert!(c.validate().is_err());
        let c = WorkerCaptureConfig { detection_range: f32::INFINITY, ..Default::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn reach_beyond_detection_rejected() {
        let c = CharacterStealConfig { take_distance: 9.0, ..Default::default() };
        assert!(c.validate().is_err());
        let c = WorkerCaptureConfig { min_follow_distance: 11.0, ..Default::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn default_hold_bands_sit_inside_reach() {
        assert!(!DepositStealConfig::default().holds_outside_reach());
        assert!(!WorkerCaptureConfig::default().holds_outside_reach());
        let c = DepositStealConfig { min_follow_distance: 1.5, ..Default::default() };
        assert!(c.holds_outside_reach());
    }

    #[test]
    fn give_up_window() {
        let c = WorkerCaptureConfig { search_interval_secs: 2.0, ..Default::default() };
        assert_eq!(c.give_up_after_secs(), 6.0);
    }
}

// ── StealFromCharacter ────────────────────────────────────────────────────────

#[cfg(test)]
mod character_tests {
    use super::*;

    #[test]
    fn steal_success_scenario() {
        let mut rig = Rig::new();
        rig.stock(1);
        let player = rig.world.spawn_character(at(6.0), "player");
        let mut b = StealFromCharacter::new(CharacterStealConfig {
            detection_range:   8.0,
            follow_delay_secs: 0.5,
            ..Default::default()
        });
        rig.init(&mut b);
        assert_eq!(b.target(), Some(player));
        assert_eq!(b.phase(), Phase::Searching);

        // Delay not yet accumulated.
        for _ in 0..3 {
            rig.step(&mut b);
        }
        assert_eq!(rig.mover.seeks(), 0);
        assert!(!b.is_following());
        assert_eq!(b.status(), BehaviorStatus::Active);

        rig.step(&mut b);
        assert!(b.is_following());
        assert_eq!(rig.mover.seeks(), 1);

        // The player wanders toward the thief.
        for _ in 0..200 {
            if b.is_terminal() {
                break;
            }
            let p = rig.world.position_of(player).unwrap();
            rig.world.set_position(player, p.step_towards(rig.mover.position(), 0.05)).unwrap();
            rig.step(&mut b);
        }

        assert_eq!(b.status(), BehaviorStatus::Complete);
        assert!(rig.carrier.is_carrying());
        assert_eq!(rig.inventory.occupied(), 0);
        assert_eq!(rig.flee_signals(), 1);
        assert!(!b.is_following());
    }

    #[test]
    fn out_of_range_fails_immediately() {
        let mut rig = Rig::new();
        rig.stock(1);
        rig.world.spawn_character(at(12.0), "player");
        let mut b = law_character();
        rig.init(&mut b);
        rig.step(&mut b);
        assert_eq!(b.status(), BehaviorStatus::Failed);
        assert_eq!(rig.flee_signals(), 0);
        assert_eq!(rig.inventory.occupied(), 1);
    }

    #[test]
    fn mid_range_follows() {
        let mut rig = Rig::new();
        rig.world.spawn_character(at(5.0), "player");
        let mut b = law_character();
        rig.init(&mut b);
        rig.step(&mut b);
        assert_eq!(b.status(), BehaviorStatus::Active);
        assert_eq!(rig.mover.commands.last(), Some(&MoveCommand::Seek(at(5.0))));
    }

    #[test]
    fn in_reach_acts_same_tick() {
        let mut rig = Rig::new();
        rig.stock(2);
        rig.world.spawn_character(at(0.8), "player");
        let mut b = law_character();
        rig.init(&mut b);
        rig.step(&mut b);
        assert_eq!(b.status(), BehaviorStatus::Complete);
        assert!(rig.carrier.is_carrying());
        assert_eq!(rig.inventory.occupied(), 1);
    }

    #[test]
    fn hold_band_stands_still() {
        let mut rig = Rig::new();
        rig.world.spawn_character(at(1.3), "player");
        let mut b = law_character();
        rig.init(&mut b);
        rig.step(&mut b);
        assert_eq!(b.status(), BehaviorStatus::Active);
        assert_eq!(b.phase(), Phase::Following);
        assert!(!b.is_following());
        assert_eq!(rig.mover.seeks(), 0);
    }

    #[test]
    fn empty_inventory_fails() {
        let mut rig = Rig::new();
        rig.world.spawn_character(at(0.5), "player");
        let mut b = law_character();
        rig.init(&mut b);
        rig.step(&mut b);
        assert_eq!(b.status(), BehaviorStatus::Failed);
        assert!(!rig.carrier.is_carrying());
        assert_eq!(rig.flee_signals(), 0);
    }

    #[test]
    fn already_carrying_fails_without_touching_loot() {
        let mut rig = Rig::new();
        rig.stock(1);
        let held = CarriedItem::core("idol", Rarity::Legendary, 9.0);
        assert!(rig.carrier.attach(held.clone()).is_none());
        rig.world.spawn_character(at(0.5), "player");
        let mut b = law_character();
        rig.init(&mut b);
        assert!(!rig.can_execute(&b));
        rig.step(&mut b);
        assert_eq!(b.status(), BehaviorStatus::Failed);
        assert_eq!(rig.carrier.carried(), Some(&held));
        assert_eq!(rig.inventory.occupied(), 1);
    }

    #[test]
    fn missing_inventory_disables() {
        let mut rig = Rig::new();
        rig.with_inventory = false;
        rig.world.spawn_character(at(0.5), "player");
        let mut b = law_character();
        rig.init(&mut b);
        assert!(!rig.can_execute(&b));
        rig.step(&mut b);
        assert_eq!(b.status(), BehaviorStatus::Inactive);
        assert!(rig.mover.commands.is_empty());
    }

    #[test]
    fn registry_wins_over_tag() {
        let mut rig = Rig::new();
        rig.world.spawn_character(at(2.0), "player");
        let registered = rig.world.spawn_character(at(4.0), "decoy");
        rig.world.register_reference("player", registered);
        let mut b = law_character();
        rig.init(&mut b);
        assert_eq!(b.target(), Some(registered));
    }

    #[test]
    fn stale_target_is_reresolved() {
        let mut rig = Rig::new();
        let first = rig.world.spawn_character(at(4.0), "player");
        let mut b = law_character();
        rig.init(&mut b);
        rig.world.despawn(first).unwrap();
        let second = rig.world.spawn_character(at(3.0), "player");
        rig.step(&mut b);
        assert_eq!(b.target(), Some(second));
        assert_eq!(b.status(), BehaviorStatus::Active);
    }

    #[test]
    fn vanished_target_fails() {
        let mut rig = Rig::new();
        let only = rig.world.spawn_character(at(4.0), "player");
        let mut b = law_character();
        rig.init(&mut b);
        assert!(rig.can_execute(&b));
        rig.world.despawn(only).unwrap();
        assert!(!rig.can_execute(&b));
        rig.step(&mut b);
        assert_eq!(b.status(), BehaviorStatus::Failed);
    }

    #[test]
    fn undetected_player_is_not_runnable() {
        let mut rig = Rig::new();
        let player = rig.world.spawn_character(at(12.0), "player");
        let mut b = law_character();
        rig.init(&mut b);
        assert!(!rig.can_execute(&b));
        rig.world.set_position(player, at(10.0)).unwrap();
        assert!(rig.can_execute(&b));
    }

    #[test]
    fn reset_leaves_terminal_state() {
        let mut rig = Rig::new();
        rig.world.spawn_character(at(12.0), "player");
        let mut b = law_character();
        rig.init(&mut b);
        rig.step(&mut b);
        assert!(b.is_terminal());
        rig.run(|ctx| b.reset(ctx));
        assert_eq!(b.status(), BehaviorStatus::Inactive);
        assert_eq!(b.phase(), Phase::Searching);
        assert!(b.target().is_some());
    }
}

// ── StealFromDeposit ──────────────────────────────────────────────────────────

#[cfg(test)]
mod deposit_tests {
    use super::*;

    #[test]
    fn empty_deposit_fails() {
        let mut rig = Rig::new();
        rig.world.spawn_deposit(at(0.9), 0);
        let mut b = StealFromDeposit::new(DepositStealConfig::default());
        rig.init(&mut b);
        rig.step(&mut b);
        assert_eq!(b.status(), BehaviorStatus::Failed);
        assert!(!rig.carrier.is_carrying());
        assert_eq!(rig.flee_signals(), 0);
    }

    #[test]
    fn takes_one_unit() {
        let mut rig = Rig::new();
        let d = rig.world.spawn_deposit(at(1.0), 3);
        let mut b = StealFromDeposit::new(DepositStealConfig::default());
        rig.init(&mut b);
        rig.step(&mut b);
        assert_eq!(b.status(), BehaviorStatus::Complete);
        assert_eq!(rig.world.deposit_units(d).unwrap(), 2);
        assert_eq!(rig.carrier.carried(), Some(&CarriedItem::resource_unit()));
        assert_eq!(rig.flee_signals(), 1);
        assert_eq!(rig.signals[0], HostSignal::StartFleeing { from: Some(at(1.0)) });
    }

    #[test]
    fn distance_law() {
        let mut rig = Rig::new();
        rig.world.spawn_deposit(at(12.0), 5);
        let mut b = law_deposit();
        rig.init(&mut b);
        rig.step(&mut b);
        assert_eq!(b.status(), BehaviorStatus::Failed);

        let mut rig = Rig::new();
        rig.world.spawn_deposit(at(5.0), 5);
        let mut b = law_deposit();
        rig.init(&mut b);
        rig.step(&mut b);
        assert_eq!(b.status(), BehaviorStatus::Active);
        assert!(b.is_following());
        assert_eq!(rig.mover.seeks(), 1);

        let mut rig = Rig::new();
        let d = rig.world.spawn_deposit(at(0.8), 5);
        let mut b = law_deposit();
        rig.init(&mut b);
        rig.step(&mut b);
        assert_eq!(b.status(), BehaviorStatus::Complete);
        assert_eq!(rig.world.deposit_units(d).unwrap(), 4);
    }

    #[test]
    fn default_config_reaches_static_deposit() {
        let mut rig = Rig::new();
        let d = rig.world.spawn_deposit(at(6.0), 3);
        let mut b = StealFromDeposit::new(DepositStealConfig::default());
        rig.init(&mut b);
        for _ in 0..200 {
            if b.is_terminal() {
                break;
            }
            rig.step(&mut b);
        }
        assert_eq!(b.status(), BehaviorStatus::Complete);
        assert_eq!(rig.world.deposit_units(d).unwrap(), 2);
        assert!(rig.carrier.is_carrying());
    }

    #[test]
    fn rescans_only_after_cooldown() {
        let mut rig = Rig::new();
        let far = rig.world.spawn_deposit(at(9.0), 1);
        let mut b = StealFromDeposit::new(DepositStealConfig {
            min_follow_distance: 0.5,
            ..Default::default()
        });
        rig.init(&mut b);
        assert_eq!(b.target(), Some(far));

        let near = rig.world.spawn_deposit(at(-3.0), 1);
        for _ in 0..7 {
            rig.step(&mut b);
        }
        assert_eq!(b.target(), Some(far));
        rig.step(&mut b);
        assert_eq!(b.target(), Some(near));
    }

    #[test]
    fn despawned_target_rescans_at_once() {
        let mut rig = Rig::new();
        let first = rig.world.spawn_deposit(at(4.0), 1);
        let mut b = law_deposit();
        rig.init(&mut b);
        rig.world.despawn(first).unwrap();
        let second = rig.world.spawn_deposit(at(6.0), 1);
        rig.step(&mut b);
        assert_eq!(b.target(), Some(second));
        assert_eq!(b.status(), BehaviorStatus::Active);
    }

    #[test]
    fn missing_carrier_disables() {
        let mut rig = Rig::new();
        rig.with_carrier = false;
        rig.world.spawn_deposit(at(1.0), 1);
        let mut b = StealFromDeposit::new(DepositStealConfig::default());
        rig.init(&mut b);
        assert!(!rig.can_execute(&b));
        rig.step(&mut b);
        assert_eq!(b.status(), BehaviorStatus::Inactive);
    }

    #[test]
    fn terminal_execute_is_inert() {
        let mut rig = Rig::new();
        let d = rig.world.spawn_deposit(at(1.0), 3);
        let mut b = StealFromDeposit::new(DepositStealConfig::default());
        rig.init(&mut b);
        rig.step(&mut b);
        assert_eq!(b.status(), BehaviorStatus::Complete);

        rig.mover.commands.clear();
        let phase = b.phase();
        for _ in 0..5 {
            rig.step(&mut b);
        }
        assert_eq!(b.status(), BehaviorStatus::Complete);
        assert_eq!(b.phase(), phase);
        assert!(rig.mover.commands.is_empty());
        assert_eq!(rig.world.deposit_units(d).unwrap(), 2);
        assert_eq!(rig.flee_signals(), 1);
    }
}

// ── CaptureWorker ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod capture_tests {
    use super::*;

    #[test]
    fn capture_possesses_worker() {
        let mut rig = Rig::new();
        let w = rig.world.spawn_worker(at(0.8));
        let mut b = law_worker();
        rig.init(&mut b);
        rig.step(&mut b);
        assert_eq!(b.status(), BehaviorStatus::Complete);
        assert_eq!(b.captured(), Some(w));
        let state = rig.world.worker(w).unwrap();
        assert_eq!(state.parent, Some(rig.host.id));
        assert!(!state.autonomous);
        assert!(!state.physics);
        assert_eq!(rig.flee_signals(), 1);
        assert!(!rig.can_execute(&b));
    }

    #[test]
    fn default_config_reaches_idle_worker() {
        let mut rig = Rig::new();
        let w = rig.world.spawn_worker(at(6.0));
        let mut b = CaptureWorker::new(WorkerCaptureConfig::default());
        rig.init(&mut b);
        for _ in 0..200 {
            if b.is_terminal() {
                break;
            }
            rig.step(&mut b);
        }
        assert_eq!(b.status(), BehaviorStatus::Complete);
        assert_eq!(b.captured(), Some(w));
    }

    #[test]
    fn captured_worker_rides_along() {
        let mut rig = Rig::new();
        let w = rig.world.spawn_worker(at(0.8));
        let mut b = law_worker();
        rig.init(&mut b);
        rig.step(&mut b);
        rig.mover.inner.flee_from(at(5.0));
        for _ in 0..4 {
            rig.step(&mut b);
        }
        let host = rig.mover.position();
        assert!(host.x < 0.0);
        assert_eq!(rig.world.position_of(w), Some(host + Vec3::new(0.0, 1.2, 0.0)));
    }

    #[test]
    fn stop_releases_exactly_once() {
        let mut rig = Rig::new();
        let w = rig.world.spawn_worker(at(0.8));
        let rival = rig.world.spawn_thief(at(3.0));
        let mut b = law_worker();
        rig.init(&mut b);
        rig.step(&mut b);

        rig.run(|ctx| b.stop(ctx));
        assert_eq!(b.captured(), None);
        assert!(!rig.world.worker(w).unwrap().is_possessed());
        assert_eq!(b.status(), BehaviorStatus::Complete);

        // Someone else grabs it; a second stop must not free it.
        rig.world.possess_worker(w, rival.id, Vec3::ZERO).unwrap();
        rig.run(|ctx| b.stop(ctx));
        assert_eq!(rig.world.worker(w).unwrap().parent, Some(rival.id));
    }

    #[test]
    fn lost_target_fails_after_three_intervals() {
        let mut rig = Rig::new();
        rig.world.spawn_worker(at(12.0));
        let mut b = law_worker();
        rig.init(&mut b);
        for _ in 0..23 {
            rig.step(&mut b);
        }
        assert_eq!(b.status(), BehaviorStatus::Active);
        assert_eq!(b.phase(), Phase::Searching);
        rig.step(&mut b);
        assert_eq!(b.status(), BehaviorStatus::Failed);
        assert_eq!(rig.flee_signals(), 0);
    }

    #[test]
    fn research_recovers_target() {
        let mut rig = Rig::new();
        let mut b = law_worker();
        rig.init(&mut b);
        for _ in 0..10 {
            rig.step(&mut b);
        }
        assert!(b.lost_secs() > 1.0);
        let w = rig.world.spawn_worker(at(5.0));
        rig.step(&mut b);
        assert_eq!(b.target(), Some(w));
        assert!(b.is_following());
        assert_eq!(b.lost_secs(), 0.0);
    }

    #[test]
    fn possessed_target_is_dropped() {
        let mut rig = Rig::new();
        let w = rig.world.spawn_worker(at(5.0));
        let rival = rig.world.spawn_thief(at(6.0));
        let mut b = law_worker();
        rig.init(&mut b);
        assert_eq!(b.target(), Some(w));
        rig.world.possess_worker(w, rival.id, Vec3::ZERO).unwrap();
        rig.step(&mut b);
        assert_eq!(b.target(), None);
        assert_eq!(b.status(), BehaviorStatus::Active);
    }

    #[test]
    fn reset_releases_and_rearms() {
        let mut rig = Rig::new();
        let w = rig.world.spawn_worker(at(0.8));
        let mut b = law_worker();
        rig.init(&mut b);
        rig.step(&mut b);
        assert!(b.is_terminal());
        rig.run(|ctx| b.reset(ctx));
        assert_eq!(b.status(), BehaviorStatus::Inactive);
        assert!(!rig.world.worker(w).unwrap().is_possessed());
        assert_eq!(b.target(), Some(w));
        assert!(rig.can_execute(&b));
    }
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dispatch_tests {
    use super::*;

    #[test]
    fn heterogeneous_list() {
        let list: Vec<Box<dyn Behavior>> = vec![
            Box::new(StealFromCharacter::new(CharacterStealConfig::default())),
            Box::new(StealFromDeposit::new(DepositStealConfig::default())),
            Box::new(CaptureWorker::new(WorkerCaptureConfig::default())),
        ];
        let names: Vec<_> = list.iter().map(|b| b.name()).collect();
        assert_eq!(names, ["steal_from_character", "steal_from_deposit", "capture_worker"]);
        assert!(list.iter().all(|b| b.status() == BehaviorStatus::Inactive));
        assert!(list.iter().all(|b| b.phase() == Phase::Idle));
    }
}
