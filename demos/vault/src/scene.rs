//! The vault: one patrolling player, two deposits, two workers, three
//! thieves with different behavior lists.

use loot_behavior::{CaptureWorker, StealFromCharacter, StealFromDeposit};
use loot_core::{CarriedItem, Rarity, Vec3};
use loot_sim::ThiefHost;
use loot_world::{BuildInventory, EntityHandle, World};

use crate::config::DemoConfig;

pub struct Scene {
    pub world:     World,
    pub hosts:     Vec<ThiefHost>,
    pub inventory: BuildInventory,
    pub patrol:    Patrol,
}

/// Walks an entity back and forth between two points.
pub struct Patrol {
    entity:  EntityHandle,
    ends:    [Vec3; 2],
    heading: usize,
    speed:   f32,
}

impl Patrol {
    pub fn step(&mut self, world: &mut World, dt_secs: f32) {
        let Some(pos) = world.position_of(self.entity) else { return };
        let goal = self.ends[self.heading];
        let next = pos.step_towards(goal, self.speed * dt_secs);
        if next == goal {
            self.heading ^= 1;
        }
        // The player can only vanish through despawn, which `position_of`
        // already ruled out.
        let _ = world.set_position(self.entity, next);
    }
}

fn build_inventory(seed: u64) -> BuildInventory {
    let mut inv = BuildInventory::new(6, seed);
    let items = [
        CarriedItem::core("ember shard", Rarity::Common, 1.0),
        CarriedItem::power("tide charm", Rarity::Uncommon, 2.5, 0.15),
        CarriedItem::power("storm core", Rarity::Rare, 5.0, 0.3),
        CarriedItem::core("sun relic", Rarity::Legendary, 12.0),
    ];
    for item in items {
        if let Err(item) = inv.insert(item) {
            tracing::warn!(%item, "inventory full");
        }
    }
    inv
}

pub fn build(cfg: &DemoConfig) -> Scene {
    let mut world = World::new(0.0);

    let player = world.spawn_character(Vec3::new(-7.0, 0.0, 2.0), "player");
    world.register_reference("player", player);
    world.spawn_deposit(Vec3::new(8.0, 0.0, -4.0), 3);
    world.spawn_deposit(Vec3::new(12.0, 0.0, 5.0), 0);
    world.spawn_worker(Vec3::new(-8.0, 0.0, -6.0));
    world.spawn_worker(Vec3::new(-10.0, 0.0, -5.0));

    let mut hosts = Vec::new();

    // Prefers the player's pockets, settles for a deposit.
    let pos = Vec3::ZERO;
    let mut greedy = ThiefHost::new(world.spawn_thief(pos), pos, cfg.host.clone());
    greedy.add_behavior(Box::new(StealFromCharacter::new(cfg.character.clone())));
    greedy.add_behavior(Box::new(StealFromDeposit::new(cfg.deposit.clone())));
    hosts.push(greedy);

    let pos = Vec3::new(6.0, 0.0, -2.0);
    let mut miner = ThiefHost::new(world.spawn_thief(pos), pos, cfg.host.clone());
    miner.add_behavior(Box::new(StealFromDeposit::new(cfg.deposit.clone())));
    hosts.push(miner);

    let pos = Vec3::new(-4.0, 0.0, -3.0);
    let mut kidnapper = ThiefHost::new(world.spawn_thief(pos), pos, cfg.host.clone());
    kidnapper.add_behavior(Box::new(CaptureWorker::new(cfg.worker.clone())));
    hosts.push(kidnapper);

    Scene {
        world,
        hosts,
        inventory: build_inventory(cfg.sim.seed),
        patrol: Patrol {
            entity:  player,
            ends:    [Vec3::new(-7.0, 0.0, 2.0), Vec3::new(7.0, 0.0, 2.0)],
            heading: 1,
            speed:   cfg.player_speed,
        },
    }
}
