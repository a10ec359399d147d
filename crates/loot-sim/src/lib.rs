//! `loot-sim`: behavior hosts and the tick loop.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Tasks    each host drains its deferred tasks due this tick
//!              (behavior retries; stale-epoch tasks are dropped).
//!   ② Init     behaviors enrolled since the last tick are initialized.
//!   ③ Select   keep the active behavior unless it is terminal,
//!              otherwise pick the first whose can_execute() is true.
//!   ④ Execute  active behavior runs once; its signals are applied
//!              (StartFleeing → flee mode).
//!   ⑤ Move     movers integrate; world positions and carried
//!              companions follow.
//!   ⑥ Sync     possessed workers snap to their carriers.
//! ```
//!
//! Hosts are processed in the order they were added to the builder, so a
//! run is fully determined by its inputs.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let mut world = World::new(0.0);
//! let thief = world.spawn_thief(Vec3::ZERO);
//! world.spawn_deposit(Vec3::new(4.0, 0.0, 0.0), 3);
//!
//! let mut host = ThiefHost::new(thief, Vec3::ZERO, HostConfig::default());
//! host.add_behavior(Box::new(StealFromDeposit::new(DepositStealConfig::default())));
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), world).host(host).build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod host;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use config::HostConfig;
pub use error::{SimError, SimResult};
pub use host::{HostEvent, HostMode, HostTask, ThiefHost};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
