//! vault: a small heist scenario for the loot thief framework.
//!
//! Three thieves share a vault with a patrolling player, two resource
//! deposits (one empty) and two worker units:
//!
//! - the first prefers the player's build inventory, then deposits;
//! - the second only raids deposits;
//! - the third kidnaps workers.
//!
//! Usage: `vault [config.json]`.  Set `RUST_LOG=debug` to see every
//! behavior decision.

mod config;
mod scene;
mod trace;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use loot_carrier::{CarrierEvent, CarrierEventLog};
use loot_sim::{SimBuilder, SimObserver};

use config::DemoConfig;
use trace::TraceObserver;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let cfg = DemoConfig::load(config_path.as_deref())?;

    println!("=== vault: loot thief demo ===");
    println!(
        "Ticks: {}  |  Tick: {} ms  |  Seed: {}",
        cfg.sim.total_ticks, cfg.sim.tick_duration_ms, cfg.sim.seed
    );
    println!();

    // 1. Scene.
    let mut scene = scene::build(&cfg);
    let loot = CarrierEventLog::new();
    for host in &mut scene.hosts {
        host.subscribe_carrier(Box::new(loot.clone()));
    }

    // 2. Sim.
    let mut builder = SimBuilder::new(cfg.sim.clone(), scene.world).inventory(Box::new(scene.inventory));
    for host in scene.hosts {
        builder = builder.host(host);
    }
    let mut sim = builder.build()?;

    // 3. Output.
    std::fs::create_dir_all(&cfg.output_dir)?;
    let mut obs = TraceObserver::create(&cfg.output_dir.join("thief_trace.csv"))?;

    // 4. Run, moving the player between ticks.
    let dt = sim.clock.dt_secs();
    let t0 = Instant::now();
    while sim.clock.current_tick < sim.config.stop_tick() {
        scene.patrol.step(&mut sim.world, dt);
        sim.run_ticks(1, &mut obs)?;
    }
    obs.on_sim_end(sim.clock.current_tick);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  thief_trace.csv : {} rows", obs.rows);
    println!();

    println!("Behavior outcomes:");
    for (tick, host, behavior, status) in &obs.finished {
        println!("  {tick:>6}  {host:<12} {behavior:<22} {status}");
    }
    println!();

    println!("Loot movements:");
    for event in loot.events() {
        match event {
            CarrierEvent::Attached { owner, item } => println!("  {owner:<12} picked up {item}"),
            CarrierEvent::Dropped { owner, item, at } => println!("  {owner:<12} dropped {item} at {at}"),
        }
    }
    println!();

    println!("{:<12} {:<9} {:<6} {:<24} {:<20}", "Thief", "Mode", "Flees", "Carrying", "Position");
    println!("{}", "-".repeat(74));
    for host in &sim.hosts {
        let carrying = host.carrier().carried().map(|i| i.to_string()).unwrap_or_else(|| "-".into());
        println!(
            "{:<12} {:<9} {:<6} {:<24} {:<20}",
            host.id().to_string(),
            format!("{:?}", host.mode()),
            host.flee_count(),
            carrying,
            host.position().to_string(),
        );
    }

    Ok(())
}
