//! Per-tick CSV trace of every thief.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use loot_behavior::BehaviorStatus;
use loot_core::{EntityId, Tick, Vec3};
use loot_sim::{HostMode, SimObserver, ThiefHost};
use loot_world::World;

/// Writes `thief_trace.csv` and tallies outcomes for the summary.
pub struct TraceObserver {
    writer:       Writer<File>,
    pub rows:     usize,
    pub finished: Vec<(Tick, EntityId, &'static str, BehaviorStatus)>,
    pub flees:    Vec<(Tick, EntityId, Vec3)>,
    error:        Option<csv::Error>,
}

impl TraceObserver {
    pub fn create(path: &Path) -> csv::Result<Self> {
        let mut writer = Writer::from_path(path)?;
        writer.write_record(["tick", "thief", "x", "z", "mode", "behavior", "status", "carrying"])?;
        Ok(Self {
            writer,
            rows: 0,
            finished: Vec::new(),
            flees: Vec::new(),
            error: None,
        })
    }

    /// The first write error, if any.  Writing stops after it.
    pub fn take_error(&mut self) -> Option<csv::Error> {
        self.error.take()
    }

    fn write_host(&mut self, tick: Tick, host: &ThiefHost) -> csv::Result<()> {
        let pos = host.position();
        let mode = match host.mode() {
            HostMode::Stealing => "stealing",
            HostMode::Fleeing => "fleeing",
        };
        let (behavior, status) = match host.active_behavior() {
            Some(b) => (b.name(), b.status().as_str()),
            None => ("-", "-"),
        };
        let carrying = host.carrier().carried().map(|i| i.to_string()).unwrap_or_default();
        self.writer.write_record(&[
            tick.0.to_string(),
            host.id().to_string(),
            format!("{:.3}", pos.x),
            format!("{:.3}", pos.z),
            mode.to_string(),
            behavior.to_string(),
            status.to_string(),
            carrying,
        ])?;
        self.rows += 1;
        Ok(())
    }
}

impl SimObserver for TraceObserver {
    fn on_tick_end(&mut self, tick: Tick, _world: &World, hosts: &[ThiefHost]) {
        if self.error.is_some() {
            return;
        }
        for host in hosts {
            if let Err(e) = self.write_host(tick, host) {
                self.error = Some(e);
                return;
            }
        }
    }

    fn on_behavior_finished(&mut self, tick: Tick, host: EntityId, behavior: &'static str, status: BehaviorStatus) {
        self.finished.push((tick, host, behavior, status));
    }

    fn on_flee(&mut self, tick: Tick, host: EntityId, from: Vec3) {
        self.flees.push((tick, host, from));
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        if let Err(e) = self.writer.flush()
            && self.error.is_none()
        {
            self.error = Some(e.into());
        }
    }
}
