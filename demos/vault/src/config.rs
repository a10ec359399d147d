//! Demo configuration, optionally loaded from a JSON file.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use loot_behavior::{CharacterStealConfig, DepositStealConfig, WorkerCaptureConfig};
use loot_core::SimConfig;
use loot_sim::HostConfig;

/// Everything tunable about the vault scenario.
///
/// Missing fields fall back to the defaults below, so a config file only
/// needs the values it changes.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub sim:          SimConfig,
    pub host:         HostConfig,
    pub character:    CharacterStealConfig,
    pub deposit:      DepositStealConfig,
    pub worker:       WorkerCaptureConfig,
    /// Walking speed of the patrolling player, units per second.
    pub player_speed: f32,
    pub output_dir:   PathBuf,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig { total_ticks: 600, seed: 42, ..SimConfig::default() },
            host: HostConfig { retry_delay_secs: Some(2.0), ..HostConfig::default() },
            character: CharacterStealConfig::default(),
            deposit: DepositStealConfig::default(),
            worker: WorkerCaptureConfig::default(),
            player_speed: 1.5,
            output_dir: PathBuf::from("output/vault"),
        }
    }
}

impl DemoConfig {
    /// Read `path` if given, else use the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file)).with_context(|| format!("parsing {}", path.display()))
    }
}
