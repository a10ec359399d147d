//! Per-host configuration.

use loot_carrier::CarrierConfig;
use loot_mobility::MoverConfig;

use crate::{SimError, SimResult};

/// Tunables for one [`ThiefHost`][crate::ThiefHost].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HostConfig {
    pub mover:   MoverConfig,
    pub carrier: CarrierConfig,
    /// Reset a failed behavior after this many seconds.  `None` leaves
    /// failed behaviors failed until reset by hand.
    pub retry_delay_secs: Option<f32>,
}

impl HostConfig {
    pub fn validate(&self) -> SimResult<()> {
        if let Some(d) = self.retry_delay_secs
            && !(d.is_finite() && d >= 0.0)
        {
            return Err(SimError::Config(format!("retry_delay_secs must be finite and >= 0 (got {d})")));
        }
        let m = &self.mover;
        if !(m.speed.is_finite() && m.speed >= 0.0 && m.flee_speed.is_finite() && m.flee_speed >= 0.0) {
            return Err(SimError::Config(format!(
                "mover speeds must be finite and >= 0 (got {} / {})",
                m.speed, m.flee_speed
            )));
        }
        Ok(())
    }
}
