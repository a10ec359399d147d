//! Ticks, the clock that converts them to seconds, and run-level settings.
//!
//! Scheduling is done in whole ticks so a deferred reset lands on an exact
//! tick.  Behaviors that count seconds (follow delays, rescan cooldowns,
//! give-up timers) add `SimClock::dt_secs()` once per tick instead.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// `n` ticks later.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0.saturating_add(n))
    }

    /// Ticks from `earlier` up to `self`; zero if `earlier` is in the future.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

// ── SimClock ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Simulated milliseconds per tick.
    pub tick_duration_ms: u32,
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(tick_duration_ms: u32) -> Self {
        Self { tick_duration_ms, current_tick: Tick::ZERO }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick.offset(1);
    }

    /// Length of one tick in seconds.
    #[inline]
    pub fn dt_secs(&self) -> f32 {
        self.tick_duration_ms as f32 / 1000.0
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.current_tick.0 as f64 * f64::from(self.tick_duration_ms) / 1000.0
    }

    /// Number of ticks covering `secs`, rounded up and never below one, so a
    /// scheduled task cannot run early or on the tick that scheduled it.
    pub fn ticks_for_secs(&self, secs: f32) -> u64 {
        if self.tick_duration_ms == 0 || secs.is_nan() || secs <= 0.0 {
            return 1;
        }
        let ms = (f64::from(secs) * 1000.0).ceil() as u64;
        ms.div_ceil(u64::from(self.tick_duration_ms)).max(1)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {:.2}s", self.current_tick, self.elapsed_secs())
    }
}

// ── SimConfig ────────────────────────────────────────────────────────────────

/// Run length, tick length and seed.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    pub tick_duration_ms: u32,
    /// Ticks executed by `Sim::run`.
    pub total_ticks: u64,
    /// Seeds the inventory slot picks; equal seeds replay identically.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { tick_duration_ms: 50, total_ticks: 1_200, seed: 0 }
    }
}

impl SimConfig {
    /// Reject a zero tick length; every timer divides by it.
    pub fn validate(&self) -> CoreResult<()> {
        if self.tick_duration_ms == 0 {
            return Err(CoreError::Config("tick_duration_ms must be > 0".into()));
        }
        Ok(())
    }

    /// First tick that `Sim::run` does not execute.
    #[inline]
    pub fn stop_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// A fresh clock at tick zero.
    pub fn clock(&self) -> SimClock {
        SimClock::new(self.tick_duration_ms)
    }
}
