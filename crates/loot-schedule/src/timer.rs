//! Second-based timers advanced by the per-tick `dt`.

/// Accumulates elapsed seconds until reset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stopwatch {
    elapsed: f32,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn tick(&mut self, dt_secs: f32) {
        self.elapsed += dt_secs.max(0.0);
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// `true` once at least `secs` have accumulated.
    #[inline]
    pub fn has_reached(&self, secs: f32) -> bool {
        self.elapsed >= secs
    }

    #[inline]
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

/// A periodic gate: `ready()` becomes true once `period` seconds have passed
/// since the last `restart()`.
///
/// A fresh `Cooldown` starts ready so the first check runs immediately.
#[derive(Clone, Debug, PartialEq)]
pub struct Cooldown {
    period:    f32,
    remaining: f32,
}

impl Cooldown {
    pub fn new(period_secs: f32) -> Self {
        Self {
            period:    period_secs.max(0.0),
            remaining: 0.0,
        }
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    /// Change the period without disturbing the time already waited.
    pub fn set_period(&mut self, period_secs: f32) {
        let waited = self.period - self.remaining;
        self.period = period_secs.max(0.0);
        self.remaining = (self.period - waited).max(0.0);
    }

    #[inline]
    pub fn tick(&mut self, dt_secs: f32) {
        self.remaining = (self.remaining - dt_secs.max(0.0)).max(0.0);
    }

    #[inline]
    pub fn ready(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Start a new period.
    #[inline]
    pub fn restart(&mut self) {
        self.remaining = self.period;
    }

    /// Make the next `ready()` check succeed immediately.
    #[inline]
    pub fn force_ready(&mut self) {
        self.remaining = 0.0;
    }
}
