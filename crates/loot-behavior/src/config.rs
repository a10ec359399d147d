//! Per-variant threshold configuration.
//!
//! Distances are in world units, intervals in seconds.

use loot_core::Vec3;

use crate::{BehaviorError, BehaviorResult};

fn check_non_negative(owner: &str, field: &str, value: f32) -> BehaviorResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(BehaviorError::Config(format!("{owner}.{field} must be finite and >= 0 (got {value})")))
    }
}

/// Shared range checks: each threshold non-negative, and neither the reach
/// nor the minimum follow distance may exceed detection range.
fn check_ranges(owner: &str, detection: f32, reach: f32, min_follow: f32) -> BehaviorResult<()> {
    check_non_negative(owner, "detection_range", detection)?;
    check_non_negative(owner, "reach", reach)?;
    check_non_negative(owner, "min_follow_distance", min_follow)?;
    if reach > detection {
        return Err(BehaviorError::Config(format!(
            "{owner}: reach {reach} exceeds detection range {detection}"
        )));
    }
    if min_follow > detection {
        return Err(BehaviorError::Config(format!(
            "{owner}: min follow distance {min_follow} exceeds detection range {detection}"
        )));
    }
    Ok(())
}

// ── Character ─────────────────────────────────────────────────────────────────

/// Thresholds for stealing from the player character.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CharacterStealConfig {
    pub detection_range:     f32,
    pub take_distance:       f32,
    pub min_follow_distance: f32,
    /// Continuous detection required before following starts.
    pub follow_delay_secs:   f32,
    /// Registry key tried first when resolving the target.
    pub reference_key:       String,
    /// Tag searched for when the registry has no live entry.
    pub target_tag:          String,
}

impl Default for CharacterStealConfig {
    fn default() -> Self {
        Self {
            detection_range:     8.0,
            take_distance:       1.0,
            min_follow_distance: 1.5,
            follow_delay_secs:   0.5,
            reference_key:       "player".into(),
            target_tag:          "player".into(),
        }
    }
}

impl CharacterStealConfig {
    pub fn validate(&self) -> BehaviorResult<()> {
        check_ranges("character_steal", self.detection_range, self.take_distance, self.min_follow_distance)?;
        check_non_negative("character_steal", "follow_delay_secs", self.follow_delay_secs)
    }
}

// ── Deposit ───────────────────────────────────────────────────────────────────

/// Thresholds for stealing a unit from the nearest resource deposit.
///
/// Deposits never move, so a `min_follow_distance` above `take_distance`
/// leaves a band where the thief stops short and waits forever.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DepositStealConfig {
    pub detection_range:     f32,
    pub take_distance:       f32,
    pub min_follow_distance: f32,
    /// Minimum time between periodic rescans.
    pub search_interval_secs: f32,
}

impl Default for DepositStealConfig {
    fn default() -> Self {
        Self {
            detection_range:      10.0,
            take_distance:        1.2,
            min_follow_distance:  1.0,
            search_interval_secs: 1.0,
        }
    }
}

impl DepositStealConfig {
    pub fn validate(&self) -> BehaviorResult<()> {
        check_ranges("deposit_steal", self.detection_range, self.take_distance, self.min_follow_distance)?;
        check_non_negative("deposit_steal", "search_interval_secs", self.search_interval_secs)
    }

    /// `true` when a deposit can sit in the hold band, out of reach.
    #[inline]
    pub fn holds_outside_reach(&self) -> bool {
        self.min_follow_distance > self.take_distance
    }
}

// ── Worker ────────────────────────────────────────────────────────────────────

/// Thresholds for capturing and carrying off a worker unit.
///
/// Keep `min_follow_distance` at or below `approach_distance`: an idle
/// worker inside the hold band is never reached.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorkerCaptureConfig {
    pub detection_range:      f32,
    pub approach_distance:    f32,
    pub min_follow_distance:  f32,
    pub search_interval_secs: f32,
    /// Where the captured worker rides relative to the thief.
    pub carry_offset:         Vec3,
}

impl Default for WorkerCaptureConfig {
    fn default() -> Self {
        Self {
            detection_range:      10.0,
            approach_distance:    1.0,
            min_follow_distance:  0.8,
            search_interval_secs: 1.0,
            carry_offset:         Vec3::new(0.0, 1.2, 0.0),
        }
    }
}

impl WorkerCaptureConfig {
    /// Number of search intervals without a target before giving up.
    pub const SEARCH_INTERVALS_BEFORE_FAIL: f32 = 3.0;

    pub fn validate(&self) -> BehaviorResult<()> {
        check_ranges("worker_capture", self.detection_range, self.approach_distance, self.min_follow_distance)?;
        check_non_negative("worker_capture", "search_interval_secs", self.search_interval_secs)
    }

    /// `true` when an idle worker can sit in the hold band, out of reach.
    #[inline]
    pub fn holds_outside_reach(&self) -> bool {
        self.min_follow_distance > self.approach_distance
    }

    /// How long the behavior keeps re-searching before it fails.
    #[inline]
    pub fn give_up_after_secs(&self) -> f32 {
        self.search_interval_secs * Self::SEARCH_INTERVALS_BEFORE_FAIL
    }
}
