//! The distance-gated transition shared by every variant.

/// What a behavior should do given its distance to the current target.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Approach {
    /// Within reach: act this tick.
    InReach,
    /// Detected and far enough away to be worth closing in on.
    Follow,
    /// Detected but inside the minimum follow distance: stand still.
    Hold,
    /// Beyond detection range.
    OutOfRange,
}

impl Approach {
    /// Classify `distance` against the variant's thresholds.
    ///
    /// Reach wins over everything else; otherwise anything past `detection`
    /// is out of range, and anything inside `min_follow` is held.
    pub fn classify(distance: f32, reach: f32, min_follow: f32, detection: f32) -> Self {
        if distance <= reach {
            Approach::InReach
        } else if distance > detection {
            Approach::OutOfRange
        } else if distance > min_follow {
            Approach::Follow
        } else {
            Approach::Hold
        }
    }

    #[inline]
    pub fn is_detected(self) -> bool {
        !matches!(self, Approach::OutOfRange)
    }
}
