//! Lifecycle status and fine-grained phase.

use std::fmt;

/// Coarse lifecycle status shared by every behavior.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum BehaviorStatus {
    #[default]
    Inactive,
    Active,
    Complete,
    Failed,
}

impl BehaviorStatus {
    /// `Complete` and `Failed` are only left through `reset`.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, BehaviorStatus::Complete | BehaviorStatus::Failed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BehaviorStatus::Inactive => "inactive",
            BehaviorStatus::Active   => "active",
            BehaviorStatus::Complete => "complete",
            BehaviorStatus::Failed   => "failed",
        }
    }
}

impl fmt::Display for BehaviorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where in the search → approach → act cycle a behavior currently is.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Phase {
    /// Not initialized.
    #[default]
    Idle,
    /// Looking for (or waiting on) a target.
    Searching,
    /// Closing the distance, or holding just outside reach.
    Following,
    /// Performing the steal/capture this tick.
    Acting,
    /// Terminal.
    Done,
}
