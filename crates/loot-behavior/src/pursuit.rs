//! State shared by every variant: status, phase, current target, and the
//! follow flag, plus the transitions that touch the mover.

use loot_core::Vec3;
use loot_world::EntityHandle;

use crate::{BehaviorContext, BehaviorStatus, HostSignal, Phase};

/// A weakly held target and where it was last seen.
#[derive(Copy, Clone, PartialEq, Debug)]
pub(crate) struct Target {
    pub handle:   EntityHandle,
    pub position: Vec3,
}

#[derive(Debug, Default)]
pub(crate) struct Pursuit {
    pub status:    BehaviorStatus,
    pub phase:     Phase,
    pub target:    Option<Target>,
    pub following: bool,
    /// Set by `initialize` when a required capability is missing.
    pub disabled:  bool,
}

impl Pursuit {
    /// Forget everything except the capability check result.
    pub fn clear(&mut self) {
        let disabled = self.disabled;
        *self = Self { disabled, ..Self::default() };
    }

    /// Enter `Active` on the first execute after init or reset.
    pub fn begin(&mut self) {
        if self.status == BehaviorStatus::Inactive {
            self.status = BehaviorStatus::Active;
        }
    }

    pub fn follow(&mut self, ctx: &mut BehaviorContext<'_>, to: Vec3) {
        ctx.mover.move_toward(to);
        self.following = true;
        self.phase = Phase::Following;
    }

    /// Stop moving without leaving the current phase.
    pub fn halt(&mut self, ctx: &mut BehaviorContext<'_>) {
        if self.following {
            ctx.mover.stop();
        }
        self.following = false;
    }

    /// Terminal success.  Pushes exactly one flee request.
    pub fn complete(&mut self, ctx: &mut BehaviorContext<'_>, name: &str) {
        if self.status.is_terminal() {
            return;
        }
        ctx.mover.stop();
        self.following = false;
        self.status = BehaviorStatus::Complete;
        self.phase = Phase::Done;
        ctx.log.debug(format_args!("{name}: complete"));
        ctx.signals.push(HostSignal::StartFleeing {
            from: self.target.map(|t| t.position),
        });
    }

    /// Terminal failure.
    pub fn fail(&mut self, ctx: &mut BehaviorContext<'_>) {
        if self.status.is_terminal() {
            return;
        }
        ctx.mover.stop();
        self.following = false;
        self.status = BehaviorStatus::Failed;
        self.phase = Phase::Done;
    }
}
