//! The `Behavior` trait: the contract every thief state machine fulfils.

use crate::{BehaviorContext, BehaviorResult, BehaviorStatus, Phase};

/// Pluggable thief behavior.
///
/// A behavior is owned by exactly one host and is driven entirely by it:
/// `initialize` once on enrolment, then `execute` once per tick while it is
/// the active behavior.  Every call borrows what it needs through the
/// [`BehaviorContext`]; nothing is cached between calls except the
/// behavior's own state and weak target handles.
///
/// # Lifecycle
///
/// - `execute` on a terminal behavior is a no-op.
/// - `on_complete` / `on_failed` are invoked by the behavior itself at the
///   moment it reaches the terminal state.  Calling them again is harmless.
/// - `reset` returns the behavior to `Inactive` and re-runs target
///   discovery.
/// - `stop` halts movement and releases anything the behavior holds, but
///   does not change a terminal status.
///
/// # Example
///
/// ```rust,ignore
/// let mut b = StealFromDeposit::new(DepositStealConfig::default());
/// b.validate_config()?;
/// b.initialize(&mut ctx);
/// while !b.status().is_terminal() {
///     b.execute(&mut ctx);
/// }
/// ```
pub trait Behavior {
    /// Short stable name used in logs and observer events.
    fn name(&self) -> &'static str;

    /// Check the threshold configuration.  Called by the host before the
    /// behavior is enrolled.
    fn validate_config(&self) -> BehaviorResult<()>;

    /// Verify required capabilities are present and perform initial target
    /// discovery.  A missing capability is logged as an error and leaves
    /// the behavior permanently unable to execute.
    fn initialize(&mut self, ctx: &mut BehaviorContext<'_>);

    /// Whether the behavior could usefully run right now.
    fn can_execute(&self, ctx: &BehaviorContext<'_>) -> bool;

    /// Advance the state machine by one tick.
    fn execute(&mut self, ctx: &mut BehaviorContext<'_>);

    /// Success hook: stop following and ask the host to flee.
    fn on_complete(&mut self, ctx: &mut BehaviorContext<'_>);

    /// Failure hook: stop following.  No flee request.
    fn on_failed(&mut self, ctx: &mut BehaviorContext<'_>);

    /// Back to `Inactive` with fresh target discovery.
    fn reset(&mut self, ctx: &mut BehaviorContext<'_>);

    /// Halt movement and release held resources.
    fn stop(&mut self, ctx: &mut BehaviorContext<'_>);

    fn status(&self) -> BehaviorStatus;

    fn phase(&self) -> Phase;

    /// `true` while a move-toward-target command is in force.
    fn is_following(&self) -> bool;

    #[inline]
    fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }
}
