//! `loot-behavior`: the thief's pluggable state machines.
//!
//! # Crate layout
//!
//! | Module              | Contents                                                   |
//! |---------------------|------------------------------------------------------------|
//! | [`model`]           | `Behavior` trait                                           |
//! | [`status`]          | `BehaviorStatus`, `Phase`                                  |
//! | [`context`]         | `BehaviorContext<'a>`, `HostLog`, `HostSignal`             |
//! | [`config`]          | Per-variant threshold structs with `validate()`            |
//! | [`gate`]            | `Approach`: the shared distance-gated transition           |
//! | [`acquire`]         | `nearest_within`: bounded target scan                      |
//! | [`steal_character`] | `StealFromCharacter`                                       |
//! | [`steal_deposit`]   | `StealFromDeposit`                                         |
//! | [`capture_worker`]  | `CaptureWorker`                                            |
//! | [`error`]           | `BehaviorError`, `BehaviorResult<T>`                       |
//!
//! # State machine
//!
//! All three variants share one shape:
//!
//! ```text
//! Inactive --initialize--> Searching <--(target lost)--> Following
//!     Following --(in reach)--> Acting --(success)--> Complete
//!     any edge --(failure rule)--> Failed
//! ```
//!
//! `Complete` and `Failed` are terminal: `execute` is a no-op until
//! `reset`.  Completion pushes [`HostSignal::StartFleeing`]; failure does not.
//!
//! Behaviors never cache references to their siblings.  Everything they
//! touch (world, mover, carrier, inventory, log) is lent to them for the
//! duration of one call through [`BehaviorContext`].

pub mod acquire;
pub mod capture_worker;
pub mod config;
pub mod context;
pub mod error;
pub mod gate;
pub mod model;
pub mod status;
pub mod steal_character;
pub mod steal_deposit;

mod pursuit;

#[cfg(test)]
mod tests;

pub use acquire::nearest_within;
pub use capture_worker::CaptureWorker;
pub use config::{CharacterStealConfig, DepositStealConfig, WorkerCaptureConfig};
pub use context::{BehaviorContext, HostLog, HostSignal};
pub use error::{BehaviorError, BehaviorResult};
pub use gate::Approach;
pub use model::Behavior;
pub use status::{BehaviorStatus, Phase};
pub use steal_character::StealFromCharacter;
pub use steal_deposit::StealFromDeposit;
