//! `loot-schedule`: interval timers and deferred one-shot callbacks.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`timer`]     | `Stopwatch` (accumulating), `Cooldown` (periodic gate)    |
//! | [`deferred`]  | `DeferredQueue<T>` (`BTreeMap<Tick, Vec<T>>`)             |
//!
//! # Two kinds of periodic work
//!
//! ```text
//! continuous  : evaluated every tick (distance checks, follow-delay stopwatch)
//! periodic    : Cooldown gates a target re-scan to once per search interval
//! deferred    : DeferredQueue entry runs once at tick T, polled each tick
//! ```
//!
//! Nothing here suspends or blocks: a deferred entry is plain data that the
//! owner drains at a tick boundary.  Cancellation is the owner's job; the
//! queue never drops entries on its own.

pub mod deferred;
pub mod timer;


pub use deferred::DeferredQueue;
pub use timer::{Cooldown, Stopwatch};
