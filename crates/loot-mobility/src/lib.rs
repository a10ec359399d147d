//! `loot-mobility`: the steering primitive behaviors drive.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`port`]    | `MovementPort` trait: what behaviors are allowed to ask    |
//! | [`command`] | `MoveCommand`: the current steering order                  |
//! | [`mover`]   | `Mover`, `MoverConfig`: kinematic implementation           |
//!
//! # Movement model
//!
//! Behaviors only *issue* commands through [`MovementPort`]; they never
//! integrate motion themselves.  The simulation loop calls
//! [`Mover::integrate`] once per tick after every behavior has run, so all
//! distance checks within a tick see the same positions.  Commands are
//! advisory: there is no arrival guarantee.

pub mod command;
pub mod mover;
pub mod port;


pub use command::MoveCommand;
pub use mover::{Mover, MoverConfig};
pub use port::MovementPort;
