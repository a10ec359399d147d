//! `loot-world`: the world the thief entities act on.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`handle`]    | `EntityHandle` (id + generation), `EntityKind`                |
//! | [`world`]     | `World` SoA storage, discovery, registry, deposits, workers   |
//! | [`loose`]     | `LooseItem`: world-owned, unclaimed pickups                   |
//! | [`inventory`] | `InventoryService` trait, `BuildInventory` slot container     |
//! | [`error`]     | `WorldError`, `WorldResult<T>`                                |
//!
//! # Weak references
//!
//! Behaviors never own what they chase.  They hold an [`EntityHandle`] and
//! re-resolve it through [`World::position_of`] each time they need a
//! position; a despawned entity bumps its generation so every outstanding
//! handle to it resolves to `None` from then on.

pub mod error;
pub mod handle;
pub mod inventory;
pub mod loose;
pub mod world;


pub use error::{WorldError, WorldResult};
pub use handle::{EntityHandle, EntityKind};
pub use inventory::{BuildInventory, InventoryService};
pub use loose::LooseItem;
pub use world::{WorkerState, World};
