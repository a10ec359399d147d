//! `loot-carrier`: per-entity exclusive ownership of at most one item.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`carrier`]   | `CarrierCapability`, `CarrierConfig`                       |
//! | [`companion`] | `Companion`: the visual object that rides with the item    |
//! | [`observer`]  | `CarrierObserver` hooks, `CarrierEvent`, `CarrierEventLog` |
//!
//! # Ownership
//!
//! A `CarriedItem` is moved *into* the carrier by `attach` and moved *out*
//! as a [`LooseItem`][loot_world::LooseItem] by `drop_item`.  The caller
//! decides where the loose item goes (normally `World::place_item`).  There
//! is no shared ownership and no path that overwrites a held item: attaching
//! while already carrying performs a full drop first and hands the displaced
//! item back.

pub mod carrier;
pub mod companion;
pub mod observer;


pub use carrier::{CarrierCapability, CarrierConfig};
pub use companion::Companion;
pub use observer::{CarrierEvent, CarrierEventLog, CarrierObserver};
