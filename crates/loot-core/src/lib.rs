//! Shared vocabulary for the `loot` crates: identifiers, positions, time,
//! items and the seeded RNG.  Nothing here knows about behaviors or the world.
//!
//! | Module     | Provides                                      |
//! |------------|-----------------------------------------------|
//! | [`ids`]    | `EntityId`, `ItemId`                          |
//! | [`vec3`]   | `Vec3` and the planar distance behaviors use  |
//! | [`time`]   | `Tick`, `SimClock`, `SimConfig`               |
//! | [`rng`]    | `SimRng`                                      |
//! | [`item`]   | `CarriedItem`, `ItemKind`, `Rarity`           |
//! | [`error`]  | `CoreError`, `CoreResult`                     |
//!
//! Enable the `serde` feature to derive `Serialize`/`Deserialize` on the
//! public data types.

pub mod error;
pub mod ids;
pub mod item;
pub mod rng;
pub mod time;
pub mod vec3;

#[cfg(test)]
mod tests;

pub use error::{CoreError, CoreResult};
pub use ids::{EntityId, ItemId};
pub use item::{CarriedItem, ItemKind, Rarity};
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};
pub use vec3::Vec3;
