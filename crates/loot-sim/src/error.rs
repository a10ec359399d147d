use loot_core::{CoreError, EntityId};
use loot_world::{EntityHandle, EntityKind, WorldError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("host entity {handle} is {actual:?}, not a live thief")]
    NotAThief {
        handle: EntityHandle,
        actual: Option<EntityKind>,
    },

    #[error("more than one host drives {0}")]
    DuplicateHost(EntityId),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("world error: {0}")]
    World(#[from] WorldError),
}

pub type SimResult<T> = Result<T, SimError>;
