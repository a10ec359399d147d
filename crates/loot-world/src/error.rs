use loot_core::ItemId;
use thiserror::Error;

use crate::{EntityHandle, EntityKind};

#[derive(Debug, Error, PartialEq)]
pub enum WorldError {
    #[error("handle {0} no longer refers to a live entity")]
    StaleHandle(EntityHandle),

    #[error("entity {handle} is a {actual:?}, expected {expected:?}")]
    WrongKind {
        handle:   EntityHandle,
        expected: EntityKind,
        actual:   EntityKind,
    },

    #[error("worker {0} is already possessed")]
    AlreadyPossessed(EntityHandle),

    #[error("loose item {0} does not exist")]
    NoSuchItem(ItemId),
}

pub type WorldResult<T> = Result<T, WorldError>;
