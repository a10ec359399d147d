//! Errors raised by `loot-core` itself.
//!
//! Higher crates wrap `CoreError` via `#[from]` instead of re-stating it.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
