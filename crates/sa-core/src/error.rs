//! Core error type.
//!
//! Downstream crates wrap `CoreError` as one variant of their own enum via a
//! `From` impl (see `sa_sim::SimError`).

use thiserror::Error;

/// Errors raised while validating arena configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("grid of {cells} cells cannot hold {agents} agents and a food item")]
    GridTooSmall { cells: u64, agents: usize },
}

/// Shorthand result type for `sa-core`.
pub type CoreResult<T> = Result<T, CoreError>;
