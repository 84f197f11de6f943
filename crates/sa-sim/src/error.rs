use sa_core::{Cell, CoreError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("arena configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("roster of {got} agents does not match agent count {expected}")]
    RosterMismatch {
        expected: usize,
        got:      usize,
    },

    #[error("agent at roster slot {slot} carries id {id}")]
    RosterOrder { slot: usize, id: u32 },

    #[error("food at {0} is off the grid or inside an agent")]
    InvalidFood(Cell),
}

pub type SimResult<T> = Result<T, SimError>;
