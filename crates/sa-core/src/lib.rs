//! `sa-core` — foundational types for the `snake_arena` simulation.
//!
//! This crate is a dependency of every other `sa-*` crate.  It has no `sa-*`
//! dependencies and only `rand` and `thiserror` externally (plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`grid`]        | `Cell`, `Direction`, `GridSpace`                      |
//! | [`ids`]         | `AgentId`                                             |
//! | [`time`]        | `Tick`, `ArenaConfig`                                 |
//! | [`rng`]         | `RandomSource` trait, `SimRng` (seeded `SmallRng`)    |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod grid;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use grid::{Cell, Direction, GridSpace};
pub use ids::AgentId;
pub use rng::{RandomSource, SimRng};
pub use time::{ArenaConfig, Tick};
