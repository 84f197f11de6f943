//! `sa-agent` — snake agents for the `snake_arena` simulation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`agent`]     | `Agent`, `Vitality`, `DeathCause` — body, heading, score     |
//! | [`heading`]   | `choose_heading` — the greedy Manhattan-distance policy      |
//! | [`roster`]    | `collision_cause`, `check_collision`, `RosterBuilder`        |
//! | [`color`]     | `AgentColor` palette and display RGB constants               |
//!
//! # Design notes
//!
//! An agent never holds a reference to the arena or to other agents.  Every
//! operation that needs the rest of the roster takes it as a slice argument,
//! which is what lets the arena update agents one at a time while later
//! agents in the slice still hold their pre-tick bodies.
//!
//! Dead agents are never removed from a roster.  A corpse stays a solid
//! obstacle for the rest of the session.

pub mod agent;
pub mod color;
pub mod heading;
pub mod roster;

#[cfg(test)]
mod tests;

pub use agent::{Agent, DeathCause, Vitality};
pub use color::{AgentColor, CORPSE_RGB, FOOD_RGB};
pub use heading::choose_heading;
pub use roster::{RosterBuilder, check_collision, collision_cause};
