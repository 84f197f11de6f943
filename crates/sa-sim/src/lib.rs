//! `sa-sim` — arena tick loop and simulation controller for `snake_arena`.
//!
//! # One tick
//!
//! ```text
//! for agent in roster (ascending AgentId), if alive:
//!   ① Decide   — greedy heading toward the food
//!   ② Move     — grow if the next head is the food, else slide
//!   ③ Eat      — score += 1; re-place food against the roster *now*
//!   ④ Collide  — wall, self, or any other body as the roster stands *now*
//! ```
//!
//! Agents are processed strictly one after another.  When agent `k` runs its
//! collision check, agents `0..k` have already moved this tick and agents
//! `k+1..` still hold their bodies from the previous tick.  Whether a snake
//! survives stepping into a neighbour's tail cell therefore depends on roster
//! order.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                  |
//! |-----------|---------------------------------------------------------|
//! | `fx-hash` | FxHash for the occupancy set used by food placement.    |
//! | `serde`   | `Serialize`/`Deserialize` on [`ArenaSnapshot`].         |
//!
//! # Quick-start
//!
//! ```rust
//! use sa_core::ArenaConfig;
//! use sa_sim::SimulationController;
//!
//! let mut sim = SimulationController::new(ArenaConfig { seed: 7, ..ArenaConfig::default() })?;
//! for _ in 0..50 {
//!     sim.tick();
//! }
//! let arena = sim.arena();
//! println!("alive: {}  food: {:?}", arena.alive_count(), arena.food());
//! sim.reset();
//! # Ok::<(), sa_sim::SimError>(())
//! ```

pub mod arena;
pub mod builder;
pub mod controller;
pub mod error;
pub mod food;
pub mod observer;
pub mod snapshot;


pub use arena::{Arena, TickSummary};
pub use builder::ControllerBuilder;
pub use controller::SimulationController;
pub use error::{SimError, SimResult};
pub use food::{Food, Occupancy, Placement};
pub use observer::{ArenaObserver, NoopObserver, TracingObserver};
pub use snapshot::{AgentSnapshot, ArenaSnapshot};
