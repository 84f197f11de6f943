//! Owned, render-ready copies of arena state.
//!
//! Renderers in the same process can read [`Arena::agents`] directly.  A
//! snapshot is for consumers that must outlive the borrow, such as a
//! renderer thread fed over a channel or a JSON dump at the end of a run.

use sa_agent::{AgentColor, DeathCause};
use sa_core::{AgentId, Cell, Direction, Tick};

use crate::Arena;

/// One agent as a renderer sees it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSnapshot {
    pub id:      AgentId,
    pub color:   AgentColor,
    pub alive:   bool,
    pub score:   u32,
    pub heading: Direction,
    /// Head first.
    pub body:    Vec<Cell>,
    pub death:   Option<DeathCause>,
}

/// The whole arena after a tick.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaSnapshot {
    pub tick:    Tick,
    pub session: u64,
    pub width:   u32,
    pub height:  u32,
    pub food:    Option<Cell>,
    pub agents:  Vec<AgentSnapshot>,
}

impl ArenaSnapshot {
    pub fn capture(arena: &Arena) -> Self {
        let grid = arena.grid();
        let agents = arena
            .agents()
            .iter()
            .map(|a| AgentSnapshot {
                id:      a.id(),
                color:   a.color(),
                alive:   a.is_alive(),
                score:   a.score(),
                heading: a.heading(),
                body:    a.body().iter().copied().collect(),
                death:   a.death().map(|(cause, _)| cause),
            })
            .collect();

        Self {
            tick:    arena.tick(),
            session: arena.session(),
            width:   grid.width,
            height:  grid.height,
            food:    arena.food(),
            agents,
        }
    }
}
