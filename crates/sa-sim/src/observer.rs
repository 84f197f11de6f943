//! Arena observer trait for logging and data collection.

use sa_agent::DeathCause;
use sa_core::{AgentId, Cell, Tick};
use tracing::{debug, info, warn};

use crate::{Placement, TickSummary};

/// Callbacks invoked by the arena while a tick or a reset runs.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Hooks fire in simulation order, so an
/// observer sees `on_food_eaten` for agent 0 before `on_agent_died` for
/// agent 1 within the same tick.
///
/// # Example: death counter
///
/// ```rust
/// use sa_agent::DeathCause;
/// use sa_core::{AgentId, Tick};
/// use sa_sim::ArenaObserver;
///
/// struct Deaths(u32);
///
/// impl ArenaObserver for Deaths {
///     fn on_agent_died(&mut self, _tick: Tick, _agent: AgentId, _cause: DeathCause) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait ArenaObserver {
    /// Called before the first agent is processed.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called when `agent` grows onto the food at `cell`, before the food is
    /// re-placed.
    fn on_food_eaten(&mut self, _tick: Tick, _agent: AgentId, _cell: Cell) {}

    /// Called after every placement, including the initial one of a session.
    fn on_food_placed(&mut self, _tick: Tick, _placement: Placement) {}

    /// Called on the tick an agent dies.
    fn on_agent_died(&mut self, _tick: Tick, _agent: AgentId, _cause: DeathCause) {}

    /// Called after the last agent is processed.
    fn on_tick_end(&mut self, _tick: Tick, _summary: &TickSummary) {}

    /// Called once a fresh session is in place.
    fn on_reset(&mut self, _session: u64) {}
}

/// An [`ArenaObserver`] that does nothing.
pub struct NoopObserver;

impl ArenaObserver for NoopObserver {}

/// Forwards every hook to `tracing` as a structured event.
///
/// Per-tick chatter goes out at `debug`, deaths and resets at `info`, and a
/// failed food placement at `warn`.
#[derive(Default)]
pub struct TracingObserver;

impl ArenaObserver for TracingObserver {
    fn on_food_eaten(&mut self, tick: Tick, agent: AgentId, cell: Cell) {
        debug!(tick = tick.0, agent = agent.0, %cell, "food eaten");
    }

    fn on_food_placed(&mut self, tick: Tick, placement: Placement) {
        match placement {
            Placement::Placed(cell) => debug!(tick = tick.0, %cell, "food placed"),
            Placement::NoSpaceAvailable => {
                warn!(tick = tick.0, "no free cell left for food");
            }
        }
    }

    fn on_agent_died(&mut self, tick: Tick, agent: AgentId, cause: DeathCause) {
        info!(tick = tick.0, agent = agent.0, %cause, "agent died");
    }

    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        debug!(
            tick = tick.0,
            eaten = summary.food_eaten,
            deaths = summary.deaths,
            alive = summary.alive,
            "tick complete"
        );
    }

    fn on_reset(&mut self, session: u64) {
        info!(session, "arena reset");
    }
}
