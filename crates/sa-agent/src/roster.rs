//! Roster-level operations: collision checks and session construction.
//!
//! A roster is a plain `[Agent]` slice indexed by `AgentId`.  Collision
//! checks read whatever bodies the slice holds *at the moment of the call*;
//! the arena relies on this to give earlier agents in a tick priority over
//! later ones.

use sa_core::{AgentId, GridSpace, RandomSource, Tick};

use crate::{Agent, DeathCause};

// ── Collision ─────────────────────────────────────────────────────────────────

/// Why `roster[index]` would die at its current head position, if at all.
///
/// Checks run in a fixed order and the first hit wins:
///
/// 1. head outside the grid → [`DeathCause::Wall`]
/// 2. head on its own body (index 1..) → [`DeathCause::SelfCollision`]
/// 3. head on any other agent's body, dead or alive, lowest index first →
///    [`DeathCause::Collided`]
pub fn collision_cause(roster: &[Agent], index: usize, grid: GridSpace) -> Option<DeathCause> {
    let agent = &roster[index];
    let head = agent.head();

    if !grid.contains(head) {
        return Some(DeathCause::Wall);
    }
    if agent.body().iter().skip(1).any(|&c| c == head) {
        return Some(DeathCause::SelfCollision);
    }
    roster
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != index)
        .find(|(_, other)| other.occupies(head))
        .map(|(_, other)| DeathCause::Collided(other.id()))
}

/// Kill `roster[index]` if its head collides with anything.
///
/// Returns the cause when the agent died on this call.  Already-dead agents
/// are left untouched and yield `None`.
pub fn check_collision(
    roster: &mut [Agent],
    index:  usize,
    grid:   GridSpace,
    now:    Tick,
) -> Option<DeathCause> {
    if !roster[index].is_alive() {
        return None;
    }
    let cause = collision_cause(roster, index, grid)?;
    roster[index].kill(cause, now);
    Some(cause)
}

// ── RosterBuilder ─────────────────────────────────────────────────────────────

/// Builds the agents for a new session.
///
/// Each agent is a single cell at a uniformly random position with a
/// uniformly random heading.  Draws happen in roster order, cell before
/// heading, so a seeded source reproduces the same roster.  Starting cells
/// are drawn independently and may coincide.
///
/// ```rust
/// use sa_agent::RosterBuilder;
/// use sa_core::{GridSpace, SimRng};
///
/// let mut rng = SimRng::new(42);
/// let roster = RosterBuilder::new(3, GridSpace::new(32, 24)).build(&mut rng);
///
/// assert_eq!(roster.len(), 3);
/// assert!(roster.iter().all(|a| a.is_alive() && a.len() == 1));
/// ```
pub struct RosterBuilder {
    count: usize,
    grid:  GridSpace,
}

impl RosterBuilder {
    pub fn new(count: usize, grid: GridSpace) -> Self {
        Self { count, grid }
    }

    pub fn build<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Vec<Agent> {
        (0..self.count as u32)
            .map(|i| {
                let start = self.grid.random_cell(rng);
                let heading = rng.direction();
                Agent::new(AgentId(i), start, heading)
            })
            .collect()
    }
}
