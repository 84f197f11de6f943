//! One snake on the board.

use std::collections::VecDeque;

use sa_core::{AgentId, Cell, Direction, Tick};

use crate::{AgentColor, choose_heading};

// ── Vitality ──────────────────────────────────────────────────────────────────

/// Why an agent died.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeathCause {
    /// The head left the board.
    Wall,
    /// The head landed on the agent's own body.
    SelfCollision,
    /// The head landed on another agent's body (alive or dead).
    Collided(AgentId),
}

impl std::fmt::Display for DeathCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeathCause::Wall          => f.write_str("hit a wall"),
            DeathCause::SelfCollision => f.write_str("ran into itself"),
            DeathCause::Collided(id)  => write!(f, "ran into {id}"),
        }
    }
}

/// Alive, or dead with the cause and the tick it happened on.
///
/// `Dead` is terminal: nothing moves an agent back to `Alive`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Vitality {
    Alive,
    Dead { cause: DeathCause, at: Tick },
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// A snake: head-first body, current heading, vitality and score.
///
/// The body is never empty.  While the agent is alive no cell appears in it
/// twice; the arena's collision check kills the agent on the tick a repeat
/// would first appear.
#[derive(Clone, Debug)]
pub struct Agent {
    id:       AgentId,
    color:    AgentColor,
    body:     VecDeque<Cell>,
    heading:  Direction,
    vitality: Vitality,
    score:    u32,
}

impl Agent {
    /// A fresh one-cell snake at `start` facing `heading`.
    pub fn new(id: AgentId, start: Cell, heading: Direction) -> Self {
        Self {
            id,
            color: AgentColor::for_agent(id),
            body: VecDeque::from([start]),
            heading,
            vitality: Vitality::Alive,
            score: 0,
        }
    }

    /// An alive snake with a pre-built head-first body.
    ///
    /// Returns `None` if `body` is empty.
    pub fn with_body(id: AgentId, body: Vec<Cell>, heading: Direction) -> Option<Self> {
        if body.is_empty() {
            return None;
        }
        Some(Self {
            id,
            color: AgentColor::for_agent(id),
            body: body.into(),
            heading,
            vitality: Vitality::Alive,
            score: 0,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn color(&self) -> AgentColor {
        self.color
    }

    /// Body cells, head first.
    #[inline]
    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    #[inline]
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always `false`; present to pair with [`len`](Self::len).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    #[inline]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    #[inline]
    pub fn vitality(&self) -> Vitality {
        self.vitality
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        matches!(self.vitality, Vitality::Alive)
    }

    /// Cause and tick of death, if dead.
    pub fn death(&self) -> Option<(DeathCause, Tick)> {
        match self.vitality {
            Vitality::Alive              => None,
            Vitality::Dead { cause, at } => Some((cause, at)),
        }
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// `true` if any body cell equals `cell`.
    #[inline]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Where the head would be after one step along the current heading.
    #[inline]
    pub fn next_head(&self) -> Cell {
        self.head().step(self.heading)
    }

    /// RGB a renderer should use: the palette colour, or grey once dead.
    pub fn display_rgb(&self) -> [u8; 3] {
        if self.is_alive() { self.color.rgb() } else { crate::CORPSE_RGB }
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Point the agent toward `food` with the greedy policy and return the
    /// new heading.  Keeps the heading when there is no food or the agent is
    /// dead.
    pub fn decide_heading(&mut self, food: Option<Cell>) -> Direction {
        if let (true, Some(target)) = (self.is_alive(), food) {
            self.heading = choose_heading(self.head(), self.heading, target);
        }
        self.heading
    }

    /// Advance one cell along the heading.
    ///
    /// With `grow == false` the tail is dropped so the length is unchanged;
    /// with `grow == true` the length increases by one.  No bounds or
    /// collision checks happen here.  Dead agents do not move.
    pub fn move_forward(&mut self, grow: bool) {
        if !self.is_alive() {
            return;
        }
        let new_head = self.next_head();
        self.body.push_front(new_head);
        if !grow {
            self.body.pop_back();
        }
    }

    /// Count one food item eaten.
    #[inline]
    pub fn award_food(&mut self) {
        self.score += 1;
    }

    /// Mark the agent dead.  A second call keeps the first cause.
    pub fn kill(&mut self, cause: DeathCause, at: Tick) {
        if self.is_alive() {
            self.vitality = Vitality::Dead { cause, at };
        }
    }
}
