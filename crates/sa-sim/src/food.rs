//! Food placement.
//!
//! Placement is rejection sampling with a bounded number of draws: up to
//! `max_attempts` uniformly random cells, taking the first one no agent
//! covers.  If every draw lands on a body, the free cells are enumerated and
//! one is picked uniformly.  Only a board with no free cell at all reports
//! [`Placement::NoSpaceAvailable`], and the food then stays off the board
//! until the next session.

use sa_agent::Agent;
use sa_core::{Cell, GridSpace, RandomSource};

#[cfg(feature = "fx-hash")]
type CellSet = rustc_hash::FxHashSet<Cell>;
#[cfg(not(feature = "fx-hash"))]
type CellSet = std::collections::HashSet<Cell>;

// ── Occupancy ─────────────────────────────────────────────────────────────────

/// Every cell covered by any agent body, dead or alive.
///
/// Built once per placement from the roster as it stands at that moment.
pub struct Occupancy(CellSet);

impl Occupancy {
    pub fn of(roster: &[Agent]) -> Self {
        let mut cells = CellSet::default();
        for agent in roster {
            cells.extend(agent.body().iter().copied());
        }
        Occupancy(cells)
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.0.contains(&cell)
    }
}

// ── Placement ─────────────────────────────────────────────────────────────────

/// Outcome of one placement attempt.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Placement {
    Placed(Cell),
    NoSpaceAvailable,
}

// ── Food ──────────────────────────────────────────────────────────────────────

/// The single food item.  `None` only after a failed placement.
#[derive(Clone, Debug, Default)]
pub struct Food {
    position: Option<Cell>,
}

impl Food {
    /// Food at a known cell.  The caller guarantees the cell is free.
    pub fn at(cell: Cell) -> Self {
        Self { position: Some(cell) }
    }

    #[inline]
    pub fn position(&self) -> Option<Cell> {
        self.position
    }

    /// Move the food to a uniformly random free cell.
    pub fn spawn<R: RandomSource + ?Sized>(
        &mut self,
        roster:       &[Agent],
        grid:         GridSpace,
        max_attempts: u32,
        rng:          &mut R,
    ) -> Placement {
        let occupied = Occupancy::of(roster);

        for _ in 0..max_attempts {
            let cell = grid.random_cell(rng);
            if !occupied.contains(cell) {
                self.position = Some(cell);
                return Placement::Placed(cell);
            }
        }

        // Crowded board: choose directly among what is left.
        let free: Vec<Cell> = grid.cells().filter(|&c| !occupied.contains(c)).collect();
        match rng.pick(free.len()) {
            Some(i) => {
                self.position = Some(free[i]);
                Placement::Placed(free[i])
            }
            None => {
                self.position = None;
                Placement::NoSpaceAvailable
            }
        }
    }
}
