//! Tick counter and session configuration.
//!
//! # Design
//!
//! Simulation time is a monotonically increasing `Tick` counter that resets
//! to zero with every new session.  The mapping to wall-clock time is only
//! the driver's concern: it calls `tick()` once every
//! [`ArenaConfig::tick_interval`].  Nothing inside a tick reads the clock.

use std::fmt;
use std::time::Duration;

use crate::{CoreError, CoreResult, GridSpace};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// Number of ticks completed in the current session.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick after `self`.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── ArenaConfig ───────────────────────────────────────────────────────────────

/// Session constants, fixed from construction until the controller is dropped.
///
/// `reset()` reuses the same configuration; only the random draws differ.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaConfig {
    /// Columns on the board.  Default: 32 (a 640 px window at 20 px cells).
    pub width: u32,

    /// Rows on the board.  Default: 24 (a 480 px window at 20 px cells).
    pub height: u32,

    /// Snakes in every session.  Default: 3.
    pub agent_count: usize,

    /// Milliseconds between ticks as driven by the outer loop.  Default: 100
    /// (10 ticks per second).
    pub tick_interval_ms: u64,

    /// Master RNG seed.  The same seed always produces identical sessions.
    pub seed: u64,

    /// Random samples food placement tries before falling back to scanning
    /// the free cells.  Default: 1000.
    pub max_spawn_attempts: u32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width:              32,
            height:             24,
            agent_count:        3,
            tick_interval_ms:   100,
            seed:               0,
            max_spawn_attempts: 1_000,
        }
    }
}

impl ArenaConfig {
    /// The board described by `width` × `height`.
    #[inline]
    pub fn grid(&self) -> GridSpace {
        GridSpace::new(self.width, self.height)
    }

    /// Wall-clock time between two ticks.
    #[inline]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Check that the configuration describes a playable session.
    ///
    /// The board must hold every single-cell starting snake plus one food
    /// item, otherwise the very first placement could find no free cell.
    pub fn validate(&self) -> CoreResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CoreError::InvalidConfig(format!(
                "grid must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > i32::MAX as u32 || self.height > i32::MAX as u32 {
            return Err(CoreError::InvalidConfig(
                "grid dimensions must fit in i32".to_string(),
            ));
        }
        if self.agent_count == 0 {
            return Err(CoreError::InvalidConfig("agent_count must be at least 1".to_string()));
        }
        if u32::try_from(self.agent_count).is_err() {
            return Err(CoreError::InvalidConfig(format!(
                "agent_count {} exceeds u32",
                self.agent_count
            )));
        }
        let cells = self.grid().cell_count();
        if cells <= self.agent_count as u64 {
            return Err(CoreError::GridTooSmall { cells, agents: self.agent_count });
        }
        if self.tick_interval_ms == 0 {
            return Err(CoreError::InvalidConfig("tick_interval_ms must be positive".to_string()));
        }
        if self.max_spawn_attempts == 0 {
            return Err(CoreError::InvalidConfig(
                "max_spawn_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
