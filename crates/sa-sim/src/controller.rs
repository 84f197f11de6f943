//! The one handle surrounding code holds.

use std::time::Duration;

use sa_core::{ArenaConfig, RandomSource, SimRng};

use crate::{
    Arena, ArenaObserver, ArenaSnapshot, ControllerBuilder, NoopObserver, SimResult, TickSummary,
};

/// Owns the arena and the random source and exposes `tick` / `reset`.
///
/// A driver calls [`tick`](Self::tick) once per
/// [`tick_interval`](Self::tick_interval); an input layer calls
/// [`reset`](Self::reset) whenever the user asks for a restart; a renderer
/// reads [`arena`](Self::arena) between ticks.  `&mut self` on both commands
/// guarantees a reset can never land in the middle of a tick.
pub struct SimulationController<R: RandomSource = SimRng> {
    pub(crate) arena: Arena,
    pub(crate) rng:   R,
}

impl SimulationController<SimRng> {
    /// A random session seeded from `config.seed`.
    pub fn new(config: ArenaConfig) -> SimResult<Self> {
        ControllerBuilder::new(config).build()
    }
}

impl<R: RandomSource> SimulationController<R> {
    /// Advance one tick.  The summary may be ignored; state is read through
    /// [`arena`](Self::arena).
    pub fn tick(&mut self) -> TickSummary {
        self.tick_with(&mut NoopObserver)
    }

    /// Advance one tick, reporting events to `observer`.
    pub fn tick_with<O: ArenaObserver + ?Sized>(&mut self, observer: &mut O) -> TickSummary {
        self.arena.step(&mut self.rng, observer)
    }

    /// Advance `n` ticks, reporting events to `observer`.
    pub fn run_ticks<O: ArenaObserver + ?Sized>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.arena.step(&mut self.rng, observer);
        }
    }

    /// Throw the current session away and start a fresh one.  Safe to call
    /// any number of times in a row.
    pub fn reset(&mut self) {
        self.reset_with(&mut NoopObserver);
    }

    pub fn reset_with<O: ArenaObserver + ?Sized>(&mut self, observer: &mut O) {
        self.arena.reset(&mut self.rng, observer);
    }

    /// Read-only view for renderers.
    #[inline]
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn snapshot(&self) -> ArenaSnapshot {
        self.arena.snapshot()
    }

    /// Time the driver should wait between two ticks.
    #[inline]
    pub fn tick_interval(&self) -> Duration {
        self.arena.config().tick_interval()
    }
}
