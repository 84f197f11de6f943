//! Fluent builder for constructing a [`SimulationController`].

use sa_agent::Agent;
use sa_core::{ArenaConfig, Cell, RandomSource, SimRng};

use crate::{Arena, ArenaObserver, NoopObserver, SimResult, SimulationController};

/// Fluent builder for [`SimulationController<R>`].
///
/// # Required inputs
///
/// - [`ArenaConfig`] — grid size, agent count, tick interval, seed, …
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                   |
/// |-------------------|-------------------------------------------|
/// | `.rng(r)`         | `SimRng::new(config.seed)`                |
/// | `.roster(v)`      | Random single-cell agents                 |
/// | `.food(cell)`     | Random free cell                          |
///
/// A caller-supplied roster only shapes the first session; `reset()` always
/// draws a fresh random one.
///
/// # Example
///
/// ```rust
/// use sa_agent::Agent;
/// use sa_core::{AgentId, ArenaConfig, Cell, Direction};
/// use sa_sim::ControllerBuilder;
///
/// let config = ArenaConfig { agent_count: 1, ..ArenaConfig::default() };
/// let snake = Agent::new(AgentId(0), Cell::new(4, 4), Direction::Right);
/// let mut sim = ControllerBuilder::new(config)
///     .roster(vec![snake])
///     .food(Cell::new(5, 4))
///     .build()?;
/// sim.tick();
/// assert_eq!(sim.arena().agents()[0].score(), 1);
/// # Ok::<(), sa_sim::SimError>(())
/// ```
pub struct ControllerBuilder<R: RandomSource = SimRng> {
    config: ArenaConfig,
    rng:    R,
    roster: Option<Vec<Agent>>,
    food:   Option<Cell>,
}

impl ControllerBuilder<SimRng> {
    pub fn new(config: ArenaConfig) -> Self {
        let rng = SimRng::new(config.seed);
        Self { config, rng, roster: None, food: None }
    }
}

impl<R: RandomSource> ControllerBuilder<R> {
    /// Replace the random source, e.g. with a scripted one in tests.
    pub fn rng<R2: RandomSource>(self, rng: R2) -> ControllerBuilder<R2> {
        ControllerBuilder {
            config: self.config,
            rng,
            roster: self.roster,
            food:   self.food,
        }
    }

    /// Start the first session from this roster (length `agent_count`,
    /// ids matching slots).
    pub fn roster(mut self, roster: Vec<Agent>) -> Self {
        self.roster = Some(roster);
        self
    }

    /// Start the first session with food at `cell`.  Only honoured together
    /// with [`roster`](Self::roster).
    pub fn food(mut self, cell: Cell) -> Self {
        self.food = Some(cell);
        self
    }

    /// Validate inputs and return a ready-to-tick controller.
    pub fn build(self) -> SimResult<SimulationController<R>> {
        self.build_with(&mut NoopObserver)
    }

    /// Like [`build`](Self::build), reporting the first food placement to
    /// `observer`.
    pub fn build_with<O: ArenaObserver + ?Sized>(
        self,
        observer: &mut O,
    ) -> SimResult<SimulationController<R>> {
        let mut rng = self.rng;
        let arena = match self.roster {
            Some(roster) => Arena::with_roster(self.config, roster, self.food, &mut rng, observer)?,
            None         => Arena::new(self.config, &mut rng, observer)?,
        };
        Ok(SimulationController { arena, rng })
    }
}
