//! The `Arena` struct and its tick loop.

use sa_agent::{Agent, RosterBuilder, check_collision};
use sa_core::{AgentId, ArenaConfig, Cell, GridSpace, RandomSource, Tick};

use crate::{ArenaObserver, ArenaSnapshot, Food, SimError, SimResult};

// ── TickSummary ───────────────────────────────────────────────────────────────

/// What happened during one tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TickSummary {
    /// The tick that was processed.
    pub tick:       Tick,
    /// Food items eaten (one agent can eat at most one per tick).
    pub food_eaten: u32,
    /// Agents that died this tick.
    pub deaths:     u32,
    /// Agents still alive after the tick.
    pub alive:      usize,
}

// ── Arena ─────────────────────────────────────────────────────────────────────

/// The board: roster, food, and the session's tick counter.
///
/// The arena holds no randomness of its own; every operation that draws
/// takes the source as an argument.  Build one through
/// [`SimulationController`][crate::SimulationController] or
/// [`ControllerBuilder`][crate::ControllerBuilder].
pub struct Arena {
    config:  ArenaConfig,
    grid:    GridSpace,
    agents:  Vec<Agent>,
    food:    Food,
    tick:    Tick,
    session: u64,
}

impl Arena {
    /// A fresh random session.
    pub fn new<R, O>(config: ArenaConfig, rng: &mut R, observer: &mut O) -> SimResult<Self>
    where
        R: RandomSource + ?Sized,
        O: ArenaObserver + ?Sized,
    {
        config.validate()?;
        let grid = config.grid();
        let mut arena = Self {
            config,
            grid,
            agents: Vec::new(),
            food: Food::default(),
            tick: Tick::ZERO,
            session: 0,
        };
        arena.populate(rng, observer);
        Ok(arena)
    }

    /// A session with a caller-supplied roster.
    ///
    /// `agents` must hold exactly `config.agent_count` agents whose ids match
    /// their slots.  With `food == None` the food is placed at random.
    pub fn with_roster<R, O>(
        config:   ArenaConfig,
        agents:   Vec<Agent>,
        food:     Option<Cell>,
        rng:      &mut R,
        observer: &mut O,
    ) -> SimResult<Self>
    where
        R: RandomSource + ?Sized,
        O: ArenaObserver + ?Sized,
    {
        config.validate()?;
        if agents.len() != config.agent_count {
            return Err(SimError::RosterMismatch {
                expected: config.agent_count,
                got:      agents.len(),
            });
        }
        if let Some((slot, agent)) = agents.iter().enumerate().find(|(i, a)| a.id().index() != *i) {
            return Err(SimError::RosterOrder { slot, id: agent.id().0 });
        }

        let grid = config.grid();
        let food = match food {
            Some(cell) => {
                if !grid.contains(cell) || agents.iter().any(|a| a.occupies(cell)) {
                    return Err(SimError::InvalidFood(cell));
                }
                Food::at(cell)
            }
            None => {
                let mut food = Food::default();
                let placement = food.spawn(&agents, grid, config.max_spawn_attempts, rng);
                observer.on_food_placed(Tick::ZERO, placement);
                food
            }
        };

        Ok(Self { config, grid, agents, food, tick: Tick::ZERO, session: 0 })
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance every living agent by one step, in roster order.
    ///
    /// Each agent decides, moves, possibly eats, and is collision-checked
    /// before the next agent is touched, so later agents see earlier agents'
    /// new bodies and earlier agents saw later agents' old ones.
    pub fn step<R, O>(&mut self, rng: &mut R, observer: &mut O) -> TickSummary
    where
        R: RandomSource + ?Sized,
        O: ArenaObserver + ?Sized,
    {
        let now = self.tick;
        observer.on_tick_start(now);

        let mut food_eaten = 0;
        let mut deaths = 0;

        for i in 0..self.agents.len() {
            if !self.agents[i].is_alive() {
                continue;
            }
            let id = self.agents[i].id();
            let food = self.food.position();

            self.agents[i].decide_heading(food);
            let next = self.agents[i].next_head();

            if food == Some(next) {
                self.agents[i].move_forward(true);
                self.agents[i].award_food();
                food_eaten += 1;
                observer.on_food_eaten(now, id, next);

                // Placement sees this agent's new head and everyone else's
                // current body.
                let placement =
                    self.food.spawn(&self.agents, self.grid, self.config.max_spawn_attempts, rng);
                observer.on_food_placed(now, placement);
            } else {
                self.agents[i].move_forward(false);
            }

            if let Some(cause) = check_collision(&mut self.agents, i, self.grid, now) {
                deaths += 1;
                observer.on_agent_died(now, id, cause);
            }
        }

        let summary = TickSummary { tick: now, food_eaten, deaths, alive: self.alive_count() };
        self.tick = now.next();
        observer.on_tick_end(now, &summary);
        summary
    }

    /// Discard the whole session and start a new one with the same config.
    pub fn reset<R, O>(&mut self, rng: &mut R, observer: &mut O)
    where
        R: RandomSource + ?Sized,
        O: ArenaObserver + ?Sized,
    {
        self.session += 1;
        self.tick = Tick::ZERO;
        self.populate(rng, observer);
        observer.on_reset(self.session);
    }

    fn populate<R, O>(&mut self, rng: &mut R, observer: &mut O)
    where
        R: RandomSource + ?Sized,
        O: ArenaObserver + ?Sized,
    {
        self.agents = RosterBuilder::new(self.config.agent_count, self.grid).build(rng);
        self.food = Food::default();
        let placement = self.food.spawn(&self.agents, self.grid, self.config.max_spawn_attempts, rng);
        observer.on_food_placed(Tick::ZERO, placement);
    }

    // ── Read side ─────────────────────────────────────────────────────────

    /// The roster in processing order.  Dead agents stay in place.
    #[inline]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    #[inline]
    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    /// Current food cell; `None` only after a failed placement.
    #[inline]
    pub fn food(&self) -> Option<Cell> {
        self.food.position()
    }

    /// Ticks completed in this session.
    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Number of resets since construction.
    #[inline]
    pub fn session(&self) -> u64 {
        self.session
    }

    #[inline]
    pub fn grid(&self) -> GridSpace {
        self.grid
    }

    #[inline]
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn alive_count(&self) -> usize {
        self.agents.iter().filter(|a| a.is_alive()).count()
    }

    /// `true` once every agent is dead.
    pub fn is_over(&self) -> bool {
        self.alive_count() == 0
    }

    /// Agent ids ordered by score (highest first), ties by id.
    pub fn standings(&self) -> Vec<AgentId> {
        let mut ids: Vec<AgentId> = self.agents.iter().map(|a| a.id()).collect();
        ids.sort_by_key(|id| (std::cmp::Reverse(self.agents[id.index()].score()), *id));
        ids
    }

    /// Owned copy of everything a renderer reads.
    pub fn snapshot(&self) -> ArenaSnapshot {
        ArenaSnapshot::capture(self)
    }
}

impl std::fmt::Debug for Arena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arena")
            .field("grid", &self.grid)
            .field("tick", &self.tick)
            .field("session", &self.session)
            .field("alive", &self.alive_count())
            .field("food", &self.food.position())
            .finish()
    }
}
