//! headless — drive a snake arena from the terminal.
//!
//! Runs the simulation at its configured cadence (or flat out with
//! `--no-sleep`), logs events through `tracing`, and prints the final
//! standings.  `--render` draws the board after every tick; `--json` writes
//! the last snapshot to a file.

mod render;

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sa_agent::DeathCause;
use sa_core::{AgentId, ArenaConfig, Cell, Tick};
use sa_sim::{
    ArenaObserver, Placement, SimulationController, TickSummary, TracingObserver,
};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "headless",
    about = "Run the multi-agent snake arena without a window"
)]
struct Args {
    /// Grid width in cells.
    #[arg(long, default_value_t = 32)]
    width: u32,

    /// Grid height in cells.
    #[arg(long, default_value_t = 24)]
    height: u32,

    /// Number of snakes.
    #[arg(short = 'n', long, default_value_t = 3)]
    agents: usize,

    /// RNG seed; the same seed replays the same run.
    #[arg(short = 's', long, default_value_t = 0)]
    seed: u64,

    /// Ticks to run in total, across resets.
    #[arg(short = 't', long, default_value_t = 500)]
    ticks: u64,

    /// Milliseconds between ticks.
    #[arg(long, default_value_t = 100)]
    tick_ms: u64,

    /// Tick as fast as possible instead of on the cadence.
    #[arg(long)]
    no_sleep: bool,

    /// Start a new session as soon as every snake is dead.
    #[arg(long)]
    auto_reset: bool,

    /// Print the board after every tick.
    #[arg(long)]
    render: bool,

    /// Write the final snapshot as JSON to this path.
    #[arg(long)]
    json: Option<PathBuf>,

    /// Log per-tick events.
    #[arg(short, long)]
    verbose: bool,
}

// ── Observer wrapper to count events ─────────────────────────────────────────

#[derive(Default)]
struct RunStats<O: ArenaObserver> {
    inner:     O,
    eaten:     u64,
    deaths:    u64,
    resets:    u64,
    exhausted: u64,
}

impl<O: ArenaObserver> ArenaObserver for RunStats<O> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.inner.on_tick_start(tick);
    }

    fn on_food_eaten(&mut self, tick: Tick, agent: AgentId, cell: Cell) {
        self.eaten += 1;
        self.inner.on_food_eaten(tick, agent, cell);
    }

    fn on_food_placed(&mut self, tick: Tick, placement: Placement) {
        if placement == Placement::NoSpaceAvailable {
            self.exhausted += 1;
        }
        self.inner.on_food_placed(tick, placement);
    }

    fn on_agent_died(&mut self, tick: Tick, agent: AgentId, cause: DeathCause) {
        self.deaths += 1;
        self.inner.on_agent_died(tick, agent, cause);
    }

    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        self.inner.on_tick_end(tick, summary);
    }

    fn on_reset(&mut self, session: u64) {
        self.resets += 1;
        self.inner.on_reset(session);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ArenaConfig {
        width:            args.width,
        height:           args.height,
        agent_count:      args.agents,
        tick_interval_ms: args.tick_ms,
        seed:             args.seed,
        ..ArenaConfig::default()
    };
    let mut sim = SimulationController::new(config).context("invalid arena configuration")?;

    info!(
        width = args.width,
        height = args.height,
        agents = args.agents,
        seed = args.seed,
        "arena ready"
    );

    let mut stats = RunStats::<TracingObserver>::default();
    let interval = sim.tick_interval();
    let start = Instant::now();
    let mut deadline = start;

    for _ in 0..args.ticks {
        sim.tick_with(&mut stats);

        if args.render {
            let arena = sim.arena();
            println!("session {}  {}", arena.session(), arena.tick());
            print!("{}", render::board(arena));
        }

        if sim.arena().is_over() {
            if !args.auto_reset {
                info!(tick = sim.arena().tick().0, "all agents dead");
                break;
            }
            sim.reset_with(&mut stats);
        }

        if !args.no_sleep {
            // Fixed cadence measured from `start`.
            deadline += interval;
            thread::sleep(deadline.saturating_duration_since(Instant::now()));
        }
    }

    let elapsed = start.elapsed();
    let arena = sim.arena();

    println!();
    println!("=== Final standings (session {}, {}) ===", arena.session(), arena.tick());
    println!("{:<6} {:<10} {:<8} {:>6} {:>7}  {}", "rank", "agent", "color", "score", "length", "status");
    for (rank, id) in arena.standings().into_iter().enumerate() {
        let Some(agent) = arena.agent(id) else { continue };
        let status = match agent.death() {
            None                => "alive".to_string(),
            Some((cause, tick)) => format!("{cause} at {tick}"),
        };
        println!(
            "{:<6} {:<10} {:<8} {:>6} {:>7}  {}",
            rank + 1,
            id.0,
            agent.color().to_string(),
            agent.score(),
            agent.len(),
            status,
        );
    }
    println!();
    println!(
        "Food eaten: {}  |  Deaths: {}  |  Resets: {}  |  Placement failures: {}",
        stats.eaten, stats.deaths, stats.resets, stats.exhausted
    );
    println!("Wall time: {:.2}s", elapsed.as_secs_f64());

    if let Some(path) = &args.json {
        let file = File::create(path)
            .with_context(|| format!("cannot create {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &sim.snapshot())?;
        println!("Snapshot written to {}", path.display());
    }

    Ok(())
}
