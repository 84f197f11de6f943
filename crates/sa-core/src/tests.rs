//! Unit tests for sa-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index() {
        assert_eq!(AgentId(2).index(), 2);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod grid {
    use crate::{Cell, Direction, GridSpace};

    #[test]
    fn step_follows_delta() {
        let c = Cell::new(5, 5);
        assert_eq!(c.step(Direction::Right), Cell::new(6, 5));
        assert_eq!(c.step(Direction::Left), Cell::new(4, 5));
        assert_eq!(c.step(Direction::Down), Cell::new(5, 6));
        assert_eq!(c.step(Direction::Up), Cell::new(5, 4));
    }

    #[test]
    fn reverse_negates_vector() {
        for dir in Direction::ALL {
            let (dc, dr) = dir.delta();
            assert_eq!(dir.reverse().delta(), (-dc, -dr));
            assert_eq!(dir.reverse().reverse(), dir);
        }
    }

    #[test]
    fn canonical_order() {
        let deltas: Vec<_> = Direction::ALL.iter().map(|d| d.delta()).collect();
        assert_eq!(deltas, vec![(1, 0), (-1, 0), (0, 1), (0, -1)]);
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(Cell::new(5, 5).manhattan(Cell::new(5, 0)), 5);
        assert_eq!(Cell::new(-1, 0).manhattan(Cell::new(2, 4)), 7);
        assert_eq!(Cell::new(3, 3).manhattan(Cell::new(3, 3)), 0);
    }

    #[test]
    fn bounds() {
        let g = GridSpace::new(4, 3);
        assert!(g.contains(Cell::new(0, 0)));
        assert!(g.contains(Cell::new(3, 2)));
        assert!(!g.contains(Cell::new(-1, 0)));
        assert!(!g.contains(Cell::new(0, -1)));
        assert!(!g.contains(Cell::new(4, 0)));
        assert!(!g.contains(Cell::new(0, 3)));
    }

    #[test]
    fn cells_enumerates_row_major() {
        let g = GridSpace::new(2, 2);
        let cells: Vec<_> = g.cells().collect();
        assert_eq!(
            cells,
            vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(0, 1), Cell::new(1, 1)]
        );
        assert_eq!(g.cell_count(), 4);
    }
}

#[cfg(test)]
mod time {
    use std::time::Duration;

    use crate::{ArenaConfig, CoreError, Tick};

    #[test]
    fn tick_next_and_display() {
        assert_eq!(Tick(10).next(), Tick(11));
        assert_eq!(Tick::ZERO.next(), Tick(1));
        assert_eq!(Tick(3).to_string(), "T3");
    }

    #[test]
    fn default_config_matches_reference_session() {
        let cfg = ArenaConfig::default();
        assert_eq!((cfg.width, cfg.height), (32, 24));
        assert_eq!(cfg.agent_count, 3);
        assert_eq!(cfg.tick_interval(), Duration::from_millis(100));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_empty_grid() {
        let cfg = ArenaConfig { width: 0, ..ArenaConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_zero_agents() {
        let cfg = ArenaConfig { agent_count: 0, ..ArenaConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_crowded_grid() {
        let cfg = ArenaConfig { width: 2, height: 1, agent_count: 2, ..ArenaConfig::default() };
        assert_eq!(cfg.validate(), Err(CoreError::GridTooSmall { cells: 2, agents: 2 }));
    }

    #[test]
    fn rejects_zero_interval_and_attempts() {
        let cfg = ArenaConfig { tick_interval_ms: 0, ..ArenaConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = ArenaConfig { max_spawn_attempts: 0, ..ArenaConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::{Direction, GridSpace, RandomSource, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.below(1_000), r2.below(1_000));
        }
    }

    #[test]
    fn below_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            assert!(rng.below(7) < 7);
        }
        assert_eq!(rng.below(1), 0);
    }

    #[test]
    fn every_direction_drawn() {
        let mut rng = SimRng::new(9);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let d = rng.direction();
            let i = Direction::ALL.iter().position(|&x| x == d).unwrap();
            seen[i] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn random_cell_stays_on_grid() {
        let grid = GridSpace::new(5, 3);
        let mut rng = SimRng::new(1);
        for _ in 0..500 {
            assert!(grid.contains(grid.random_cell(&mut rng)));
        }
    }

    #[test]
    fn pick_empty_is_none() {
        let mut rng = SimRng::new(0);
        assert_eq!(rng.pick(0), None);
        assert!(rng.pick(3).unwrap() < 3);
    }
}
