//! Unit tests for sa-agent.

use sa_core::{AgentId, Cell, Direction, GridSpace, Tick};

use crate::Agent;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn grid() -> GridSpace {
    GridSpace::new(32, 24)
}

fn snake(id: u32, body: &[(i32, i32)], heading: Direction) -> Agent {
    let cells = body.iter().map(|&c| Cell::from(c)).collect();
    Agent::with_body(AgentId(id), cells, heading).unwrap()
}

// ── Heading choice ────────────────────────────────────────────────────────────

#[cfg(test)]
mod heading_tests {
    use super::*;
    use crate::choose_heading;

    #[test]
    fn turns_toward_food_above() {
        // Head (5,5), food (5,0), heading right.  Stepping right gives 6;
        // only Up beats it (4).
        let dir = choose_heading(Cell::new(5, 5), Direction::Right, Cell::new(5, 0));
        assert_eq!(dir, Direction::Up);
    }

    #[test]
    fn keeps_heading_when_it_is_the_only_improvement() {
        let dir = choose_heading(Cell::new(5, 5), Direction::Right, Cell::new(9, 5));
        assert_eq!(dir, Direction::Right);
    }

    #[test]
    fn ties_keep_current_heading() {
        // Food diagonally down-right: Right and Down both reach distance 3.
        // Heading down, Right only ties and does not replace it.
        let dir = choose_heading(Cell::new(0, 0), Direction::Down, Cell::new(2, 2));
        assert_eq!(dir, Direction::Down);

        let dir = choose_heading(Cell::new(0, 0), Direction::Right, Cell::new(2, 2));
        assert_eq!(dir, Direction::Right);

        // Heading left: Right is the reverse and excluded, so Down is the
        // only improving candidate.
        let dir = choose_heading(Cell::new(0, 0), Direction::Left, Cell::new(2, 2));
        assert_eq!(dir, Direction::Down);
    }

    #[test]
    fn food_directly_behind_keeps_heading() {
        // The only improving move is the reverse, which is excluded.
        let dir = choose_heading(Cell::new(5, 5), Direction::Right, Cell::new(1, 5));
        assert_eq!(dir, Direction::Right);
    }

    #[test]
    fn candidate_distances_for_fixed_head() {
        // Head (5,5), food (5,0): one-step distances per candidate.
        let head = Cell::new(5, 5);
        let food = Cell::new(5, 0);
        let dists: Vec<u32> = Direction::ALL.iter().map(|&d| head.step(d).manhattan(food)).collect();
        assert_eq!(dists, vec![6, 6, 6, 4]);
        assert_eq!(head.manhattan(food), 5);
    }

    #[test]
    fn tie_against_stepped_baseline_keeps_heading() {
        // Heading up toward (0,0): Up and Left both reach 9, Up is kept.
        let dir = choose_heading(Cell::new(5, 5), Direction::Up, Cell::new(0, 0));
        assert_eq!(dir, Direction::Up);
    }

    #[test]
    fn chosen_heading_for_fixed_triples() {
        // (head, heading, food, expected)
        let cases = [
            ((5, 5), Direction::Right, (5, 0), Direction::Up),
            ((5, 5), Direction::Up, (5, 9), Direction::Up),
            ((5, 5), Direction::Down, (0, 5), Direction::Left),
            ((5, 5), Direction::Left, (8, 9), Direction::Down),
            ((0, 0), Direction::Down, (0, 0), Direction::Down),
        ];
        for (head, current, food, expected) in cases {
            let got = choose_heading(Cell::from(head), current, Cell::from(food));
            assert_eq!(got, expected, "head {head:?} heading {current} food {food:?}");
        }
    }

    #[test]
    fn never_reverses() {
        for current in Direction::ALL {
            for col in -3..=13 {
                for row in -3..=13 {
                    let got = choose_heading(Cell::new(5, 5), current, Cell::new(col, row));
                    assert_ne!(got, current.reverse(), "food ({col},{row}) heading {current}");
                }
            }
        }
    }

    #[test]
    fn agent_without_food_keeps_heading() {
        let mut a = snake(0, &[(3, 3)], Direction::Left);
        assert_eq!(a.decide_heading(None), Direction::Left);
        assert_eq!(a.decide_heading(Some(Cell::new(3, 0))), Direction::Up);
        assert_eq!(a.heading(), Direction::Up);
    }
}

// ── Movement ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod movement_tests {
    use super::*;
    use crate::DeathCause;

    #[test]
    fn move_without_growth_keeps_length() {
        let mut a = snake(0, &[(3, 3), (2, 3), (1, 3)], Direction::Right);
        a.move_forward(false);
        assert_eq!(a.len(), 3);
        assert_eq!(a.head(), Cell::new(4, 3));
        assert_eq!(a.body().back(), Some(&Cell::new(2, 3)));
    }

    #[test]
    fn move_with_growth_adds_one() {
        let mut a = snake(0, &[(3, 3), (2, 3)], Direction::Down);
        let old_head = a.head();
        a.move_forward(true);
        assert_eq!(a.len(), 3);
        assert_eq!(a.head(), old_head.step(Direction::Down));
        assert_eq!(a.body().back(), Some(&Cell::new(2, 3)));
    }

    #[test]
    fn dead_agent_does_not_move() {
        let mut a = snake(0, &[(3, 3)], Direction::Right);
        a.kill(DeathCause::Wall, Tick(4));
        a.move_forward(true);
        assert_eq!(a.len(), 1);
        assert_eq!(a.head(), Cell::new(3, 3));
        assert_eq!(a.decide_heading(Some(Cell::new(3, 0))), Direction::Right);
    }

    #[test]
    fn first_death_is_kept() {
        let mut a = snake(0, &[(3, 3)], Direction::Right);
        a.kill(DeathCause::Wall, Tick(4));
        a.kill(DeathCause::SelfCollision, Tick(9));
        assert_eq!(a.death(), Some((DeathCause::Wall, Tick(4))));
    }

    #[test]
    fn empty_body_rejected() {
        assert!(Agent::with_body(AgentId(0), vec![], Direction::Up).is_none());
    }
}

// ── Collisions ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod collision_tests {
    use super::*;
    use crate::{DeathCause, check_collision, collision_cause};

    #[test]
    fn wall_collision() {
        let mut roster = vec![snake(0, &[(0, 0)], Direction::Left)];
        roster[0].move_forward(false);
        assert_eq!(roster[0].head(), Cell::new(-1, 0));
        let cause = check_collision(&mut roster, 0, grid(), Tick(1));
        assert_eq!(cause, Some(DeathCause::Wall));
        assert!(!roster[0].is_alive());
    }

    #[test]
    fn far_edge_is_a_wall_too() {
        let mut roster = vec![snake(0, &[(31, 23)], Direction::Down)];
        roster[0].move_forward(false);
        assert_eq!(check_collision(&mut roster, 0, grid(), Tick(1)), Some(DeathCause::Wall));
    }

    #[test]
    fn self_collision_on_closed_loop() {
        // Curled body; stepping down from (1,1) lands on (1,2), which stays
        // occupied after the tail (0,2) is dropped.
        let mut roster = vec![snake(0, &[(1, 1), (2, 1), (2, 2), (1, 2), (0, 2)], Direction::Down)];
        roster[0].move_forward(false);
        assert_eq!(roster[0].head(), Cell::new(1, 2));
        assert_eq!(roster[0].body()[4], Cell::new(1, 2));
        assert_eq!(collision_cause(&roster, 0, grid()), Some(DeathCause::SelfCollision));
    }

    #[test]
    fn four_segment_loop_hits_body_two() {
        // Square loop stepping back onto its neck: after the move the body
        // is (1,1) (2,1) (1,1) (1,2), so the head equals body[2].
        let b = snake(0, &[(2, 1), (1, 1), (1, 2), (2, 2)], Direction::Left);
        let mut roster = vec![b];
        roster[0].move_forward(false);
        assert_eq!(roster[0].body()[2], roster[0].head());
        assert_eq!(check_collision(&mut roster, 0, grid(), Tick(2)), Some(DeathCause::SelfCollision));
        assert!(!roster[0].is_alive());
    }

    #[test]
    fn collision_with_other_agent() {
        let mut roster = vec![
            snake(0, &[(4, 4)], Direction::Right),
            snake(1, &[(6, 4), (5, 4)], Direction::Right),
        ];
        roster[0].move_forward(false);
        assert_eq!(
            check_collision(&mut roster, 0, grid(), Tick(1)),
            Some(DeathCause::Collided(AgentId(1)))
        );
    }

    #[test]
    fn corpse_is_an_obstacle() {
        let mut roster = vec![
            snake(0, &[(4, 4)], Direction::Right),
            snake(1, &[(5, 4)], Direction::Up),
        ];
        roster[1].kill(DeathCause::Wall, Tick(0));
        roster[0].move_forward(false);
        assert_eq!(
            check_collision(&mut roster, 0, grid(), Tick(1)),
            Some(DeathCause::Collided(AgentId(1)))
        );
    }

    #[test]
    fn clear_cell_survives() {
        let mut roster = vec![
            snake(0, &[(4, 4)], Direction::Right),
            snake(1, &[(9, 9)], Direction::Up),
        ];
        roster[0].move_forward(false);
        assert_eq!(check_collision(&mut roster, 0, grid(), Tick(1)), None);
        assert!(roster[0].is_alive());
    }

    #[test]
    fn dead_agent_not_rechecked() {
        let mut roster = vec![snake(0, &[(-1, 0)], Direction::Left)];
        roster[0].kill(DeathCause::SelfCollision, Tick(3));
        assert_eq!(check_collision(&mut roster, 0, grid(), Tick(4)), None);
        assert_eq!(roster[0].death(), Some((DeathCause::SelfCollision, Tick(3))));
    }
}

// ── Roster construction ───────────────────────────────────────────────────────

#[cfg(test)]
mod roster_tests {
    use sa_core::SimRng;

    use super::*;
    use crate::{AgentColor, RosterBuilder};

    #[test]
    fn builds_fresh_single_cell_agents() {
        let mut rng = SimRng::new(7);
        let roster = RosterBuilder::new(5, grid()).build(&mut rng);
        assert_eq!(roster.len(), 5);
        for (i, a) in roster.iter().enumerate() {
            assert_eq!(a.id(), AgentId(i as u32));
            assert!(a.is_alive());
            assert_eq!(a.score(), 0);
            assert_eq!(a.len(), 1);
            assert!(grid().contains(a.head()));
        }
    }

    #[test]
    fn same_seed_same_roster() {
        let a = RosterBuilder::new(3, grid()).build(&mut SimRng::new(11));
        let b = RosterBuilder::new(3, grid()).build(&mut SimRng::new(11));
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.head(), y.head());
            assert_eq!(x.heading(), y.heading());
        }
    }

    #[test]
    fn palette_assignment() {
        let roster = RosterBuilder::new(7, grid()).build(&mut SimRng::new(0));
        assert_eq!(roster[0].color(), AgentColor::Green);
        assert_eq!(roster[1].color(), AgentColor::Blue);
        assert_eq!(roster[2].color(), AgentColor::Yellow);
        assert_eq!(roster[6].color(), AgentColor::Green);
    }

    #[test]
    fn corpse_renders_grey() {
        let mut a = snake(1, &[(2, 2)], Direction::Up);
        assert_eq!(a.display_rgb(), [0, 0, 255]);
        a.kill(crate::DeathCause::Wall, Tick(1));
        assert_eq!(a.display_rgb(), crate::CORPSE_RGB);
    }
}
