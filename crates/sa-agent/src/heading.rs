//! Greedy heading selection.
//!
//! The policy looks one cell ahead and nothing else: it ignores walls, its
//! own body, and every other snake, so snakes routinely steer straight into
//! obstacles.

use sa_core::{Cell, Direction};

/// Pick the heading that brings `head` strictly closest to `food`.
///
/// The baseline is the current heading paired with the distance after one
/// step along it.  Candidates are walked in [`Direction::ALL`] order with the
/// exact reverse of `current` excluded; a candidate replaces the best only
/// when its one-step distance is strictly smaller.  Ties keep `current`, and
/// the result is never `current.reverse()`.
pub fn choose_heading(head: Cell, current: Direction, food: Cell) -> Direction {
    let reverse = current.reverse();

    let mut best = current;
    let mut best_dist = head.step(current).manhattan(food);

    for dir in Direction::ALL {
        if dir == reverse {
            continue;
        }
        let dist = head.step(dir).manhattan(food);
        if dist < best_dist {
            best = dir;
            best_dist = dist;
        }
    }
    best
}
