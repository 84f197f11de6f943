//! Plain-text board for terminals.

use sa_agent::AgentColor;
use sa_sim::Arena;

const EMPTY: char = '.';
const FOOD:  char = '*';
const DEAD:  char = 'x';

fn glyph(color: AgentColor) -> char {
    match color {
        AgentColor::Green   => 'g',
        AgentColor::Blue    => 'b',
        AgentColor::Yellow  => 'y',
        AgentColor::Magenta => 'm',
        AgentColor::Cyan    => 'c',
        AgentColor::Orange  => 'o',
    }
}

/// Draw the arena one row per line.  Heads are upper-case, corpses `x`.
///
/// Later agents are drawn over earlier ones where bodies overlap; cells
/// outside the grid (a head that hit the wall) are skipped.
pub fn board(arena: &Arena) -> String {
    let grid = arena.grid();
    let (w, h) = (grid.width as usize, grid.height as usize);
    let mut rows = vec![vec![EMPTY; w]; h];

    if let Some(food) = arena.food() {
        rows[food.row as usize][food.col as usize] = FOOD;
    }

    for agent in arena.agents() {
        let body = glyph(agent.color());
        for (i, &cell) in agent.body().iter().enumerate() {
            if !grid.contains(cell) {
                continue;
            }
            let ch = match (agent.is_alive(), i) {
                (false, _) => DEAD,
                (true, 0)  => body.to_ascii_uppercase(),
                (true, _)  => body,
            };
            rows[cell.row as usize][cell.col as usize] = ch;
        }
    }

    let mut out = String::with_capacity((w + 1) * h);
    for row in rows {
        out.extend(row);
        out.push('\n');
    }
    out
}
