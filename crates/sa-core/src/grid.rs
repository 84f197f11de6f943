//! Grid coordinates, headings, and bounds.
//!
//! Cells use signed coordinates so a head that steps off the edge of the
//! board is still representable (`Cell::new(-1, 0)`).  Whether a cell is on
//! the board is a question for [`GridSpace`], never for `Cell` itself.

use std::fmt;

// ── Cell ──────────────────────────────────────────────────────────────────────

/// A `(column, row)` grid coordinate, 0-indexed from the top-left corner.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    #[inline]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// The neighbouring cell one step along `dir`.
    #[inline]
    pub fn step(self, dir: Direction) -> Cell {
        let (dc, dr) = dir.delta();
        Cell::new(self.col + dc, self.row + dr)
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Cell) -> u32 {
        self.col.abs_diff(other.col) + self.row.abs_diff(other.row)
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((col, row): (i32, i32)) -> Self {
        Cell::new(col, row)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four unit headings.
///
/// Rows grow downward, so `Down` is `(0, 1)` and `Up` is `(0, -1)`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
}

impl Direction {
    /// Canonical enumeration order.  Heading selection walks candidates in
    /// this order, so changing it changes tie-breaking.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    /// `(d_col, d_row)` unit vector.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Right => (1, 0),
            Direction::Left  => (-1, 0),
            Direction::Down  => (0, 1),
            Direction::Up    => (0, -1),
        }
    }

    /// The heading whose vector is the negation of this one.
    #[inline]
    pub const fn reverse(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left  => Direction::Right,
            Direction::Down  => Direction::Up,
            Direction::Up    => Direction::Down,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Right => "right",
            Direction::Left  => "left",
            Direction::Down  => "down",
            Direction::Up    => "up",
        };
        f.write_str(s)
    }
}

// ── GridSpace ─────────────────────────────────────────────────────────────────

/// Dimensions of the board.  Stateless apart from its size.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSpace {
    pub width:  u32,
    pub height: u32,
}

impl GridSpace {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `true` if `cell` lies inside `[0, width) × [0, height)`.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.col >= 0
            && cell.row >= 0
            && (cell.col as u32) < self.width
            && (cell.row as u32) < self.height
    }

    /// Total number of cells on the board.
    #[inline]
    pub fn cell_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Every in-bounds cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height as i32)
            .flat_map(move |row| (0..self.width as i32).map(move |col| Cell::new(col, row)))
    }

    /// Draw a uniformly random in-bounds cell from `rng`.
    pub fn random_cell<R: crate::RandomSource + ?Sized>(&self, rng: &mut R) -> Cell {
        let col = rng.below(self.width) as i32;
        let row = rng.below(self.height) as i32;
        Cell::new(col, row)
    }
}
