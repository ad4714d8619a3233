//! Grid coordinates and orthogonal distance measures

use std::fmt;

/// A grid coordinate, 0-indexed from the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
}

impl Cell {
    /// Create a cell at the given row and column
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Sum of the absolute row and column differences
    pub const fn manhattan_distance(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Cells sharing a side; diagonal neighbours do not count
    pub const fn is_edge_adjacent(self, other: Self) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// Shape-compatible index for `ndarray` lookups
    pub const fn as_index(self) -> [usize; 2] {
        [self.row, self.col]
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
