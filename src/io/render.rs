//! Text rendering of seat grids

use std::fmt::Write;

use crate::algorithm::roster::Roster;
use crate::io::configuration::{CELL_WIDTH, EMPTY_SEAT_MARKER};
use crate::spatial::SeatGrid;

/// Render a grid as one line per row
///
/// Each cell shows its occupant's name, or the empty marker, left-aligned and
/// padded to `cell_width`. Names longer than the width are kept whole.
pub fn render_grid(grid: &SeatGrid, roster: &Roster, cell_width: usize) -> String {
    let mut output = String::with_capacity(grid.capacity() * (cell_width + 1));

    for row in grid.rows_iter() {
        for seat in row {
            let label = seat
                .and_then(|entity| roster.name(entity))
                .unwrap_or(EMPTY_SEAT_MARKER);
            // Writing into a String cannot fail
            let _ = write!(output, "{label:<cell_width$}");
        }
        output.push('\n');
    }

    output
}

/// Render with the default cell width
pub fn render_default(grid: &SeatGrid, roster: &Roster) -> String {
    render_grid(grid, roster, CELL_WIDTH)
}
