//! Seat grid holding the current placement state
//!
//! Each cell is either empty or holds a single roster entry. The grid is owned
//! by the planner and mutated in place by the search: every `place` made while
//! exploring a branch is undone with `unplace` before the branch is abandoned.

use ndarray::Array2;

use crate::algorithm::roster::EntityId;
use crate::io::error::{Result, SeatError};
use crate::spatial::cell::Cell;

/// Fixed-size grid of optional occupants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatGrid {
    seats: Array2<Option<EntityId>>,
}

impl SeatGrid {
    /// Create an empty grid
    ///
    /// Dimensions are validated by the planner before a grid is built.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            seats: Array2::from_elem((rows, cols), None),
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.seats.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.seats.ncols()
    }

    /// Total number of cells
    pub fn capacity(&self) -> usize {
        self.seats.len()
    }

    /// Check whether a cell lies inside the grid
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows() && cell.col < self.cols()
    }

    /// Occupant of a cell, `None` when empty or out of bounds
    pub fn occupant(&self, cell: Cell) -> Option<EntityId> {
        self.seats.get(cell.as_index()).copied().flatten()
    }

    /// Check whether an in-bounds cell is free
    pub fn is_empty_at(&self, cell: Cell) -> bool {
        self.seats.get(cell.as_index()).is_some_and(Option::is_none)
    }

    /// Seat an entity in an empty cell
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is outside the grid or already occupied
    pub fn place(&mut self, entity: EntityId, cell: Cell) -> Result<()> {
        let dimensions = (self.rows(), self.cols());
        let slot = self
            .seats
            .get_mut(cell.as_index())
            .ok_or(SeatError::OutOfBounds { cell, dimensions })?;

        if let Some(occupant) = *slot {
            return Err(SeatError::CellOccupied { cell, occupant });
        }

        *slot = Some(entity);
        Ok(())
    }

    /// Clear a cell, returning whoever sat there
    pub fn unplace(&mut self, cell: Cell) -> Option<EntityId> {
        self.seats.get_mut(cell.as_index()).and_then(Option::take)
    }

    /// Find the cell holding an entity by scanning rows then columns
    ///
    /// Entities not yet seated yield `None`, which is a normal state mid-search.
    pub fn locate(&self, entity: EntityId) -> Option<Cell> {
        self.seats
            .indexed_iter()
            .find(|(_, seat)| **seat == Some(entity))
            .map(|((row, col), _)| Cell::new(row, col))
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.seats.fill(None);
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.seats.iter().filter(|seat| seat.is_some()).count()
    }

    /// Check whether no cell is occupied
    pub fn is_vacant(&self) -> bool {
        self.seats.iter().all(Option::is_none)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let cols = self.cols();
        (0..self.rows()).flat_map(move |row| (0..cols).map(move |col| Cell::new(row, col)))
    }

    /// Empty cells in row-major order, snapshotted at the time of the call
    pub fn empty_cells(&self) -> Vec<Cell> {
        self.cells().filter(|&cell| self.is_empty_at(cell)).collect()
    }

    /// Iterate rows of occupants, top to bottom
    pub fn rows_iter(&self) -> impl Iterator<Item = Vec<Option<EntityId>>> + '_ {
        self.seats.rows().into_iter().map(|row| row.to_vec())
    }
}
