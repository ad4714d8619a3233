//! Spatial data structures for seat placement
//!
//! This module contains spatial-related functionality including:
//! - Cell coordinates and Manhattan distance
//! - Grid placement state

/// Grid coordinates and distance measures
pub mod cell;
/// Grid placement state with place, unplace and locate operations
pub mod grid;

pub use cell::Cell;
pub use grid::SeatGrid;
