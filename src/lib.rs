//! Grid seating arrangement by exhaustive backtracking
//!
//! Places an ordered roster of named people into unique cells of a grid so that
//! every "sit with" pair ends edge-adjacent and every "separate" pair ends
//! neither in the same cell nor edge-adjacent. The search is deterministic:
//! people are seated in roster order, cells are tried in row-major order, and
//! the first arrangement passing full validation wins.

#![forbid(unsafe_code)]

/// Constraint checking, backtracking search and plan orchestration
pub mod algorithm;
/// Input/output, configuration and error handling
pub mod io;
/// Grid coordinates and placement state
pub mod spatial;

pub use algorithm::planner::SeatingPlan;
pub use io::error::{Result, SeatError};
