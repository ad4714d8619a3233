//! Error types for plan construction, grid mutation and plan file loading

use std::path::PathBuf;

use thiserror::Error;

use crate::algorithm::constraints::ConstraintKind;
use crate::algorithm::roster::EntityId;
use crate::spatial::Cell;

/// Main error type for all seating operations
///
/// Search exhaustion is not an error: `arrange` reports it by returning `false`.
#[derive(Error, Debug)]
pub enum SeatError {
    /// Grid has a zero dimension
    #[error("Invalid grid dimensions {rows}x{cols}: both must be positive")]
    InvalidDimensions {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// More entities than cells
    #[error("Not enough seats for all people: {people} people, {seats} seats")]
    InsufficientCapacity {
        /// Roster size
        people: usize,
        /// Number of grid cells
        seats: usize,
    },

    /// Roster lists a name twice
    #[error("Duplicate entity '{name}' in roster")]
    DuplicateEntity {
        /// Repeated name
        name: String,
    },

    /// Constraint mentions a name missing from the roster
    #[error("Constraint references unknown entity '{name}'")]
    UnknownEntity {
        /// Unresolved name
        name: String,
    },

    /// Constraint pairs an entity with itself
    #[error("Constraint {kind} pairs '{name}' with itself")]
    SelfConstraint {
        /// Relation of the offending constraint
        kind: ConstraintKind,
        /// The entity named on both sides
        name: String,
    },

    /// Placement target already holds an entity
    #[error("Cell {cell} is already occupied by entity {occupant}")]
    CellOccupied {
        /// Target cell
        cell: Cell,
        /// Current occupant
        occupant: EntityId,
    },

    /// Placement target lies outside the grid
    #[error("Cell {cell} is outside the {}x{} grid", .dimensions.0, .dimensions.1)]
    OutOfBounds {
        /// Target cell
        cell: Cell,
        /// Grid dimensions (rows, cols)
        dimensions: (usize, usize),
    },

    /// Plan file content could not be parsed
    #[error("{}:{line}: {reason}", .path.display())]
    PlanFile {
        /// File being parsed
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// Description of the problem
        reason: String,
    },

    /// Plan file lacks a directive it must contain
    #[error("{}: missing required '{directive}' line", .path.display())]
    MissingDirective {
        /// File being parsed
        path: PathBuf,
        /// Directive that never appeared
        directive: &'static str,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", .path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for seating results
pub type Result<T> = std::result::Result<T, SeatError>;

/// Create a plan file parse error
pub fn plan_file_error(path: impl Into<PathBuf>, line: usize, reason: &impl ToString) -> SeatError {
    SeatError::PlanFile {
        path: path.into(),
        line,
        reason: reason.to_string(),
    }
}
