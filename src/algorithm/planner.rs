//! Seating plan construction and arrangement
//!
//! `SeatingPlan` validates its inputs up front, then owns the grid that the
//! backtracking search mutates. Configuration problems surface from `new`;
//! an unsatisfiable plan is reported by `arrange` returning `false`.

use std::fmt;

use log::info;

use crate::algorithm::constraints::ConstraintSet;
use crate::algorithm::monitor::{NoOpMonitor, SearchMonitor};
use crate::algorithm::roster::{EntityId, Roster};
use crate::algorithm::search::Backtracker;
use crate::algorithm::stats::SearchStats;
use crate::io::error::{Result, SeatError};
use crate::io::render::render_default;
use crate::spatial::{Cell, SeatGrid};

/// A grid, a roster and the constraints binding it
#[derive(Debug, Clone)]
pub struct SeatingPlan {
    grid: SeatGrid,
    roster: Roster,
    constraints: ConstraintSet,
    last_stats: Option<SearchStats>,
}

impl SeatingPlan {
    /// Validate inputs and build an empty plan
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either grid dimension is zero, or the grid is too large to allocate
    /// - There are more people than cells
    /// - A name appears twice in `people`
    /// - A constraint names someone outside `people` or pairs a person with themself
    pub fn new<S: AsRef<str>>(
        rows: usize,
        cols: usize,
        people: &[S],
        must_sit_with: &[(S, S)],
        must_separate: &[(S, S)],
    ) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(SeatError::InvalidDimensions { rows, cols });
        }

        let seats =
            Self::seat_count(rows, cols).ok_or(SeatError::InvalidDimensions { rows, cols })?;
        if people.len() > seats {
            return Err(SeatError::InsufficientCapacity {
                people: people.len(),
                seats,
            });
        }

        let roster = Roster::new(people.iter().map(AsRef::<str>::as_ref))?;
        let constraints = ConstraintSet::from_names(&roster, must_sit_with, must_separate)?;

        Ok(Self {
            grid: SeatGrid::new(rows, cols),
            roster,
            constraints,
            last_stats: None,
        })
    }

    /// Cell count of a grid whose storage can be allocated at all
    fn seat_count(rows: usize, cols: usize) -> Option<usize> {
        let seats = rows.checked_mul(cols)?;
        let bytes = seats.checked_mul(size_of::<Option<EntityId>>())?;
        (bytes <= isize::MAX.unsigned_abs()).then_some(seats)
    }

    /// Search for an arrangement satisfying every constraint
    ///
    /// Any previous arrangement is discarded first, so repeated calls produce
    /// the same placements. On `false` every cell is empty.
    pub fn arrange(&mut self) -> bool {
        self.arrange_with(NoOpMonitor)
    }

    /// Search as `arrange` does, reporting events to a monitor
    pub fn arrange_with<M: SearchMonitor>(&mut self, monitor: M) -> bool {
        self.grid.clear();
        info!(
            "arranging {} people on a {}x{} grid ({} sit-with, {} separate)",
            self.roster.len(),
            self.grid.rows(),
            self.grid.cols(),
            self.constraints.sit_with().len(),
            self.constraints.separate().len()
        );

        let mut search =
            Backtracker::new(&mut self.grid, &self.roster, &self.constraints, monitor);
        let found = search.run();
        let stats = search.into_stats();

        if found {
            info!("arrangement found after {} placements", stats.nodes);
        } else {
            info!("search exhausted after {} placements", stats.nodes);
        }
        self.last_stats = Some(stats);
        found
    }

    /// Render the grid, one line per row
    pub fn render(&self) -> String {
        render_default(&self.grid, &self.roster)
    }

    /// Cell currently holding a person
    pub fn seat_of(&self, name: &str) -> Option<Cell> {
        self.roster
            .id_of(name)
            .and_then(|entity| self.grid.locate(entity))
    }

    /// Name of whoever sits in a cell
    pub fn occupant_name(&self, cell: Cell) -> Option<&str> {
        self.grid
            .occupant(cell)
            .and_then(|entity| self.roster.name(entity))
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Current placement state
    pub const fn grid(&self) -> &SeatGrid {
        &self.grid
    }

    /// People in placement order
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Constraints the plan must satisfy
    pub const fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// Counters from the most recent `arrange` call
    pub const fn last_stats(&self) -> Option<&SearchStats> {
        self.last_stats.as_ref()
    }
}

impl fmt::Display for SeatingPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
