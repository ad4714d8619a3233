//! Exhaustive backtracking over roster order and row-major cells
//!
//! The state is the number of roster entries already seated. At each level the
//! next entity is tried in every empty cell, top row first and left to right.
//! A placement that survives the partial check is explored recursively, and the
//! first complete arrangement passing the full check ends the search. Every
//! placement made on a failed branch is undone before the next cell is tried,
//! so an exhausted search leaves the grid exactly as it found it.

use std::time::Instant;

use log::{debug, trace};

use crate::algorithm::constraints::ConstraintSet;
use crate::algorithm::monitor::SearchMonitor;
use crate::algorithm::roster::Roster;
use crate::algorithm::stats::SearchStats;
use crate::spatial::SeatGrid;

/// One run of the backtracking search over a borrowed grid
pub struct Backtracker<'a, M> {
    grid: &'a mut SeatGrid,
    roster: &'a Roster,
    constraints: &'a ConstraintSet,
    monitor: M,
    stats: SearchStats,
}

impl<'a, M: SearchMonitor> Backtracker<'a, M> {
    /// Prepare a search; the grid should start empty
    pub fn new(
        grid: &'a mut SeatGrid,
        roster: &'a Roster,
        constraints: &'a ConstraintSet,
        monitor: M,
    ) -> Self {
        Self {
            grid,
            roster,
            constraints,
            monitor,
            stats: SearchStats::default(),
        }
    }

    /// Search from an empty prefix, returning whether an arrangement was found
    ///
    /// On success the grid holds the arrangement. On failure it is empty again.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();
        self.monitor
            .on_search_start(self.roster.len(), self.grid.capacity());

        let found = self.backtrack(0);

        self.stats.elapsed = start.elapsed();
        self.monitor.on_search_end(found, &self.stats);
        found
    }

    /// Counters gathered so far
    pub const fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Consume the search, yielding its counters
    pub fn into_stats(self) -> SearchStats {
        self.stats
    }

    fn backtrack(&mut self, index: usize) -> bool {
        let Some(entity) = self.roster.get(index) else {
            return self.accept_leaf();
        };

        for cell in self.grid.empty_cells() {
            if self.grid.place(entity, cell).is_err() {
                continue;
            }
            self.stats.on_node(index);

            if self.constraints.partial_check(self.grid, entity, cell) {
                self.monitor.on_place(index, entity, cell, &self.stats);
                if self.backtrack(index + 1) {
                    return true;
                }
                self.stats.on_backtrack();
                self.monitor.on_backtrack(index, entity, cell, &self.stats);
            } else {
                trace!("pruned {entity} at {cell} (depth {index})");
                self.stats.on_prune();
                self.monitor.on_prune(index, entity, cell, &self.stats);
            }

            self.grid.unplace(cell);
        }

        false
    }

    fn accept_leaf(&mut self) -> bool {
        let accepted = self.constraints.full_check(self.grid);
        if !accepted {
            self.stats.on_leaf_rejected();
            debug!(
                "complete arrangement rejected: {} constraint(s) violated",
                self.constraints.violations(self.grid).len()
            );
        }
        self.monitor.on_leaf(accepted, &self.stats);
        accepted
    }
}
