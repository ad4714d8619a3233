//! Counters collected while arranging seats

use std::fmt;
use std::time::Duration;

/// Search counters for a single `arrange` call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Tentative placements made
    pub nodes: u64,
    /// Placements rejected by the partial check
    pub prunes: u64,
    /// Placements undone after their subtree failed
    pub backtracks: u64,
    /// Complete arrangements that failed the full check
    pub leaves_rejected: u64,
    /// Deepest roster index reached
    pub max_depth: usize,
    /// Wall-clock time spent searching
    pub elapsed: Duration,
}

impl SearchStats {
    /// Record a tentative placement at the given roster depth
    pub const fn on_node(&mut self, depth: usize) {
        self.nodes = self.nodes.saturating_add(1);
        if depth > self.max_depth {
            self.max_depth = depth;
        }
    }

    /// Record a placement pruned by the partial check
    pub const fn on_prune(&mut self) {
        self.prunes = self.prunes.saturating_add(1);
    }

    /// Record a placement undone after its subtree failed
    pub const fn on_backtrack(&mut self) {
        self.backtracks = self.backtracks.saturating_add(1);
    }

    /// Record a complete arrangement rejected by the full check
    pub const fn on_leaf_rejected(&mut self) {
        self.leaves_rejected = self.leaves_rejected.saturating_add(1);
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Search statistics:")?;
        writeln!(f, "  Placements tried:   {}", self.nodes)?;
        writeln!(f, "  Pruned early:       {}", self.prunes)?;
        writeln!(f, "  Backtracks:         {}", self.backtracks)?;
        writeln!(f, "  Leaves rejected:    {}", self.leaves_rejected)?;
        writeln!(f, "  Max depth reached:  {}", self.max_depth)?;
        write!(f, "  Total time:         {:.2?}", self.elapsed)
    }
}
