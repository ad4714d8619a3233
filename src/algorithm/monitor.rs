//! Observer hooks for the backtracking search
//!
//! Monitors see every placement decision without being able to steer it, so the
//! outcome of a search never depends on which monitors are attached. Callbacks
//! run on the search thread in the hot loop and should stay cheap.

use crate::algorithm::roster::EntityId;
use crate::algorithm::stats::SearchStats;
use crate::spatial::Cell;

/// Receives search events; every hook defaults to doing nothing
pub trait SearchMonitor {
    /// Called once before the first placement
    fn on_search_start(&mut self, _entities: usize, _cells: usize) {}

    /// Called after a tentative placement passes the partial check
    fn on_place(&mut self, _depth: usize, _entity: EntityId, _cell: Cell, _stats: &SearchStats) {}

    /// Called when the partial check rejects a tentative placement
    fn on_prune(&mut self, _depth: usize, _entity: EntityId, _cell: Cell, _stats: &SearchStats) {}

    /// Called when a placement is undone after its subtree failed
    fn on_backtrack(
        &mut self,
        _depth: usize,
        _entity: EntityId,
        _cell: Cell,
        _stats: &SearchStats,
    ) {
    }

    /// Called when every entity is seated, with the full check verdict
    fn on_leaf(&mut self, _accepted: bool, _stats: &SearchStats) {}

    /// Called once when the search finishes
    fn on_search_end(&mut self, _found: bool, _stats: &SearchStats) {}
}

/// Monitor that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMonitor;

impl SearchMonitor for NoOpMonitor {}

/// Forwards every event to two monitors in order
#[derive(Debug, Clone, Default)]
pub struct CompositeMonitor<A, B> {
    /// Notified first
    pub first: A,
    /// Notified second
    pub second: B,
}

impl<A, B> CompositeMonitor<A, B> {
    /// Pair two monitors
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: SearchMonitor, B: SearchMonitor> SearchMonitor for CompositeMonitor<A, B> {
    fn on_search_start(&mut self, entities: usize, cells: usize) {
        self.first.on_search_start(entities, cells);
        self.second.on_search_start(entities, cells);
    }

    fn on_place(&mut self, depth: usize, entity: EntityId, cell: Cell, stats: &SearchStats) {
        self.first.on_place(depth, entity, cell, stats);
        self.second.on_place(depth, entity, cell, stats);
    }

    fn on_prune(&mut self, depth: usize, entity: EntityId, cell: Cell, stats: &SearchStats) {
        self.first.on_prune(depth, entity, cell, stats);
        self.second.on_prune(depth, entity, cell, stats);
    }

    fn on_backtrack(&mut self, depth: usize, entity: EntityId, cell: Cell, stats: &SearchStats) {
        self.first.on_backtrack(depth, entity, cell, stats);
        self.second.on_backtrack(depth, entity, cell, stats);
    }

    fn on_leaf(&mut self, accepted: bool, stats: &SearchStats) {
        self.first.on_leaf(accepted, stats);
        self.second.on_leaf(accepted, stats);
    }

    fn on_search_end(&mut self, found: bool, stats: &SearchStats) {
        self.first.on_search_end(found, stats);
        self.second.on_search_end(found, stats);
    }
}

impl<M: SearchMonitor + ?Sized> SearchMonitor for &mut M {
    fn on_search_start(&mut self, entities: usize, cells: usize) {
        (**self).on_search_start(entities, cells);
    }

    fn on_place(&mut self, depth: usize, entity: EntityId, cell: Cell, stats: &SearchStats) {
        (**self).on_place(depth, entity, cell, stats);
    }

    fn on_prune(&mut self, depth: usize, entity: EntityId, cell: Cell, stats: &SearchStats) {
        (**self).on_prune(depth, entity, cell, stats);
    }

    fn on_backtrack(&mut self, depth: usize, entity: EntityId, cell: Cell, stats: &SearchStats) {
        (**self).on_backtrack(depth, entity, cell, stats);
    }

    fn on_leaf(&mut self, accepted: bool, stats: &SearchStats) {
        (**self).on_leaf(accepted, stats);
    }

    fn on_search_end(&mut self, found: bool, stats: &SearchStats) {
        (**self).on_search_end(found, stats);
    }
}
