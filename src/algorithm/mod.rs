/// Adjacency and separation constraints with partial and full checks
pub mod constraints;
/// Observer hooks for search events
pub mod monitor;
/// Seating plan construction and arrangement entry point
pub mod planner;
/// Ordered roster of named entities
pub mod roster;
/// Recursive backtracking search
pub mod search;
/// Search counters
pub mod stats;
