//! Display constants and the built-in demonstration plan

// Rendering
/// Width each cell is padded to when printing a plan
pub const CELL_WIDTH: usize = 10;
/// Text shown for a cell nobody occupies
pub const EMPTY_SEAT_MARKER: &str = "[ ]";

// Demonstration plan used when no plan file is given
/// Rows of the demonstration grid
pub const DEMO_ROWS: usize = 2;
/// Columns of the demonstration grid
pub const DEMO_COLS: usize = 3;
/// Roster of the demonstration plan, in placement order
pub const DEMO_PEOPLE: [&str; 5] = ["Alice", "Bob", "Charlie", "Diana", "Eve"];
/// Pairs that must sit together in the demonstration plan
pub const DEMO_SIT_WITH: [(&str, &str); 1] = [("Alice", "Bob")];
/// Pairs that must be kept apart in the demonstration plan
pub const DEMO_SEPARATE: [(&str, &str); 1] = [("Charlie", "Diana")];

// Progress display
/// Placements between spinner refreshes
pub const PROGRESS_UPDATE_INTERVAL: u64 = 1024;
/// Spinner tick interval in milliseconds
pub const SPINNER_TICK_MS: u64 = 100;

// Logging
/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
/// Log filter used with `--verbose` when `RUST_LOG` is unset
pub const VERBOSE_LOG_FILTER: &str = "info";

// Messages
/// Printed before the rendered arrangement
pub const FOUND_MESSAGE: &str = "Seating arrangement found:";
/// Printed when the search is exhausted
pub const IMPOSSIBLE_MESSAGE: &str = "Impossible to seat with given constraints.";
