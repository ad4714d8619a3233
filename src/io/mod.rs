/// Command-line parsing and run orchestration
pub mod cli;
/// Display constants and demonstration plan
pub mod configuration;
/// Error types
pub mod error;
/// Plain-text plan file parsing
pub mod plan_file;
/// Spinner progress monitor
pub mod progress;
/// Text rendering of seat grids
pub mod render;
