/// Command-line interface and run orchestration
pub mod cli;
/// Puzzle constants and output defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// PNG rendering of boards
pub mod image;
/// Opening placements applied before the search
pub mod opening;
/// Progress spinner and logging backend
pub mod progress;
/// Persisted solution log
pub mod solution_log;
