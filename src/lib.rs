//! Exhaustive backtracking solver for stone tiling puzzles
//!
//! Twelve colored polyomino stones are laid onto a fixed board, either a flat
//! rectangle or a square pyramid, until no cell is left empty. The search
//! enumerates every distinct tiling reachable from an optional opening,
//! pruning boards whose empty regions can no longer host the remaining stones.

#![forbid(unsafe_code)]

/// Orientation canonicalization, pruning, backtracking search and solution bookkeeping
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Coordinates, transform groups, stones and the board model
pub mod spatial;

pub use io::error::{Result, SolverError};
