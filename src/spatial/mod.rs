//! Spatial data structures of the puzzle
//!
//! This module contains:
//! - Coordinates and the planar and pyramid transform groups
//! - The grid abstraction the solver is generic over
//! - Stone definitions and the copy-on-write board

/// Copy-on-write board model and placement errors
pub mod board;
/// Coordinates, directions and shape normalization
pub mod geometry;
/// Grid trait with planar and pyramid variants
pub mod grid;
/// Stone colors, shapes and stone sets
pub mod stones;

pub use board::Board;
