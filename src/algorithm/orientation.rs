//! Canonical stone orientations under a grid's transform group
//!
//! Every direction of the grid is applied to a stone's base shape; orientations
//! whose normalized shapes coincide are collapsed, keeping the first direction
//! seen as the representative. The resulting table is built once before the
//! search starts and shared by every search frame.

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::spatial::geometry::{Shape, shape_signature};
use crate::spatial::grid::Grid;
use crate::spatial::stones::{Stone, StoneColor, StoneSet};

/// A geometrically distinct placement shape of a stone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orientation<D> {
    /// Representative direction producing this shape
    pub direction: D,
    /// Normalized cells, minimum corner at the origin
    pub shape: Shape,
}

/// Distinct orientations of `stone`, in the grid's direction order
pub fn canonical_orientations<G: Grid>(
    grid: &G,
    stone: &Stone,
) -> Vec<Orientation<G::Direction>> {
    let mut seen = HashSet::new();
    let mut orientations = Vec::new();

    for &direction in grid.directions() {
        let shape = grid.oriented_shape(stone.cells(), direction);
        if seen.insert(shape_signature(&shape)) {
            orientations.push(Orientation { direction, shape });
        }
    }

    orientations
}

/// Precomputed canonical orientations for every stone of a set
#[derive(Debug, Clone)]
pub struct OrientationTable<D> {
    entries: HashMap<StoneColor, Vec<Orientation<D>>>,
}

impl<D: Copy> OrientationTable<D> {
    /// Canonicalize every stone of `stones` on `grid`
    pub fn build<G: Grid<Direction = D>>(grid: &G, stones: &StoneSet) -> Self {
        let entries = stones
            .iter()
            .map(|stone| {
                let orientations = canonical_orientations(grid, stone);
                debug!(
                    "{} stone {}: {} distinct orientations of {}",
                    grid.name(),
                    stone.color(),
                    orientations.len(),
                    grid.directions().len()
                );
                (stone.color(), orientations)
            })
            .collect();

        Self { entries }
    }

    /// Orientations of `color`, empty if the color is unknown
    pub fn orientations(&self, color: StoneColor) -> &[Orientation<D>] {
        self.entries
            .get(&color)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total number of orientations across all stones
    pub fn total(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}
