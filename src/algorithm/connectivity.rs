//! Flood-fill pruning of boards whose empty regions cannot be covered
//!
//! The test is necessary, not sufficient: it only rejects boards where some
//! empty region is smaller than every remaining stone, or where no region is
//! large enough for the biggest remaining stone. Shape fit is left to the
//! search.

use bitvec::prelude::*;

use crate::spatial::board::Board;
use crate::spatial::geometry::Coord;
use crate::spatial::stones::{StoneColor, StoneSet};

/// Cell counts of the smallest and largest remaining stones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeBounds {
    /// Cells of the smallest remaining stone
    pub min: usize,
    /// Cells of the largest remaining stone
    pub max: usize,
}

impl SizeBounds {
    /// Bounds over `sizes`, `None` when there are no sizes
    pub fn of(sizes: impl IntoIterator<Item = usize>) -> Option<Self> {
        sizes.into_iter().fold(None, |bounds, size| {
            Some(bounds.map_or(Self { min: size, max: size }, |b: Self| Self {
                min: b.min.min(size),
                max: b.max.max(size),
            }))
        })
    }

    /// Bounds over the stones of `stones` named in `colors`
    pub fn of_stones(stones: &StoneSet, colors: &[StoneColor]) -> Option<Self> {
        Self::of(colors.iter().map(|&color| stones.size_of(color)))
    }
}

/// Sizes of the maximal connected empty regions, in discovery order
pub fn empty_regions(board: &Board, neighbors: &[Coord]) -> Vec<usize> {
    let mut visited = bitvec![0; board.cell_count()];
    let mut regions = Vec::new();
    let mut stack: Vec<Coord> = Vec::new();

    for start in board.coords() {
        if board.cell(start) != Some(None) {
            continue;
        }
        let Some(index) = board.flat_index(start) else {
            continue;
        };
        if visited.get(index).as_deref() == Some(&true) {
            continue;
        }

        visited.set(index, true);
        stack.push(start);
        let mut size = 0;

        while let Some([x, y, z]) = stack.pop() {
            size += 1;
            for &[dx, dy, dz] in neighbors {
                let next = [x + dx, y + dy, z + dz];
                if board.cell(next) != Some(None) {
                    continue;
                }
                let Some(next_index) = board.flat_index(next) else {
                    continue;
                };
                if visited.get(next_index).as_deref() == Some(&false) {
                    visited.set(next_index, true);
                    stack.push(next);
                }
            }
        }

        regions.push(size);
    }

    regions
}

/// Whether the empty regions can still host the remaining stones
///
/// Returns `false` if any region is non-empty but smaller than `bounds.min`,
/// or if the largest region is smaller than `bounds.max`. With no bounds
/// (no remaining stones) every board passes.
pub fn regions_admit(regions: &[usize], bounds: Option<SizeBounds>) -> bool {
    let Some(bounds) = bounds else {
        return true;
    };

    if regions.iter().any(|&size| size > 0 && size < bounds.min) {
        return false;
    }
    regions.iter().any(|&size| size >= bounds.max)
}

/// Connectivity pruning test for a partial board
pub fn is_still_solvable(
    board: &Board,
    neighbors: &[Coord],
    stones: &StoneSet,
    remaining: &[StoneColor],
) -> bool {
    let bounds = SizeBounds::of_stones(stones, remaining);
    bounds.is_none() || regions_admit(&empty_regions(board, neighbors), bounds)
}
