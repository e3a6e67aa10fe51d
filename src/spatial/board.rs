//! Copy-on-write board of stone-colored cells
//!
//! A board is a stack of rectangular layers whose shape is fixed at
//! construction. Placing a stone never mutates the receiver: it yields a new
//! board, so sibling branches of the search can never observe each other's
//! placements and a failed placement leaves nothing behind.

use std::collections::BTreeSet;
use std::fmt;

use ndarray::Array2;

use crate::io::configuration::{CELL_SEPARATOR, EMPTY_MARKER, LAYER_SEPARATOR};
use crate::io::error::{Result, SolverError};
use crate::spatial::geometry::Coord;
use crate::spatial::grid::Grid;
use crate::spatial::stones::StoneColor;

/// Cell content: `None` is empty, otherwise the covering stone's color
pub type Cell = Option<StoneColor>;

/// Reason a placement was rejected
///
/// Both variants are expected outcomes while searching; they signal that the
/// next candidate should be tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// A target coordinate lies outside the board shape
    OutOfBounds {
        /// First offending coordinate
        coord: Coord,
    },
    /// A target cell is already covered
    Collision {
        /// First offending coordinate
        coord: Coord,
        /// Stone already covering the cell
        occupant: StoneColor,
    },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { coord } => write!(f, "cell {coord:?} is outside the board"),
            Self::Collision { coord, occupant } => {
                write!(f, "cell {coord:?} is already covered by {occupant}")
            }
        }
    }
}

impl std::error::Error for PlacementError {}

/// Fixed-shape stack of cell layers
///
/// Layers are indexed `[row, col]`, i.e. `[y, x]` of a [`Coord`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    layers: Vec<Array2<Cell>>,
}

impl Board {
    /// Create an empty board with the given `(rows, cols)` per layer
    pub fn new(dims: &[(usize, usize)]) -> Self {
        Self {
            layers: dims
                .iter()
                .map(|&shape| Array2::from_elem(shape, None))
                .collect(),
        }
    }

    /// Create an empty board shaped like `grid`
    pub fn for_grid<G: Grid>(grid: &G) -> Self {
        Self::new(&grid.layer_dims())
    }

    /// `(rows, cols)` of each layer
    pub fn dims(&self) -> Vec<(usize, usize)> {
        self.layers.iter().map(Array2::dim).collect()
    }

    /// Number of layers
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Total number of cells across all layers
    pub fn cell_count(&self) -> usize {
        self.layers.iter().map(Array2::len).sum()
    }

    /// Number of cells not covered by any stone
    pub fn empty_count(&self) -> usize {
        self.layers
            .iter()
            .map(|layer| layer.iter().filter(|cell| cell.is_none()).count())
            .sum()
    }

    /// Whether every cell is covered
    pub fn is_complete(&self) -> bool {
        self.empty_count() == 0
    }

    fn locate(&self, coord: Coord) -> Option<(usize, [usize; 2])> {
        let [x, y, z] = coord;
        let layer = usize::try_from(z).ok()?;
        let row = usize::try_from(y).ok()?;
        let col = usize::try_from(x).ok()?;
        let (rows, cols) = self.layers.get(layer)?.dim();
        (row < rows && col < cols).then_some((layer, [row, col]))
    }

    /// Whether `coord` addresses a cell of this board
    pub fn in_bounds(&self, coord: Coord) -> bool {
        self.locate(coord).is_some()
    }

    /// Content of the cell at `coord`, `None` when out of bounds
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        let (layer, index) = self.locate(coord)?;
        self.layers.get(layer)?.get(index).copied()
    }

    /// Position of `coord` in layer-major order, `None` when out of bounds
    pub fn flat_index(&self, coord: Coord) -> Option<usize> {
        let (layer, [row, col]) = self.locate(coord)?;
        let before: usize = self.layers.iter().take(layer).map(Array2::len).sum();
        let cols = self.layers.get(layer)?.ncols();
        Some(before + row * cols + col)
    }

    /// Every coordinate in search order: layer, then row, then column
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.layers.iter().enumerate().flat_map(|(z, layer)| {
            let (rows, cols) = layer.dim();
            (0..rows).flat_map(move |y| (0..cols).map(move |x| [x as i32, y as i32, z as i32]))
        })
    }

    /// Place `shape` translated by `anchor` as stone `color`
    ///
    /// Returns the new board on success. On failure the receiver is untouched
    /// and the partially written copy is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::OutOfBounds`] if any target is outside the
    /// board and [`PlacementError::Collision`] if any target is covered.
    pub fn place(
        &self,
        color: StoneColor,
        shape: &[Coord],
        anchor: Coord,
    ) -> std::result::Result<Self, PlacementError> {
        let mut next = self.clone();
        let [ax, ay, az] = anchor;
        for &[x, y, z] in shape {
            let coord = [x + ax, y + ay, z + az];
            let (layer, index) = next
                .locate(coord)
                .ok_or(PlacementError::OutOfBounds { coord })?;
            let cell = next
                .layers
                .get_mut(layer)
                .and_then(|layer| layer.get_mut(index))
                .ok_or(PlacementError::OutOfBounds { coord })?;
            if let Some(occupant) = *cell {
                return Err(PlacementError::Collision { coord, occupant });
            }
            *cell = Some(color);
        }
        Ok(next)
    }

    /// Copy of this board with every cell of `color` emptied
    #[must_use]
    pub fn without(&self, color: StoneColor) -> Self {
        let mut next = self.clone();
        for layer in &mut next.layers {
            layer.mapv_inplace(|cell| cell.filter(|&occupant| occupant != color));
        }
        next
    }

    /// Coordinates covered by `color`, in search order
    pub fn cells_of(&self, color: StoneColor) -> Vec<Coord> {
        self.coords()
            .filter(|&coord| self.cell(coord) == Some(Some(color)))
            .collect()
    }

    /// Distinct colors present on the board
    pub fn colors_present(&self) -> BTreeSet<StoneColor> {
        self.layers
            .iter()
            .flat_map(|layer| layer.iter().filter_map(|cell| *cell))
            .collect()
    }

    /// Deterministic text rendering used for display and deduplication
    ///
    /// Line `y` holds row `y` of every layer that has such a row, cells joined
    /// by [`CELL_SEPARATOR`] and layers by [`LAYER_SEPARATOR`].
    pub fn to_signature(&self) -> String {
        let rows = self.layers.iter().map(Array2::nrows).max().unwrap_or(0);
        let mut lines = Vec::with_capacity(rows);
        for y in 0..rows {
            let parts: Vec<String> = self
                .layers
                .iter()
                .filter(|layer| y < layer.nrows())
                .map(|layer| {
                    layer
                        .row(y)
                        .iter()
                        .map(|cell| cell.map_or(EMPTY_MARKER, StoneColor::marker).to_string())
                        .collect::<Vec<_>>()
                        .join(CELL_SEPARATOR)
                })
                .collect();
            lines.push(parts.join(LAYER_SEPARATOR));
        }
        lines.join("\n")
    }

    /// Rebuild a board of shape `dims` from its signature
    ///
    /// Whitespace is ignored; markers are assigned to the layers that own
    /// each line in layer order.
    ///
    /// # Errors
    ///
    /// Returns an error if a marker is unknown or a line holds the wrong
    /// number of cells for the board shape
    pub fn from_signature(dims: &[(usize, usize)], text: &str) -> Result<Self> {
        let mut board = Self::new(dims);
        let rows = dims.iter().map(|&(rows, _)| rows).max().unwrap_or(0);
        let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();

        if lines.len() != rows {
            return Err(SolverError::InvalidSignature {
                line: lines.len().min(rows) + 1,
                reason: format!("expected {rows} lines, found {}", lines.len()),
            });
        }

        for (y, line) in lines.iter().enumerate() {
            let mut cells = Vec::new();
            for marker in line.chars().filter(|c| !c.is_whitespace()) {
                let cell = if marker == EMPTY_MARKER {
                    None
                } else {
                    Some(StoneColor::from_marker(marker).ok_or_else(|| {
                        SolverError::InvalidSignature {
                            line: y + 1,
                            reason: format!("unknown marker '{marker}'"),
                        }
                    })?)
                };
                cells.push(cell);
            }

            let expected: usize = board
                .layers
                .iter()
                .filter(|layer| y < layer.nrows())
                .map(Array2::ncols)
                .sum();
            if cells.len() != expected {
                return Err(SolverError::InvalidSignature {
                    line: y + 1,
                    reason: format!("expected {expected} cells, found {}", cells.len()),
                });
            }

            let mut markers = cells.into_iter();
            for layer in board.layers.iter_mut().filter(|layer| y < layer.nrows()) {
                for target in layer.row_mut(y).iter_mut() {
                    *target = markers.next().flatten();
                }
            }
        }

        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_signature())
    }
}
