//! Grid variants the solver can run on
//!
//! The backtracking search is written once against the [`Grid`] trait. A grid
//! supplies its board shape, its neighbour table for connectivity analysis,
//! and its transform group for orienting stones.

use std::fmt;

use crate::io::configuration::MAX_BOARD_DIMENSION;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::geometry::{
    BasePoint, Coord, PlanarDirection, PyramidDirection, Shape, normalize,
};

/// Edge neighbours on the planar grid
pub const PLANAR_NEIGHBORS: [Coord; 4] = [[-1, 0, 0], [1, 0, 0], [0, -1, 0], [0, 1, 0]];

/// Touching neighbours in a square pyramid
///
/// Four cells in the layer above, four in the same layer and four in the
/// layer below. A cell `(x, y, z + 1)` rests on `(x..=x+1, y..=y+1, z)`.
pub const PYRAMID_NEIGHBORS: [Coord; 12] = [
    [0, 0, 1],
    [-1, 0, 1],
    [-1, -1, 1],
    [0, -1, 1],
    [-1, 0, 0],
    [1, 0, 0],
    [0, -1, 0],
    [0, 1, 0],
    [0, 0, -1],
    [1, 0, -1],
    [1, 1, -1],
    [0, 1, -1],
];

/// Board geometry and transform group shared by the solver components
pub trait Grid {
    /// Descriptor selecting one member of the transform group
    type Direction: Copy + Eq + fmt::Debug + fmt::Display;

    /// Short human readable grid name
    fn name(&self) -> &'static str;

    /// Full direction set in canonical enumeration order
    fn directions(&self) -> &[Self::Direction];

    /// Map a base stone offset through a direction
    fn transform(&self, point: BasePoint, direction: Self::Direction) -> Coord;

    /// `(rows, cols)` of each layer, bottom layer first
    fn layer_dims(&self) -> Vec<(usize, usize)>;

    /// Offsets of the cells adjacent to any cell
    fn neighbor_offsets(&self) -> &'static [Coord];

    /// Parse a direction from its textual form
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a member of this grid's direction set
    fn parse_direction(&self, text: &str) -> Result<Self::Direction>;

    /// Apply a direction to every cell of a base shape
    fn rotate_stone(&self, cells: &[BasePoint], direction: Self::Direction) -> Shape {
        cells
            .iter()
            .map(|&point| self.transform(point, direction))
            .collect()
    }

    /// Rotate a base shape and normalize it so its minimum corner is the origin
    fn oriented_shape(&self, cells: &[BasePoint], direction: Self::Direction) -> Shape {
        normalize(&self.rotate_stone(cells, direction))
    }
}

fn check_dimension(parameter: &'static str, value: usize) -> Result<usize> {
    if value == 0 || value > MAX_BOARD_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must be in 1..={MAX_BOARD_DIMENSION}"),
        ));
    }
    Ok(value)
}

/// Rectangular single-layer board with 4-fold rotation and reflection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanarGrid {
    width: usize,
    height: usize,
}

impl PlanarGrid {
    /// Create a planar grid of `width` columns and `height` rows
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds the board limit
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Ok(Self {
            width: check_dimension("width", width)?,
            height: check_dimension("height", height)?,
        })
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }
}

impl Grid for PlanarGrid {
    type Direction = PlanarDirection;

    fn name(&self) -> &'static str {
        "planar"
    }

    fn directions(&self) -> &[PlanarDirection] {
        &PlanarDirection::ALL
    }

    fn transform(&self, point: BasePoint, direction: PlanarDirection) -> Coord {
        direction.apply(point)
    }

    fn layer_dims(&self) -> Vec<(usize, usize)> {
        vec![(self.height, self.width)]
    }

    fn neighbor_offsets(&self) -> &'static [Coord] {
        &PLANAR_NEIGHBORS
    }

    fn parse_direction(&self, text: &str) -> Result<PlanarDirection> {
        text.parse()
    }
}

/// Square pyramid of stacked layers, layer `h` holding `(base - h)²` cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PyramidGrid {
    base: usize,
    directions: Vec<PyramidDirection>,
}

impl PyramidGrid {
    /// Create a pyramid whose bottom layer has side length `base`
    ///
    /// # Errors
    ///
    /// Returns an error if `base` is zero or exceeds the board limit
    pub fn new(base: usize) -> Result<Self> {
        Ok(Self {
            base: check_dimension("base", base)?,
            directions: PyramidDirection::all(),
        })
    }

    /// Side length of the bottom layer
    pub const fn base(&self) -> usize {
        self.base
    }
}

impl Grid for PyramidGrid {
    type Direction = PyramidDirection;

    fn name(&self) -> &'static str {
        "pyramid"
    }

    fn directions(&self) -> &[PyramidDirection] {
        &self.directions
    }

    fn transform(&self, point: BasePoint, direction: PyramidDirection) -> Coord {
        direction.apply(point)
    }

    fn layer_dims(&self) -> Vec<(usize, usize)> {
        (0..self.base)
            .map(|h| (self.base - h, self.base - h))
            .collect()
    }

    fn neighbor_offsets(&self) -> &'static [Coord] {
        &PYRAMID_NEIGHBORS
    }

    fn parse_direction(&self, text: &str) -> Result<PyramidDirection> {
        text.parse()
    }
}
