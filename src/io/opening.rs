//! Opening placements fixed before the search begins
//!
//! A placement is written `color:direction:anchor`, for example `pink:4:0,0`
//! on the planar grid or `green:0,1,-1:0,0,0` on the pyramid. The anchor is
//! the minimum corner of the oriented shape; a two-component anchor lies on
//! the bottom layer. Opening files hold one placement per line and ignore
//! blank lines and `#` comments.

use std::fs;
use std::path::Path;

use log::debug;

use crate::io::configuration::OPENING_COMMENT;
use crate::io::error::{Result, SolverError, file_system, invalid_parameter};
use crate::spatial::board::Board;
use crate::spatial::geometry::{Coord, Shape, translate};
use crate::spatial::grid::Grid;
use crate::spatial::stones::{StoneColor, StoneSet};

/// One pre-placed stone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningPlacement<D> {
    /// Stone to place
    pub color: StoneColor,
    /// Direction applied to the stone's base shape
    pub direction: D,
    /// Board coordinate of the oriented shape's minimum corner
    pub anchor: Coord,
}

impl<D: Copy> OpeningPlacement<D> {
    /// Board cells this placement covers
    ///
    /// # Errors
    ///
    /// Returns an error if the stone set has no stone of this color
    pub fn cells<G: Grid<Direction = D>>(&self, grid: &G, stones: &StoneSet) -> Result<Shape> {
        let stone = stones.get(self.color).ok_or_else(|| {
            invalid_parameter("color", &self.color, &"not part of the stone set")
        })?;
        let shape = grid.oriented_shape(stone.cells(), self.direction);
        Ok(translate(&shape, self.anchor))
    }
}

fn parse_anchor(text: &str) -> Result<Coord> {
    let parts = text
        .split(',')
        .map(|part| part.trim().parse::<i32>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|error| invalid_parameter("anchor", &text, &error))?;

    match parts.as_slice() {
        &[x, y] => Ok([x, y, 0]),
        &[x, y, z] => Ok([x, y, z]),
        _ => Err(invalid_parameter(
            "anchor",
            &text,
            &"expected x,y or x,y,z",
        )),
    }
}

/// Ordered list of pre-placed stones
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opening<D> {
    placements: Vec<OpeningPlacement<D>>,
}

impl<D> Default for Opening<D> {
    fn default() -> Self {
        Self {
            placements: Vec::new(),
        }
    }
}

impl<D: Copy> Opening<D> {
    /// Opening without placements
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a single `color:direction:anchor` placement
    ///
    /// # Errors
    ///
    /// Returns an error if any of the three fields is malformed or the
    /// direction is not part of the grid's direction set
    pub fn parse_placement<G: Grid<Direction = D>>(
        grid: &G,
        text: &str,
    ) -> Result<OpeningPlacement<D>> {
        let fields: Vec<&str> = text.trim().split(':').map(str::trim).collect();
        let &[color, direction, anchor] = fields.as_slice() else {
            return Err(invalid_parameter(
                "placement",
                &text,
                &"expected color:direction:anchor",
            ));
        };

        Ok(OpeningPlacement {
            color: color.parse()?,
            direction: grid.parse_direction(direction)?,
            anchor: parse_anchor(anchor)?,
        })
    }

    /// Parse an opening file's contents
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidOpening`] naming the first bad line
    pub fn from_text<G: Grid<Direction = D>>(grid: &G, text: &str) -> Result<Self> {
        let mut opening = Self::new();
        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(OPENING_COMMENT) {
                continue;
            }
            let placement =
                Self::parse_placement(grid, line).map_err(|error| SolverError::InvalidOpening {
                    line: index + 1,
                    reason: error.to_string(),
                })?;
            opening.push(placement);
        }
        Ok(opening)
    }

    /// Read and parse an opening file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file<G: Grid<Direction = D>>(grid: &G, path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(file_system(path, "read opening"))?;
        Self::from_text(grid, &text)
    }

    /// Append a placement
    pub fn push(&mut self, placement: OpeningPlacement<D>) {
        self.placements.push(placement);
    }

    /// Placements in application order
    pub fn placements(&self) -> &[OpeningPlacement<D>] {
        &self.placements
    }

    /// Number of placements
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Whether the opening places nothing
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Apply every placement to `board` in order
    ///
    /// # Errors
    ///
    /// Returns an error if a color is unknown, already on the board, or its
    /// placement collides or leaves the board
    pub fn apply<G: Grid<Direction = D>>(
        &self,
        grid: &G,
        stones: &StoneSet,
        board: &Board,
    ) -> Result<Board>
    where
        D: std::fmt::Display,
    {
        let mut current = board.clone();
        for placement in &self.placements {
            if current.colors_present().contains(&placement.color) {
                return Err(invalid_parameter(
                    "placement",
                    &placement.color,
                    &"stone is already on the board",
                ));
            }

            let cells = placement.cells(grid, stones)?;
            current = current
                .place(placement.color, &cells, [0, 0, 0])
                .map_err(|source| SolverError::Placement {
                    color: placement.color,
                    source,
                })?;
            debug!(
                "Placed {} with direction {} at {:?}",
                placement.color, placement.direction, placement.anchor
            );
        }
        Ok(current)
    }
}
