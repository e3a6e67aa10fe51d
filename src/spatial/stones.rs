//! Stone definitions and the standard twelve-stone set
//!
//! A stone is a flat polyomino identified by its color. Shapes are given as
//! 2D cell offsets relative to an implicit anchor; the grid's transform group
//! decides how they are laid onto the board.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::io::error::{Result, SolverError, invalid_parameter};
use crate::spatial::geometry::BasePoint;

/// Identifier of a stone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StoneColor {
    /// `GGG` with a nub under the middle
    Green,
    /// Staircase of two and three
    Pink,
    /// Bar of four with a nub under the third cell
    Yellow,
    /// Diagonal staircase
    Violet,
    /// Bar of four with a foot
    LightRed,
    /// Skewed four-cell step
    Red,
    /// Twisted five-cell cross
    Orange,
    /// Four-cell hook
    Blue,
    /// Symmetric corner of five
    LightBlue,
    /// Three-cell corner
    Cyan,
    /// Five-cell cup
    LightGreen,
    /// Block of four with one extra cell
    Lime,
}

impl StoneColor {
    /// Every color in declaration order
    pub const ALL: [Self; 12] = [
        Self::Green,
        Self::Pink,
        Self::Yellow,
        Self::Violet,
        Self::LightRed,
        Self::Red,
        Self::Orange,
        Self::Blue,
        Self::LightBlue,
        Self::Cyan,
        Self::LightGreen,
        Self::Lime,
    ];

    /// Lowercase name used on the command line and in opening files
    pub const fn name(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Pink => "pink",
            Self::Yellow => "yellow",
            Self::Violet => "violet",
            Self::LightRed => "lightred",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Blue => "blue",
            Self::LightBlue => "lightblue",
            Self::Cyan => "cyan",
            Self::LightGreen => "lightgreen",
            Self::Lime => "lime",
        }
    }

    /// Single-character marker used in board signatures
    pub const fn marker(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Pink => 'p',
            Self::Yellow => 'y',
            Self::Violet => 'v',
            Self::LightRed => 'r',
            Self::Red => 'R',
            Self::Orange => 'o',
            Self::Blue => 'B',
            Self::LightBlue => 'b',
            Self::Cyan => 'c',
            Self::LightGreen => 'g',
            Self::Lime => 'l',
        }
    }

    /// Display color for rendered boards
    pub const fn rgba(self) -> [u8; 4] {
        match self {
            Self::Green => [0, 128, 0, 255],
            Self::Pink => [255, 105, 180, 255],
            Self::Yellow => [230, 200, 0, 255],
            Self::Violet => [128, 0, 128, 255],
            Self::LightRed => [255, 99, 71, 255],
            Self::Red => [200, 0, 0, 255],
            Self::Orange => [255, 165, 0, 255],
            Self::Blue => [0, 0, 205, 255],
            Self::LightBlue => [100, 149, 237, 255],
            Self::Cyan => [0, 200, 200, 255],
            Self::LightGreen => [144, 238, 144, 255],
            Self::Lime => [175, 238, 238, 255],
        }
    }

    /// Look up the color written as `marker` in a signature
    pub fn from_marker(marker: char) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.marker() == marker)
    }
}

impl fmt::Display for StoneColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StoneColor {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|color| color.name() == wanted)
            .ok_or_else(|| invalid_parameter("color", &s, &"unknown stone color"))
    }
}

// Default orientation of each stone, x to the right and y downwards
const STANDARD_STONES: [(StoneColor, &[BasePoint]); 12] = [
    (StoneColor::Green, &[[0, 0], [1, 0], [1, 1], [2, 0]]),
    (StoneColor::Pink, &[[0, 0], [1, 0], [1, -1], [2, -1], [3, -1]]),
    (StoneColor::Yellow, &[[0, 0], [1, 0], [2, 0], [2, 1], [3, 0]]),
    (StoneColor::Violet, &[[0, 0], [1, 0], [1, -1], [2, -1], [2, -2]]),
    (StoneColor::LightRed, &[[0, 0], [0, 1], [0, 2], [0, 3], [1, 3]]),
    (StoneColor::Red, &[[0, 0], [0, 1], [1, 1], [1, 2]]),
    (StoneColor::Orange, &[[0, 0], [1, 0], [1, 1], [2, 1], [1, 2]]),
    (StoneColor::Blue, &[[0, 0], [0, 1], [1, 1], [2, 1]]),
    (StoneColor::LightBlue, &[[0, 0], [1, 0], [2, 0], [2, 1], [2, 2]]),
    (StoneColor::Cyan, &[[0, 0], [1, 0], [1, -1]]),
    (StoneColor::LightGreen, &[[0, 0], [0, 1], [1, 1], [2, 1], [2, 0]]),
    (StoneColor::Lime, &[[0, 0], [0, 1], [1, -1], [1, 0], [1, 1]]),
];

/// A colored stone with its base shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stone {
    color: StoneColor,
    cells: Vec<BasePoint>,
}

impl Stone {
    /// Create a stone, validating its shape
    ///
    /// # Errors
    ///
    /// Returns an error if `cells` is empty or contains a duplicate offset
    pub fn new(color: StoneColor, cells: Vec<BasePoint>) -> Result<Self> {
        if cells.is_empty() {
            return Err(SolverError::InvalidStone {
                color: color.to_string(),
                reason: "stone has no cells".to_string(),
            });
        }

        let mut seen = HashSet::with_capacity(cells.len());
        for cell in &cells {
            if !seen.insert(*cell) {
                return Err(SolverError::InvalidStone {
                    color: color.to_string(),
                    reason: format!("cell {cell:?} appears twice"),
                });
            }
        }

        Ok(Self { color, cells })
    }

    /// Color identifying this stone
    pub const fn color(&self) -> StoneColor {
        self.color
    }

    /// Base cell offsets
    pub fn cells(&self) -> &[BasePoint] {
        &self.cells
    }

    /// Number of cells the stone covers
    pub fn size(&self) -> usize {
        self.cells.len()
    }
}

/// Ordered collection of distinct stones
///
/// Declaration order is the order in which the solver places stones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoneSet {
    stones: Vec<Stone>,
}

impl StoneSet {
    /// Create a set from validated stones
    ///
    /// # Errors
    ///
    /// Returns an error if two stones share a color
    pub fn new(stones: Vec<Stone>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(stones.len());
        for stone in &stones {
            if !seen.insert(stone.color) {
                return Err(SolverError::InvalidStone {
                    color: stone.color.to_string(),
                    reason: "color declared twice in stone set".to_string(),
                });
            }
        }
        Ok(Self { stones })
    }

    /// The twelve stones of the classic puzzle, 55 cells in total
    pub fn standard() -> Self {
        Self {
            stones: STANDARD_STONES
                .iter()
                .map(|&(color, cells)| Stone {
                    color,
                    cells: cells.to_vec(),
                })
                .collect(),
        }
    }

    /// Stones in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, Stone> {
        self.stones.iter()
    }

    /// Look up a stone by color
    pub fn get(&self, color: StoneColor) -> Option<&Stone> {
        self.stones.iter().find(|stone| stone.color == color)
    }

    /// Cell count of the stone with `color`, zero if absent
    pub fn size_of(&self, color: StoneColor) -> usize {
        self.get(color).map_or(0, Stone::size)
    }

    /// Colors in declaration order
    pub fn colors(&self) -> Vec<StoneColor> {
        self.stones.iter().map(Stone::color).collect()
    }

    /// Total number of cells covered by all stones
    pub fn total_cells(&self) -> usize {
        self.stones.iter().map(Stone::size).sum()
    }

    /// Number of stones
    pub fn len(&self) -> usize {
        self.stones.len()
    }

    /// Whether the set holds no stones
    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }
}

impl<'a> IntoIterator for &'a StoneSet {
    type Item = &'a Stone;
    type IntoIter = std::slice::Iter<'a, Stone>;

    fn into_iter(self) -> Self::IntoIter {
        self.stones.iter()
    }
}
