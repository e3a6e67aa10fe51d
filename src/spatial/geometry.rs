//! Coordinate transforms mapping base stone shapes onto board coordinates
//!
//! Stones are defined as flat 2D cell offsets. A direction selects one member
//! of the grid's transform group and maps every offset to a 3D board
//! coordinate. The planar grid only ever produces `z = 0`; the pyramid grid
//! can tilt a stone into the diagonal planes that connect adjacent layers.

use std::fmt;
use std::str::FromStr;

use crate::io::error::{Result, invalid_parameter};

/// Board coordinate as `[x, y, z]` (column, row, layer)
pub type Coord = [i32; 3];

/// Cell offset in a stone's flat base definition
pub type BasePoint = [i32; 2];

/// Stone cells after transformation, one coordinate per cell
pub type Shape = Vec<Coord>;

/// Signed quarter-turn descriptor for the planar grid
///
/// Values `1..=4` rotate clockwise by `value - 1` quarter turns. Negative
/// values mirror the shape across the x axis before rotating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlanarDirection(i8);

impl PlanarDirection {
    /// Every planar direction in canonical enumeration order
    pub const ALL: [Self; 8] = [
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(-1),
        Self(-2),
        Self(-3),
        Self(-4),
    ];

    /// Create a direction from its signed encoding
    ///
    /// # Errors
    ///
    /// Returns an error if the magnitude is not in `1..=4`
    pub fn new(value: i8) -> Result<Self> {
        if (1..=4).contains(&value.unsigned_abs()) {
            Ok(Self(value))
        } else {
            Err(invalid_parameter(
                "direction",
                &value,
                &"planar directions are 1..=4 or -1..=-4",
            ))
        }
    }

    /// Signed encoding of this direction
    pub const fn value(self) -> i8 {
        self.0
    }

    /// Whether the shape is mirrored before rotating
    pub const fn is_reflected(self) -> bool {
        self.0 < 0
    }

    /// Map a base offset through this direction
    pub fn apply(self, point: BasePoint) -> Coord {
        let [mut x, mut y] = point;
        if self.is_reflected() {
            y = -y;
        }
        for _ in 1..self.0.unsigned_abs() {
            (x, y) = (y, -x);
        }
        [x, y, 0]
    }
}

impl fmt::Display for PlanarDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlanarDirection {
    type Err = crate::io::error::SolverError;

    fn from_str(s: &str) -> Result<Self> {
        let value = s
            .trim()
            .parse::<i8>()
            .map_err(|e| invalid_parameter("direction", &s, &e))?;
        Self::new(value)
    }
}

/// Transform descriptor for the pyramid grid
///
/// `level` selects whether the stone lies flat (`0`) or tilts towards the
/// layer above (`1`) or below (`-1`). `orientation` picks one of the four
/// compass directions for the stone's x axis and `rotation` flips the y axis
/// by 180°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PyramidDirection {
    level: i8,
    orientation: u8,
    rotation: i8,
}

impl PyramidDirection {
    /// Create a direction from its three components
    ///
    /// # Errors
    ///
    /// Returns an error if `level` is not in `-1..=1`, `orientation` is not
    /// in `0..=3`, or `rotation` is not `1` or `-1`
    pub fn new(level: i8, orientation: u8, rotation: i8) -> Result<Self> {
        let value = format!("{level},{orientation},{rotation}");
        if !(-1..=1).contains(&level) {
            return Err(invalid_parameter(
                "direction",
                &value,
                &"level must be -1, 0 or 1",
            ));
        }
        if orientation > 3 {
            return Err(invalid_parameter(
                "direction",
                &value,
                &"orientation must be in 0..=3",
            ));
        }
        if rotation != 1 && rotation != -1 {
            return Err(invalid_parameter(
                "direction",
                &value,
                &"rotation must be 1 or -1",
            ));
        }
        Ok(Self {
            level,
            orientation,
            rotation,
        })
    }

    /// Every pyramid direction in canonical enumeration order
    ///
    /// Ordered by level, then orientation, then rotation.
    pub fn all() -> Vec<Self> {
        let mut directions = Vec::with_capacity(24);
        for level in [-1, 0, 1] {
            for orientation in 0..4 {
                for rotation in [1, -1] {
                    directions.push(Self {
                        level,
                        orientation,
                        rotation,
                    });
                }
            }
        }
        directions
    }

    /// Vertical component: `-1` lower, `0` same, `1` upper level
    pub const fn level(self) -> i8 {
        self.level
    }

    /// Compass orientation in `0..=3`
    pub const fn orientation(self) -> u8 {
        self.orientation
    }

    /// `1` for 0°, `-1` for 180°
    pub const fn rotation(self) -> i8 {
        self.rotation
    }

    /// Basis vectors the base x and y axes are mapped to
    ///
    /// For tilted levels `dx` steps onto an adjacent layer and `dy` is
    /// perpendicular to it inside the same diagonal plane of the pyramid.
    pub fn basis(self) -> (Coord, Coord) {
        let o = self.orientation;
        let r = i32::from(self.rotation);
        match self.level {
            1 => {
                let dx = [
                    if o <= 1 { 0 } else { -1 },
                    if o == 0 || o == 3 { 0 } else { -1 },
                    1,
                ];
                let [dx0, dx1, _] = dx;
                (dx, [r * (-dx0 - 1), r * (-dx1 - 1), r])
            }
            -1 => {
                let dx = [
                    i32::from(o <= 1),
                    i32::from(o == 0 || o == 3),
                    -1,
                ];
                let [dx0, dx1, _] = dx;
                (dx, [r * (dx0 - 1), r * (dx1 - 1), r])
            }
            _ => {
                let dx = match o {
                    0 => [1, 0, 0],
                    1 => [0, 1, 0],
                    2 => [-1, 0, 0],
                    _ => [0, -1, 0],
                };
                let [dx0, dx1, _] = dx;
                (dx, [-dx1 * r, dx0 * r, 0])
            }
        }
    }

    /// Map a base offset through this direction
    pub fn apply(self, point: BasePoint) -> Coord {
        let (dx, dy) = self.basis();
        let [px, py] = point;
        let [dx0, dx1, dx2] = dx;
        let [dy0, dy1, dy2] = dy;
        [
            px * dx0 + py * dy0,
            px * dx1 + py * dy1,
            px * dx2 + py * dy2,
        ]
    }
}

impl fmt::Display for PyramidDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.level, self.orientation, self.rotation)
    }
}

impl FromStr for PyramidDirection {
    type Err = crate::io::error::SolverError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [level, orientation, rotation] = parts.as_slice() else {
            return Err(invalid_parameter(
                "direction",
                &s,
                &"expected level,orientation,rotation",
            ));
        };
        let level = level
            .parse::<i8>()
            .map_err(|e| invalid_parameter("direction", &s, &e))?;
        let orientation = orientation
            .parse::<u8>()
            .map_err(|e| invalid_parameter("direction", &s, &e))?;
        let rotation = rotation
            .parse::<i8>()
            .map_err(|e| invalid_parameter("direction", &s, &e))?;
        Self::new(level, orientation, rotation)
    }
}

/// Translate a shape so its bounding box touches the origin on every axis
pub fn normalize(shape: &[Coord]) -> Shape {
    let mut mins = [i32::MAX; 3];
    for cell in shape {
        for (min, &value) in mins.iter_mut().zip(cell) {
            *min = (*min).min(value);
        }
    }

    shape
        .iter()
        .map(|&[x, y, z]| {
            let [mx, my, mz] = mins;
            [x - mx, y - my, z - mz]
        })
        .collect()
}

/// Canonical textual signature of a shape
///
/// Cells are sorted lexicographically by `(x, y, z)` and joined, so two
/// shapes covering the same cells share a signature regardless of cell order.
/// Callers normalize first when comparing shapes up to translation.
pub fn shape_signature(shape: &[Coord]) -> String {
    let mut cells = shape.to_vec();
    cells.sort_unstable();
    cells
        .iter()
        .map(|[x, y, z]| format!("{x}:{y}:{z}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Translate a shape by an anchor coordinate
pub fn translate(shape: &[Coord], anchor: Coord) -> Shape {
    let [ax, ay, az] = anchor;
    shape.iter().map(|&[x, y, z]| [x + ax, y + ay, z + az]).collect()
}
