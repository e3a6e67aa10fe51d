//! Puzzle constants and runtime configuration defaults

// Board dimensions of the classic puzzles
/// Default number of columns of the planar board
pub const DEFAULT_PLANAR_WIDTH: usize = 11;
/// Default number of rows of the planar board
pub const DEFAULT_PLANAR_HEIGHT: usize = 5;
/// Default side length of the bottom pyramid layer
pub const DEFAULT_PYRAMID_BASE: usize = 5;

// Safety limit to keep board allocation and signatures reasonable
/// Maximum allowed board dimension on any axis
pub const MAX_BOARD_DIMENSION: usize = 64;

// Textual board rendering
/// Marker written for cells not covered by any stone
pub const EMPTY_MARKER: char = '·';
/// Separator between cells of one layer row
pub const CELL_SEPARATOR: &str = " ";
/// Separator between layers sharing an output line
pub const LAYER_SEPARATOR: &str = "  ";
/// Character starting a comment line in opening files
pub const OPENING_COMMENT: char = '#';

// Output settings
/// Solution log written next to the working directory by default
pub const DEFAULT_SOLUTION_FILE: &str = "solutions.txt";
/// File name prefix for PNG renderings of solutions
pub const PNG_FILE_PREFIX: &str = "solution_";
/// Edge length of one rendered cell in pixels
pub const PNG_CELL_SIZE: u32 = 24;
/// Gap between neighbouring cells in pixels
pub const PNG_CELL_GAP: u32 = 2;
/// Horizontal gap between rendered layers in pixels
pub const PNG_LAYER_GAP: u32 = 16;
/// Fill color of empty cells
pub const EMPTY_CELL_RGBA: [u8; 4] = [64, 64, 64, 255];
/// Image background color
pub const BACKGROUND_RGBA: [u8; 4] = [0, 0, 0, 0];

// Progress display settings
/// Number of visited search nodes between spinner refreshes
pub const PROGRESS_REFRESH_NODES: u64 = 4096;
/// Spinner animation interval in milliseconds
pub const PROGRESS_TICK_MS: u64 = 120;
