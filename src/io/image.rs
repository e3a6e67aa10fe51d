//! Colorized PNG rendering of boards
//!
//! Layers are drawn side by side, bottom layer first, one filled square per
//! cell. The images are for people only; nothing reads them back.

use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};

use crate::algorithm::registry::SolutionSink;
use crate::io::configuration::{
    BACKGROUND_RGBA, EMPTY_CELL_RGBA, PNG_CELL_GAP, PNG_CELL_SIZE, PNG_FILE_PREFIX, PNG_LAYER_GAP,
};
use crate::io::error::{Result, SolverError, file_system};
use crate::spatial::board::Board;

const PITCH: u32 = PNG_CELL_SIZE + PNG_CELL_GAP;

fn span(cells: usize) -> u32 {
    (cells as u32 * PITCH).saturating_sub(PNG_CELL_GAP)
}

/// Render `board` into an RGBA image
pub fn render_board(board: &Board) -> RgbaImage {
    let dims = board.dims();
    let width = dims.iter().map(|&(_, cols)| span(cols)).sum::<u32>()
        + PNG_LAYER_GAP * (dims.len() as u32).saturating_sub(1);
    let height = dims.iter().map(|&(rows, _)| span(rows)).max().unwrap_or(0);

    let mut img = RgbaImage::from_pixel(width.max(1), height.max(1), Rgba(BACKGROUND_RGBA));

    let mut left = 0;
    for (z, &(rows, cols)) in dims.iter().enumerate() {
        for y in 0..rows {
            for x in 0..cols {
                let cell = board
                    .cell([x as i32, y as i32, z as i32])
                    .flatten()
                    .map_or(EMPTY_CELL_RGBA, |color| color.rgba());
                fill_cell(&mut img, left + x as u32 * PITCH, y as u32 * PITCH, Rgba(cell));
            }
        }
        left += span(cols) + PNG_LAYER_GAP;
    }

    img
}

fn fill_cell(img: &mut RgbaImage, left: u32, top: u32, color: Rgba<u8>) {
    for py in top..top + PNG_CELL_SIZE {
        for px in left..left + PNG_CELL_SIZE {
            if let Some(pixel) = img.get_pixel_mut_checked(px, py) {
                *pixel = color;
            }
        }
    }
}

/// Save `board` as a PNG image at `path`
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn export_board_as_png(board: &Board, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(file_system(parent, "create directory"))?;
    }

    render_board(board)
        .save(path)
        .map_err(|source| SolverError::ImageExport {
            path: path.to_path_buf(),
            source,
        })
}

/// Solution sink writing one numbered PNG per new solution
pub struct PngGallery {
    dir: PathBuf,
    written: usize,
}

impl PngGallery {
    /// Write images into `dir`, creating it if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created
    pub fn new(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir).map_err(file_system(dir, "create directory"))?;
        Ok(Self {
            dir: dir.to_path_buf(),
            written: 0,
        })
    }

    /// Continue numbering after `written` images of an earlier run
    #[must_use]
    pub const fn continuing_from(mut self, written: usize) -> Self {
        self.written = written;
        self
    }

    /// Number of images written so far
    pub const fn written(&self) -> usize {
        self.written
    }

    /// Path of the image for the `index`-th solution, 1-based
    pub fn image_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{PNG_FILE_PREFIX}{index:04}.png"))
    }
}

impl SolutionSink for PngGallery {
    fn persist(&mut self, _signature: &str, board: &Board) -> Result<()> {
        let path = self.image_path(self.written + 1);
        export_board_as_png(board, &path)?;
        self.written += 1;
        Ok(())
    }
}
