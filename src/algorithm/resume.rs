//! Skipping the part of the search tree a previous run already covered
//!
//! The search order is deterministic, so the last board a previous run
//! recorded marks how far it got. While the controller is active, the solver
//! only follows placements that agree with the marker and skips every
//! candidate before it. Once the marker's deepest placement is reached the
//! controller switches off and full exploration continues.

use log::info;

use crate::spatial::board::Board;
use crate::spatial::stones::StoneColor;

/// Tracks the resume marker while the search replays its path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeController {
    marker: Board,
    active: bool,
}

impl ResumeController {
    /// Resume from a previously recorded board
    pub const fn new(marker: Board) -> Self {
        Self {
            marker,
            active: true,
        }
    }

    /// Resume from the board as it looked before `color` was placed
    pub fn before_placing(marker: &Board, color: StoneColor) -> Self {
        Self::new(marker.without(color))
    }

    /// Whether the controller still restricts the search
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// The board the search is replaying towards
    pub const fn marker(&self) -> &Board {
        &self.marker
    }

    /// Whether the marker holds a placement of `color`
    ///
    /// A color absent from the marker is where the previous run stopped.
    pub fn constrains(&self, color: StoneColor) -> bool {
        self.marker.colors_present().contains(&color)
    }

    /// Whether `candidate` placed `color` on exactly the marker's cells
    ///
    /// Earlier colors already matched on the way down, so this compares the
    /// color-restricted prefix of the two boards.
    pub fn matches(&self, candidate: &Board, color: StoneColor) -> bool {
        candidate.cells_of(color) == self.marker.cells_of(color)
    }

    /// Whether the marker extends the starting board
    ///
    /// Every covered cell of `start` must carry the same color in the marker,
    /// and the marker must not place any of the starting colors elsewhere.
    pub fn extends(&self, start: &Board) -> bool {
        if start.dims() != self.marker.dims() {
            return false;
        }
        start
            .colors_present()
            .into_iter()
            .all(|color| start.cells_of(color) == self.marker.cells_of(color))
    }

    /// Stop restricting the search
    pub fn finish(&mut self) {
        if self.active {
            info!("Resume point reached, continuing full search");
            self.active = false;
        }
    }
}
