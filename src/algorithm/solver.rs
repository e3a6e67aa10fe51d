//! Generic exhaustive backtracking over stone placements
//!
//! A frame is keyed by the current board and the colors still to place. The
//! head color is tried at every board coordinate (layer, row, column) in every
//! canonical orientation. Boards are copy-on-write values, so a frame never
//! undoes anything: a successful placement produces the board the next frame
//! owns, and the current board stays valid for the next candidate.

use std::fmt;
use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::algorithm::connectivity::is_still_solvable;
use crate::algorithm::orientation::OrientationTable;
use crate::algorithm::registry::SolutionRegistry;
use crate::algorithm::resume::ResumeController;
use crate::io::error::Result;
use crate::io::progress::SearchProgress;
use crate::spatial::board::Board;
use crate::spatial::grid::Grid;
use crate::spatial::stones::{StoneColor, StoneSet};

/// How far the search runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Visit the whole search tree
    #[default]
    All,
    /// Stop after the first new solution
    First,
}

/// Why a search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Every candidate of the top-level frame was tried
    Exhausted,
    /// A new solution was found in [`SearchMode::First`]
    FirstFound,
    /// The cancellation token fired
    Cancelled,
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Exhausted => "search exhausted",
            Self::FirstFound => "first solution found",
            Self::Cancelled => "search cancelled",
        })
    }
}

/// Shared stop signal, optionally armed with a deadline
///
/// Clones share the flag, so a token handed to the solver can be cancelled
/// from elsewhere.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl CancellationToken {
    /// Token that only fires when cancelled explicitly
    pub fn new() -> Self {
        Self::default()
    }

    /// Also fire once `limit` has elapsed from now
    #[must_use]
    pub fn with_deadline(mut self, limit: Duration) -> Self {
        self.deadline = Instant::now().checked_add(limit);
        self
    }

    /// Request the search to stop
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether the search should stop
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
            || self
                .deadline
                .is_some_and(|deadline| Instant::now() >= deadline)
    }
}

/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Recursion frames entered
    pub nodes: u64,
    /// Anchor and orientation combinations tried
    pub candidates: u64,
    /// Placements that fit on the board
    pub placements: u64,
    /// Placements rejected by the connectivity test
    pub pruned: u64,
    /// Complete boards that were already known
    pub duplicates: u64,
    /// Boards left with empty cells once every stone was placed
    pub incomplete: u64,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} nodes, {} candidates, {} placements, {} pruned, {} duplicates",
            self.nodes, self.candidates, self.placements, self.pruned, self.duplicates
        )?;
        if self.incomplete > 0 {
            write!(f, ", {} incomplete", self.incomplete)?;
        }
        Ok(())
    }
}

/// Per-search mutable state threaded through the recursion
struct SearchState {
    stats: SearchStats,
    resume: Option<ResumeController>,
}

impl SearchState {
    fn is_replaying(&self) -> bool {
        self.resume
            .as_ref()
            .is_some_and(ResumeController::is_active)
    }

    fn finish_resume(&mut self) {
        if let Some(resume) = self.resume.as_mut() {
            resume.finish();
        }
    }
}

/// Backtracking solver over any [`Grid`]
pub struct Solver<'a, G: Grid> {
    grid: &'a G,
    stones: &'a StoneSet,
    table: OrientationTable<G::Direction>,
    mode: SearchMode,
    cancel: CancellationToken,
    resume: Option<ResumeController>,
    progress: Option<SearchProgress>,
    stats: SearchStats,
}

impl<'a, G: Grid> Solver<'a, G> {
    /// Prepare a solver, canonicalizing every stone once
    pub fn new(grid: &'a G, stones: &'a StoneSet) -> Self {
        Self {
            grid,
            stones,
            table: OrientationTable::build(grid, stones),
            mode: SearchMode::default(),
            cancel: CancellationToken::new(),
            resume: None,
            progress: None,
            stats: SearchStats::default(),
        }
    }

    /// Select exhaustive or first-solution search
    #[must_use]
    pub const fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Stop when `cancel` fires
    #[must_use]
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Skip the subtree a previous run already explored
    #[must_use]
    pub fn with_resume(mut self, resume: ResumeController) -> Self {
        self.resume = Some(resume);
        self
    }

    /// Report progress on a spinner
    #[must_use]
    pub fn with_progress(mut self, progress: SearchProgress) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Statistics of the last search
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Precomputed orientation table
    pub const fn orientations(&self) -> &OrientationTable<G::Direction> {
        &self.table
    }

    /// Colors of the stone set not yet on `board`, in stone set order
    pub fn remaining_colors(&self, board: &Board) -> Vec<StoneColor> {
        let present = board.colors_present();
        self.stones
            .colors()
            .into_iter()
            .filter(|color| !present.contains(color))
            .collect()
    }

    /// Search every tiling reachable from `board`, recording complete boards
    ///
    /// # Errors
    ///
    /// Returns an error if the registry fails to persist a solution
    pub fn solve(
        &mut self,
        board: &Board,
        registry: &mut SolutionRegistry,
    ) -> Result<SearchOutcome> {
        let colors = self.remaining_colors(board);
        let mut state = SearchState {
            stats: SearchStats::default(),
            resume: self.resume.take(),
        };

        let outcome = if colors.is_empty() {
            self.complete(&mut state, board, registry)?
        } else {
            let needed: usize = colors.iter().map(|&color| self.stones.size_of(color)).sum();
            if needed == board.empty_count() {
                info!(
                    "Searching {} board, placing {}",
                    self.grid.name(),
                    colors
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                if state
                    .resume
                    .as_ref()
                    .is_some_and(|resume| !resume.extends(board))
                {
                    warn!("Resume point does not extend the starting board, ignoring it");
                    state.resume = None;
                }
                self.place_next(&mut state, board, &colors, registry)?
            } else {
                warn!(
                    "Remaining stones cover {needed} cells but the board has {} empty cells",
                    board.empty_count()
                );
                ControlFlow::Continue(())
            }
        };

        registry.flush()?;
        self.stats = state.stats;
        let outcome = match outcome {
            ControlFlow::Break(outcome) => outcome,
            ControlFlow::Continue(()) => SearchOutcome::Exhausted,
        };

        if let Some(progress) = &self.progress {
            progress.finish(outcome, &self.stats, registry.discovered().len());
        }
        info!(
            "{outcome}: {} new solutions, {}",
            registry.discovered().len(),
            self.stats
        );
        Ok(outcome)
    }

    fn place_next(
        &self,
        state: &mut SearchState,
        board: &Board,
        colors: &[StoneColor],
        registry: &mut SolutionRegistry,
    ) -> Result<ControlFlow<SearchOutcome>> {
        let Some((&color, rest)) = colors.split_first() else {
            return Ok(ControlFlow::Continue(()));
        };

        state.stats.nodes += 1;
        if let Some(progress) = &self.progress {
            progress.tick(&state.stats, registry.discovered().len());
        }

        let replaying = state.is_replaying();
        if replaying
            && !state
                .resume
                .as_ref()
                .is_some_and(|resume| resume.constrains(color))
        {
            state.finish_resume();
        }

        let flow = self.try_candidates(state, board, color, rest, registry)?;
        if flow.is_continue() && state.is_replaying() {
            warn!("No placement of {color} matches the resume point, exploring it fully");
            state.finish_resume();
            return self.try_candidates(state, board, color, rest, registry);
        }
        Ok(flow)
    }

    fn try_candidates(
        &self,
        state: &mut SearchState,
        board: &Board,
        color: StoneColor,
        rest: &[StoneColor],
        registry: &mut SolutionRegistry,
    ) -> Result<ControlFlow<SearchOutcome>> {
        let orientations = self.table.orientations(color);

        for anchor in board.coords() {
            for orientation in orientations {
                if self.cancel.is_cancelled() {
                    return Ok(ControlFlow::Break(SearchOutcome::Cancelled));
                }
                state.stats.candidates += 1;

                let Ok(next) = board.place(color, &orientation.shape, anchor) else {
                    continue;
                };

                let replaying = state.is_replaying();
                if replaying
                    && !state
                        .resume
                        .as_ref()
                        .is_some_and(|resume| resume.matches(&next, color))
                {
                    continue;
                }

                state.stats.placements += 1;
                let flow = self.follow(state, &next, rest, registry)?;
                if replaying {
                    state.finish_resume();
                }
                if flow.is_break() {
                    return Ok(flow);
                }
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    fn follow(
        &self,
        state: &mut SearchState,
        next: &Board,
        rest: &[StoneColor],
        registry: &mut SolutionRegistry,
    ) -> Result<ControlFlow<SearchOutcome>> {
        if rest.is_empty() {
            return self.complete(state, next, registry);
        }
        if !is_still_solvable(next, self.grid.neighbor_offsets(), self.stones, rest) {
            state.stats.pruned += 1;
            return Ok(ControlFlow::Continue(()));
        }
        self.place_next(state, next, rest, registry)
    }

    fn complete(
        &self,
        state: &mut SearchState,
        board: &Board,
        registry: &mut SolutionRegistry,
    ) -> Result<ControlFlow<SearchOutcome>> {
        if !board.is_complete() {
            state.stats.incomplete += 1;
            return Ok(ControlFlow::Continue(()));
        }

        if !registry.record(board)? {
            state.stats.duplicates += 1;
            return Ok(ControlFlow::Continue(()));
        }

        let found = registry.discovered().len();
        info!("Solution {found} found after {} nodes", state.stats.nodes);
        if let Some(progress) = &self.progress {
            progress.solution_found(&state.stats, found);
        }

        Ok(match self.mode {
            SearchMode::All => ControlFlow::Continue(()),
            SearchMode::First => ControlFlow::Break(SearchOutcome::FirstFound),
        })
    }
}
