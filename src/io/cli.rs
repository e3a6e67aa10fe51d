//! Command-line interface for solving stone tiling puzzles

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use log::{Level, info};

use crate::algorithm::registry::SolutionRegistry;
use crate::algorithm::resume::ResumeController;
use crate::algorithm::solver::{CancellationToken, SearchMode, SearchOutcome, SearchStats, Solver};
use crate::io::configuration::{
    DEFAULT_PLANAR_HEIGHT, DEFAULT_PLANAR_WIDTH, DEFAULT_PYRAMID_BASE, DEFAULT_SOLUTION_FILE,
};
use crate::io::error::Result;
use crate::io::image::PngGallery;
use crate::io::opening::Opening;
use crate::io::progress::{SearchProgress, init_logging};
use crate::io::solution_log::{SolutionLog, read_records};
use crate::spatial::board::Board;
use crate::spatial::grid::{Grid, PlanarGrid, PyramidGrid};
use crate::spatial::stones::StoneSet;

/// Board geometry selected on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum GridKind {
    /// Rectangular single-layer board
    #[default]
    Planar,
    /// Square pyramid of stacked layers
    Pyramid,
}

#[derive(Parser, Debug)]
#[command(name = "stonetile")]
#[command(
    author,
    version,
    about = "Enumerate every tiling of a board with the twelve colored stones"
)]
/// Command-line arguments for the solver
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Board geometry
    #[arg(short, long, value_enum, default_value_t = GridKind::Planar)]
    pub grid: GridKind,

    /// Planar board width in cells
    #[arg(short = 'W', long, default_value_t = DEFAULT_PLANAR_WIDTH)]
    pub width: usize,

    /// Planar board height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_PLANAR_HEIGHT)]
    pub height: usize,

    /// Pyramid bottom layer side length
    #[arg(short, long, default_value_t = DEFAULT_PYRAMID_BASE)]
    pub base: usize,

    /// Pre-placed stone as COLOR:DIRECTION:ANCHOR (repeatable)
    #[arg(short = 'p', long = "place", value_name = "PLACEMENT")]
    pub placements: Vec<String>,

    /// File with one pre-placed stone per line
    #[arg(long, value_name = "FILE")]
    pub opening: Option<PathBuf>,

    /// Solution log
    #[arg(short, long, default_value = DEFAULT_SOLUTION_FILE)]
    pub output: PathBuf,

    /// Stop after the first new solution
    #[arg(short, long)]
    pub first: bool,

    /// Continue from the last record of the solution log
    #[arg(short, long)]
    pub resume: bool,

    /// Also render every new solution as PNG into this directory
    #[arg(long, value_name = "DIR")]
    pub png_dir: Option<PathBuf>,

    /// Stop searching after this many seconds
    #[arg(short, long, value_name = "SECONDS")]
    pub time_limit: Option<u64>,

    /// Print every logged solution to stdout when done
    #[arg(long)]
    pub print: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Most verbose log level to emit
    pub const fn log_level(&self) -> Level {
        if self.quiet {
            return Level::Warn;
        }
        match self.verbose {
            0 => Level::Info,
            1 => Level::Debug,
            _ => Level::Trace,
        }
    }

    /// Search mode implied by the flags
    pub const fn search_mode(&self) -> SearchMode {
        if self.first {
            SearchMode::First
        } else {
            SearchMode::All
        }
    }
}

/// Result of one solver run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Why the search ended
    pub outcome: SearchOutcome,
    /// Search counters
    pub stats: SearchStats,
    /// Solutions first found by this run
    pub new_solutions: usize,
    /// Solutions in the log, earlier runs included
    pub total_solutions: usize,
}

/// Orchestrates one solver run with logging and progress display
pub struct SolveRunner {
    cli: Cli,
    progress: SearchProgress,
}

impl SolveRunner {
    /// Create a runner and install the logger for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            SearchProgress::new()
        } else {
            SearchProgress::hidden()
        };
        init_logging(progress.bar(), cli.log_level());

        Self { cli, progress }
    }

    /// Run the search described by the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The board dimensions or an opening placement are invalid
    /// - The solution log cannot be read or written
    /// - A PNG rendering cannot be saved
    pub fn run(&self) -> Result<RunSummary> {
        match self.cli.grid {
            GridKind::Planar => self.run_grid(&PlanarGrid::new(self.cli.width, self.cli.height)?),
            GridKind::Pyramid => self.run_grid(&PyramidGrid::new(self.cli.base)?),
        }
    }

    fn load_opening<G: Grid>(&self, grid: &G) -> Result<Opening<G::Direction>> {
        let mut opening = match &self.cli.opening {
            Some(path) => Opening::from_file(grid, path)?,
            None => Opening::new(),
        };
        for text in &self.cli.placements {
            opening.push(Opening::parse_placement(grid, text)?);
        }
        Ok(opening)
    }

    fn run_grid<G: Grid>(&self, grid: &G) -> Result<RunSummary> {
        let stones = StoneSet::standard();
        let opening = self.load_opening(grid)?;
        let board = opening.apply(grid, &stones, &Board::for_grid(grid))?;
        if !opening.is_empty() {
            info!("Opening places {} stones:\n{board}", opening.len());
        }

        let previous = if self.cli.resume {
            read_records(&self.cli.output)?
        } else {
            Vec::new()
        };

        let log = if self.cli.resume {
            SolutionLog::append(&self.cli.output)?
        } else {
            SolutionLog::create(&self.cli.output)?
        };
        let mut registry = SolutionRegistry::new().with_sink(Box::new(log));
        if let Some(dir) = &self.cli.png_dir {
            let gallery = PngGallery::new(dir)?.continuing_from(previous.len());
            registry = registry.with_sink(Box::new(gallery));
        }
        registry.seed(previous.iter().cloned());

        let mut cancel = CancellationToken::new();
        if let Some(seconds) = self.cli.time_limit {
            cancel = cancel.with_deadline(Duration::from_secs(seconds));
        }

        let mut solver = Solver::new(grid, &stones)
            .with_mode(self.cli.search_mode())
            .with_cancellation(cancel)
            .with_progress(self.progress.clone());
        if let Some(last) = previous.last() {
            let marker = Board::from_signature(&board.dims(), last)?;
            info!("Resuming after {} logged solutions", previous.len());
            solver = solver.with_resume(ResumeController::new(marker));
        }

        let outcome = solver.solve(&board, &mut registry)?;

        if self.cli.print {
            print_records(&read_records(&self.cli.output)?);
        }

        Ok(RunSummary {
            outcome,
            stats: solver.stats(),
            new_solutions: registry.discovered().len(),
            total_solutions: registry.len(),
        })
    }
}

// Printing solutions is the purpose of --print
#[allow(clippy::print_stdout)]
fn print_records(records: &[String]) {
    for record in records {
        println!("{record}\n");
    }
}
