//! Search spinner and the log backend that writes around it

use std::sync::LazyLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use log::{Level, Log, Metadata, Record};

use crate::algorithm::solver::{SearchOutcome, SearchStats};
use crate::io::configuration::{PROGRESS_REFRESH_NODES, PROGRESS_TICK_MS};

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Spinner showing visited nodes, pruned branches and solutions found
///
/// Cloning shares the underlying bar.
#[derive(Debug, Clone)]
pub struct SearchProgress {
    bar: ProgressBar,
}

impl Default for SearchProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchProgress {
    /// Visible spinner on stderr
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
        Self { bar }
    }

    /// Spinner that never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Underlying progress bar
    pub const fn bar(&self) -> &ProgressBar {
        &self.bar
    }

    fn describe(stats: &SearchStats, solutions: usize) -> String {
        format!(
            "{} nodes, {} pruned, {solutions} solutions",
            stats.nodes, stats.pruned
        )
    }

    /// Refresh the message every few thousand nodes
    pub fn tick(&self, stats: &SearchStats, solutions: usize) {
        if stats.nodes.is_multiple_of(PROGRESS_REFRESH_NODES) {
            self.bar.set_message(Self::describe(stats, solutions));
        }
    }

    /// Refresh the message right away after a new solution
    pub fn solution_found(&self, stats: &SearchStats, solutions: usize) {
        self.bar.set_message(Self::describe(stats, solutions));
    }

    /// Stop the spinner with a final summary
    pub fn finish(&self, outcome: SearchOutcome, stats: &SearchStats, solutions: usize) {
        self.bar
            .finish_with_message(format!("{outcome}: {}", Self::describe(stats, solutions)));
    }
}

/// `log` backend writing to stderr without tearing the spinner
pub struct ProgressLogger {
    bar: ProgressBar,
    level: Level,
}

impl ProgressLogger {
    /// Logger printing records up to `level`
    pub const fn new(bar: ProgressBar, level: Level) -> Self {
        Self { bar, level }
    }
}

impl Log for ProgressLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    // The logger is the one place allowed to write diagnostics to stderr
    #[allow(clippy::print_stderr)]
    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            self.bar
                .suspend(|| eprintln!("[{:<5}] {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

/// Install a [`ProgressLogger`] as the global logger
///
/// A logger installed earlier stays in place; only the maximum level changes.
pub fn init_logging(bar: &ProgressBar, level: Level) {
    let logger = ProgressLogger::new(bar.clone(), level);
    if log::set_boxed_logger(Box::new(logger)).is_err() {
        log::debug!("Logger already installed");
    }
    log::set_max_level(level.to_level_filter());
}
