//! Tests for the search spinner and the progress-aware logger

#[cfg(test)]
mod tests {
    use indicatif::ProgressBar;
    use log::{Level, Log, Metadata};

    use stonetile::algorithm::solver::{SearchOutcome, SearchStats};
    use stonetile::io::configuration::PROGRESS_REFRESH_NODES;
    use stonetile::io::progress::{ProgressLogger, SearchProgress, init_logging};

    fn stats(nodes: u64) -> SearchStats {
        SearchStats {
            nodes,
            pruned: 3,
            ..SearchStats::default()
        }
    }

    // Tests the message only refreshes on the node interval
    // Verified by refreshing on every node
    #[test]
    fn test_tick_refreshes_on_interval() {
        let progress = SearchProgress::hidden();

        progress.tick(&stats(1), 0);
        assert_eq!(progress.bar().message(), "");

        progress.tick(&stats(PROGRESS_REFRESH_NODES), 2);
        assert_eq!(
            progress.bar().message(),
            format!("{PROGRESS_REFRESH_NODES} nodes, 3 pruned, 2 solutions")
        );
    }

    #[test]
    fn test_solution_found_refreshes_immediately() {
        let progress = SearchProgress::hidden();
        progress.solution_found(&stats(5), 1);
        assert_eq!(progress.bar().message(), "5 nodes, 3 pruned, 1 solutions");
    }

    #[test]
    fn test_finish_reports_outcome() {
        let progress = SearchProgress::hidden();
        progress.finish(SearchOutcome::Exhausted, &stats(9), 4);

        assert!(progress.bar().is_finished());
        assert_eq!(
            progress.bar().message(),
            "search exhausted: 9 nodes, 3 pruned, 4 solutions"
        );
    }

    #[test]
    fn test_clones_share_the_bar() {
        let progress = SearchProgress::hidden();
        let clone = progress.clone();
        clone.solution_found(&stats(1), 1);
        assert_eq!(progress.bar().message(), clone.bar().message());
    }

    // Tests the logger filters by its level
    // Verified by inverting the level comparison
    #[test]
    fn test_logger_level_filter() {
        let logger = ProgressLogger::new(ProgressBar::hidden(), Level::Info);
        let warn = Metadata::builder().level(Level::Warn).target("test").build();
        let debug = Metadata::builder().level(Level::Debug).target("test").build();

        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&debug));
    }

    #[test]
    fn test_init_logging_can_run_twice() {
        let bar = ProgressBar::hidden();
        init_logging(&bar, Level::Warn);
        init_logging(&bar, Level::Warn);
        log::warn!("logged through the progress bar");
    }
}
