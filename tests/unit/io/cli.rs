//! Tests for command-line parsing and run orchestration

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use clap::Parser;
    use log::Level;

    use stonetile::algorithm::solver::{SearchMode, SearchOutcome};
    use stonetile::io::cli::{Cli, GridKind, SolveRunner};
    use stonetile::io::solution_log::read_records;

    const OPENING_ARGS: [&str; 18] = [
        "-p",
        "pink:4:0,0",
        "-p",
        "yellow:1:1,0",
        "-p",
        "orange:3:4,0",
        "-p",
        "blue:-1:6,0",
        "-p",
        "red:1:4,2",
        "-p",
        "lime:4:6,3",
        "-p",
        "cyan:-3:3,3",
        "-p",
        "green:2:2,1",
        "-p",
        "lightblue:3:0,2",
    ];

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("stonetile").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    fn documented_run(output: &Path, extra: &[&str]) -> Cli {
        let output = output.to_string_lossy().to_string();
        let mut args: Vec<&str> = vec!["-q", "-o", &output];
        args.extend(OPENING_ARGS);
        args.extend(extra);
        parse(&args)
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.grid, GridKind::Planar);
        assert_eq!((cli.width, cli.height, cli.base), (11, 5, 5));
        assert_eq!(cli.output, Path::new("solutions.txt"));
        assert!(cli.placements.is_empty());
        assert!(!cli.first && !cli.resume && !cli.print);
        assert_eq!(cli.search_mode(), SearchMode::All);
        assert!(cli.should_show_progress());
    }

    #[test]
    fn test_pyramid_arguments() {
        let cli = parse(&[
            "--grid",
            "pyramid",
            "-b",
            "3",
            "--first",
            "-t",
            "30",
            "--png-dir",
            "images",
        ]);
        assert_eq!(cli.grid, GridKind::Pyramid);
        assert_eq!(cli.base, 3);
        assert_eq!(cli.search_mode(), SearchMode::First);
        assert_eq!(cli.time_limit, Some(30));
        assert_eq!(cli.png_dir.as_deref(), Some(Path::new("images")));
    }

    // Tests verbosity flags map onto log levels
    // Verified by letting quiet keep info output
    #[test]
    fn test_log_levels() {
        assert_eq!(parse(&[]).log_level(), Level::Info);
        assert_eq!(parse(&["-v"]).log_level(), Level::Debug);
        assert_eq!(parse(&["-vvv"]).log_level(), Level::Trace);
        assert_eq!(parse(&["-q", "-v"]).log_level(), Level::Warn);
    }

    #[test]
    fn test_rejects_unknown_grid() {
        assert!(Cli::try_parse_from(["stonetile", "--grid", "hexagon"]).is_err());
    }

    // Tests a documented opening run logs its single tiling
    // Verified by truncating the log on resume
    #[test]
    fn test_run_and_resume_documented_opening() {
        let dir = tempfile::tempdir().expect("temp dir");
        let output = dir.path().join("solutions.txt");

        let summary = SolveRunner::new(documented_run(&output, &[]))
            .run()
            .expect("run succeeds");
        assert_eq!(summary.outcome, SearchOutcome::Exhausted);
        assert_eq!(summary.new_solutions, 1);
        assert_eq!(summary.total_solutions, 1);
        assert_eq!(read_records(&output).expect("log").len(), 1);

        let resumed = SolveRunner::new(documented_run(&output, &["--resume"]))
            .run()
            .expect("resume succeeds");
        assert_eq!(resumed.new_solutions, 0);
        assert_eq!(resumed.total_solutions, 1);
        assert_eq!(resumed.stats.duplicates, 1);
        assert_eq!(read_records(&output).expect("log").len(), 1);
    }

    #[test]
    fn test_run_writes_png_gallery() {
        let dir = tempfile::tempdir().expect("temp dir");
        let output = dir.path().join("solutions.txt");
        let images = dir.path().join("images");
        let images_arg = images.to_string_lossy().to_string();

        let summary = SolveRunner::new(documented_run(
            &output,
            &["--first", "--png-dir", &images_arg],
        ))
        .run()
        .expect("run succeeds");

        assert_eq!(summary.outcome, SearchOutcome::FirstFound);
        assert!(images.join("solution_0001.png").exists());
        assert_eq!(fs::read_dir(&images).expect("image dir").count(), 1);
    }

    #[test]
    fn test_run_reports_bad_placement() {
        let dir = tempfile::tempdir().expect("temp dir");
        let output = dir.path().join("solutions.txt");
        let output_arg = output.to_string_lossy().to_string();

        let cli = parse(&["-q", "-o", &output_arg, "-p", "pink:4:10,4"]);
        assert!(SolveRunner::new(cli).run().is_err());
    }
}
