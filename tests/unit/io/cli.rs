//! Tests for command-line parsing and run orchestration

#[cfg(test)]
mod tests {
    use clap::Parser;
    use seatplan::SeatError;
    use seatplan::io::cli::{Cli, RunOutcome, SeatingRunner};
    use seatplan::io::configuration::{
        DEFAULT_LOG_FILTER, FOUND_MESSAGE, IMPOSSIBLE_MESSAGE, VERBOSE_LOG_FILTER,
    };
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn run(args: &[&str]) -> (Result<RunOutcome, SeatError>, String) {
        let cli = Cli::parse_from(args.iter().copied());
        let runner = SeatingRunner::new(cli);
        let mut out = Vec::new();
        let result = runner.run_to(&mut out);
        (result, String::from_utf8_lossy(&out).into_owned())
    }

    fn plan_file(content: &str) -> NamedTempFile {
        let Ok(mut file) = NamedTempFile::new() else {
            unreachable!("Temp file should be creatable");
        };
        assert!(file.write_all(content.as_bytes()).is_ok());
        file
    }

    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["seatplan"]);

        assert_eq!(cli.plan, None);
        assert!(!cli.quiet);
        assert!(!cli.verbose);
        assert!(!cli.stats);
        assert!(cli.should_show_progress());
        assert_eq!(cli.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from(["seatplan", "office.plan", "--quiet", "--verbose", "--stats"]);

        assert_eq!(cli.plan, Some(PathBuf::from("office.plan")));
        assert!(!cli.should_show_progress());
        assert_eq!(cli.log_filter(), VERBOSE_LOG_FILTER);
        assert!(cli.stats);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["seatplan", "-q", "-v", "-s"]);

        assert!(cli.quiet);
        assert!(cli.verbose);
        assert!(cli.stats);
    }

    // Without a plan file the demonstration plan is arranged
    #[test]
    fn test_demo_run_prints_arrangement() {
        let (result, output) = run(&["seatplan", "--quiet"]);

        assert!(matches!(result, Ok(RunOutcome::Arranged)));
        assert_eq!(
            output,
            format!(
                "{FOUND_MESSAGE}\nAlice     Bob       Charlie   \nDiana     Eve       [ ]       \n"
            )
        );
    }

    #[test]
    fn test_impossible_plan_is_not_an_error() {
        let file = plan_file("grid 1 2\npeople A B\nseparate A B\n");
        let path = file.path().to_string_lossy().into_owned();

        let (result, output) = run(&["seatplan", "--quiet", path.as_str()]);

        assert!(matches!(result, Ok(RunOutcome::Impossible)));
        assert_eq!(output, format!("{IMPOSSIBLE_MESSAGE}\n"));
    }

    #[test]
    fn test_stats_flag_appends_counters() {
        let (result, output) = run(&["seatplan", "--quiet", "--stats"]);

        assert!(result.is_ok());
        assert!(output.contains("Search statistics:"));
        assert!(output.contains("Placements tried:   5"));
    }

    // Invalid plans fail before anything is printed
    #[test]
    fn test_invalid_plan_returns_error() {
        let file = plan_file("grid 1 1\npeople A B\n");
        let path = file.path().to_string_lossy().into_owned();

        let (result, output) = run(&["seatplan", "-q", path.as_str()]);

        assert!(matches!(result, Err(SeatError::InsufficientCapacity { .. })));
        assert!(output.is_empty());
    }

    #[test]
    fn test_load_plan_defaults_to_demo() {
        let cli = Cli::parse_from(["seatplan"]);

        let Ok(plan) = cli.load_plan() else {
            unreachable!("Demo plan should load");
        };
        assert_eq!(plan.roster().len(), 5);
        assert_eq!((plan.rows(), plan.cols()), (2, 3));
    }
}
