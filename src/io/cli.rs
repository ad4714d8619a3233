//! Command-line interface for arranging a plan file or the built-in demonstration

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use crate::algorithm::monitor::NoOpMonitor;
use crate::algorithm::planner::SeatingPlan;
use crate::io::configuration::{
    DEFAULT_LOG_FILTER, FOUND_MESSAGE, IMPOSSIBLE_MESSAGE, VERBOSE_LOG_FILTER,
};
use crate::io::error::{Result, SeatError};
use crate::io::plan_file::PlanFile;
use crate::io::progress::SearchProgress;

#[derive(Parser, Debug)]
#[command(name = "seatplan")]
#[command(
    author,
    version,
    about = "Seat people on a grid so that friends sit together and rivals sit apart"
)]
/// Command-line arguments for the seating tool
pub struct Cli {
    /// Plan file to arrange; the built-in demonstration is used when omitted
    #[arg(value_name = "PLAN")]
    pub plan: Option<PathBuf>,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Log search milestones (overridden by `RUST_LOG`)
    #[arg(short, long)]
    pub verbose: bool,

    /// Print search counters after the outcome
    #[arg(short, long)]
    pub stats: bool,
}

impl Cli {
    /// Check if the progress spinner should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log filter used when `RUST_LOG` is unset
    pub const fn log_filter(&self) -> &'static str {
        if self.verbose {
            VERBOSE_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        }
    }

    /// Load the requested plan, or the demonstration when none is given
    ///
    /// # Errors
    ///
    /// Returns an error if the plan file cannot be read or parsed, or if its
    /// contents fail plan validation
    pub fn load_plan(&self) -> Result<SeatingPlan> {
        let plan_file = match &self.plan {
            Some(path) => {
                info!("loading plan from {}", path.display());
                PlanFile::from_path(path)?
            }
            None => PlanFile::demo(),
        };
        plan_file.into_plan()
    }
}

/// Outcome of a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// An arrangement was found and printed
    Arranged,
    /// No arrangement satisfies the constraints
    Impossible,
}

/// Orchestrates loading, arranging and printing a plan
pub struct SeatingRunner {
    cli: Cli,
}

impl SeatingRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load, arrange and print to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if the plan cannot be loaded or stdout cannot be written
    pub fn run(&self) -> Result<RunOutcome> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.run_to(&mut handle)
    }

    /// Load, arrange and write the report to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if the plan cannot be loaded or `out` cannot be written
    pub fn run_to(&self, out: &mut impl Write) -> Result<RunOutcome> {
        let mut plan = self.cli.load_plan()?;

        let found = if self.cli.should_show_progress() {
            plan.arrange_with(SearchProgress::new())
        } else {
            plan.arrange_with(NoOpMonitor)
        };

        Self::write_report(&plan, found, self.cli.stats, out).map_err(|source| {
            SeatError::FileSystem {
                path: PathBuf::from("<stdout>"),
                operation: "write report",
                source,
            }
        })?;

        Ok(if found {
            RunOutcome::Arranged
        } else {
            RunOutcome::Impossible
        })
    }

    fn write_report(
        plan: &SeatingPlan,
        found: bool,
        show_stats: bool,
        out: &mut impl Write,
    ) -> std::io::Result<()> {
        if found {
            writeln!(out, "{FOUND_MESSAGE}")?;
            write!(out, "{plan}")?;
        } else {
            writeln!(out, "{IMPOSSIBLE_MESSAGE}")?;
        }

        if show_stats && let Some(stats) = plan.last_stats() {
            writeln!(out, "{stats}")?;
        }

        out.flush()
    }
}
