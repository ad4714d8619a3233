//! CLI entry point for the seating arrangement tool

use clap::Parser;
use seatplan::io::cli::{Cli, SeatingRunner};

fn main() -> seatplan::Result<()> {
    let cli = Cli::parse();
    let env = env_logger::Env::default().default_filter_or(cli.log_filter());
    let _ = env_logger::Builder::from_env(env).try_init();

    let runner = SeatingRunner::new(cli);
    runner.run().map(|_| ())
}
