//! CLI entry point for the stone tiling solver

use clap::Parser;
use stonetile::io::cli::{Cli, SolveRunner};

fn main() -> stonetile::Result<()> {
    let cli = Cli::parse();
    let runner = SolveRunner::new(cli);
    runner.run().map(|_| ())
}
