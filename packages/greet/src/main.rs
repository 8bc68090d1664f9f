use anyhow::Result;
use clap::Parser;

use greet::cli::commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
