//! Command-line entry point for WSTF readability scoring

use clap::Parser;
use wstf_cli::commands::Commands;

/// Wiener Sachtextformel readability scoring for German text
#[derive(Debug, Parser)]
#[command(name = "wstf", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
