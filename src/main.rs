// CLI entry point: fetch one day's input into the local cache.

use clap::Parser;

use aocache::{AocClient, Result};

/// Download and cache an Advent of Code puzzle input
#[derive(Parser, Debug)]
#[command(name = "aocache")]
#[command(about = "Download and cache Advent of Code puzzle inputs")]
#[command(version)]
struct Cli {
    /// Puzzle year
    #[arg(default_value_t = 2015)]
    year: u32,

    /// Puzzle day
    #[arg(default_value_t = 1)]
    day: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("Fetching {} day {}", cli.year, cli.day);

    let client = AocClient::from_env();
    client.input(cli.year, cli.day, false).await?;

    Ok(())
}
