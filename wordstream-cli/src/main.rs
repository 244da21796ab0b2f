//! Wordstream command-line entry point

use anyhow::Result;
use clap::Parser;
use wordstream_cli::commands::Commands;

/// Streaming word statistics
#[derive(Debug, Parser)]
#[command(name = "wordstream", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(cli.command.execute())
}
