//! Binary crate for the `onecall` command-line tool.
//!
//! This crate focuses on:
//! - Parsing and validating CLI arguments
//! - Building requests through the core factories
//! - Human-friendly output formatting

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
