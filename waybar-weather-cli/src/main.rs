//! Binary crate for the `waybar-weather` status-bar module.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Loading optional settings
//! - Writing the report JSON to stdout (logs go to stderr)

use clap::Parser;
use env_logger::Env;

mod cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
