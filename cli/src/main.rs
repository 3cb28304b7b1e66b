//! Talk2API CLI - deploy the agent and wire it into Agentspace

#![cfg_attr(test, allow(clippy::expect_used))]

use clap::Parser;

use talk2api_cli::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli.run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
