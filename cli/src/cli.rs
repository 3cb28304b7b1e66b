//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;
use crate::output::OutputContext;

/// Deploy the Talk2API agent and wire it into Agentspace
#[derive(Parser)]
#[command(
    name = "talk2api",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Deploy the agent to Agent Engine and register it with Agentspace
    Deploy,

    /// Create the deployer service account and generate a key file
    SetupAccount,

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if any step of the selected workflow fails. Every
    /// failure is fatal: the caller prints the error and exits non-zero.
    pub async fn run(self) -> Result<()> {
        let Cli { no_color, quiet, command } = self;
        match command {
            Command::Version => {
                commands::version::run();
                Ok(())
            }
            Command::Deploy => {
                let ctx = OutputContext::new(no_color, quiet);
                commands::deploy::run(&ctx).await
            }
            Command::SetupAccount => {
                let ctx = OutputContext::new(no_color, quiet);
                commands::setup_account::run(&ctx).await
            }
        }
    }
}
