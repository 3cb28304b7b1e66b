//! Application service — the end-to-end deploy pipeline.
//!
//! Strictly sequential: credentials → deploy → provision → register. Each
//! step's success is a precondition for the next and every failure is fatal.
//! No step is ever retried.

use anyhow::Result;

use crate::application::ports::{CommandRunner, ProgressReporter, RestGateway, TokenSource};
use crate::application::services::{credentials, deploy_engine, provision, register};
use crate::domain::config::DeployConfig;

/// Everything the deploy pipeline produced, for the final summary.
#[derive(Debug)]
pub struct DeployOutcome {
    pub reasoning_engine: String,
    pub provision: provision::EngineProvision,
    /// Raw registration response body, echoed by the command layer.
    pub registration_body: String,
}

/// Run the full deploy workflow against the injected ports.
///
/// # Errors
///
/// Short-circuits on the first failing step; see the individual services for
/// the error taxonomy.
pub async fn run(
    runner: &impl CommandRunner,
    tokens: &impl TokenSource,
    gateway: &impl RestGateway,
    reporter: &impl ProgressReporter,
    config: &DeployConfig,
    key_file_exists: impl Fn(&str) -> bool,
) -> Result<DeployOutcome> {
    let creds = credentials::resolve(tokens, reporter, config, key_file_exists).await?;

    let reasoning_engine =
        deploy_engine::deploy_agent(runner, gateway, reporter, config, &creds).await?;

    let provision = provision::ensure_engine(gateway, reporter, config, &creds).await?;

    let registration_body = register::register_agent(
        gateway,
        reporter,
        config,
        &creds,
        &reasoning_engine,
        provision.engine_id(),
    )
    .await?;

    Ok(DeployOutcome {
        reasoning_engine,
        provision,
        registration_body,
    })
}
