//! Deploy command — wires production infrastructure into the deploy pipeline.

use anyhow::Result;

use crate::application::services::deploy_flow;
use crate::application::services::provision::EngineProvision;
use crate::domain::config::DeployConfig;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::env_file;
use crate::infra::gcloud::GcloudTokenSource;
use crate::infra::http::ReqwestGateway;
use crate::output::OutputContext;
use crate::output::reporter::TerminalReporter;

/// Entry point for `talk2api deploy`.
///
/// # Errors
///
/// Returns an error on the first failing step: missing configuration,
/// credential resolution, the deploy tool, provisioning, or registration.
pub async fn run(ctx: &OutputContext) -> Result<()> {
    env_file::load()?;
    let config = DeployConfig::from_lookup(|key| std::env::var(key).ok())?;

    ctx.header(&format!("Deploying {}", config.display_name));

    let runner = TokioCommandRunner::default();
    let tokens = GcloudTokenSource::new(TokioCommandRunner::default());
    let gateway = ReqwestGateway::new()?;
    let reporter = TerminalReporter::new(ctx);

    let outcome = deploy_flow::run(&runner, &tokens, &gateway, &reporter, &config, |path| {
        std::path::Path::new(path).exists()
    })
    .await?;

    ctx.header("Deployment complete");
    ctx.kv("reasoning engine", &outcome.reasoning_engine);
    match &outcome.provision {
        EngineProvision::Reused(id) => ctx.kv("agentspace engine", &format!("{id} (existing)")),
        EngineProvision::Created {
            engine_id,
            data_store_id,
        } => {
            ctx.kv("agentspace engine", engine_id);
            ctx.kv("data store", data_store_id);
        }
    }
    println!("{}", pretty_body(&outcome.registration_body));
    Ok(())
}

/// Pretty-print the body when it parses as JSON, otherwise echo it raw.
#[must_use]
pub fn pretty_body(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string()),
        Err(_) => body.to_string(),
    }
}
