//! Application service — Agent Engine deployment use-case.
//!
//! Invokes the external `adk` deploy tool, streams and buffers its output,
//! and scrapes the reasoning-engine resource name from the transcript. When
//! scraping fails, falls back to one list query filtered by display name.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::application::ports::{CommandRunner, ProgressReporter, RestGateway};
use crate::application::services::credentials::Credentials;
use crate::domain::config::DeployConfig;
use crate::domain::error::{ApiError, DeployError};
use crate::domain::identifiers::extract_reasoning_engine;

/// The external deployment tool.
pub const DEPLOY_TOOL: &str = "adk";

/// Regional Vertex AI endpoint listing reasoning engines by display name.
#[must_use]
pub fn list_engines_url(config: &DeployConfig) -> String {
    format!(
        "https://{loc}-aiplatform.googleapis.com/v1/projects/{project}/locations/{loc}/reasoningEngines?filter=display_name=\"{name}\"",
        loc = config.location,
        project = config.project_id,
        name = config.display_name,
    )
}

/// Deploy the agent and return the full reasoning-engine resource name.
///
/// The tool's combined output is echoed to the console while being buffered;
/// afterwards the resource name is scraped from the transcript. No retries:
/// the tool is invoked exactly once and the fallback list query, when
/// needed, exactly once.
///
/// # Errors
///
/// Returns [`DeployError::ToolFailed`] when the tool exits non-zero,
/// [`ApiError`] when the fallback list call itself fails, and
/// [`DeployError::EngineNotFound`] when the transcript has no resource name
/// and the list response holds no match.
pub async fn deploy_agent(
    runner: &impl CommandRunner,
    gateway: &impl RestGateway,
    reporter: &impl ProgressReporter,
    config: &DeployConfig,
    creds: &Credentials,
) -> Result<String> {
    reporter.step(&format!("deploying '{}' to Agent Engine...", config.display_name));

    let staging_bucket = format!("gs://{}", config.staging_bucket);
    let args = [
        "deploy",
        "agent_engine",
        "--project",
        config.project_id.as_str(),
        "--region",
        config.location.as_str(),
        "--staging_bucket",
        staging_bucket.as_str(),
        "--display_name",
        config.display_name.as_str(),
        config.agent_source_dir.as_str(),
    ];

    let run = runner
        .run_streaming(DEPLOY_TOOL, &args)
        .await
        .with_context(|| format!("invoking {DEPLOY_TOOL}"))?;
    if !run.succeeded() {
        return Err(DeployError::ToolFailed {
            tool: DEPLOY_TOOL.to_string(),
            code: run.exit_code,
        }
        .into());
    }

    if let Some(name) = extract_reasoning_engine(&run.transcript) {
        reporter.success(&format!("deployed reasoning engine {name}"));
        return Ok(name);
    }

    // The tool printed no resource name; ask the list endpoint once.
    reporter.warn("resource name not found in deploy output, querying list endpoint...");
    let response = gateway
        .get(&list_engines_url(config), &creds.auth_for(&config.project_id))
        .await
        .context("listing reasoning engines")?;

    if !response.is_success() {
        return Err(ApiError {
            operation: "reasoning engine list",
            status: response.status,
            body: response.body,
        }
        .into());
    }

    if let Some(name) = first_engine_name(&response.body) {
        reporter.success(&format!("found reasoning engine {name}"));
        return Ok(name);
    }

    Err(DeployError::EngineNotFound {
        display_name: config.display_name.clone(),
    }
    .into())
}

#[derive(Deserialize)]
struct EngineList {
    #[serde(default, rename = "reasoningEngines")]
    reasoning_engines: Vec<EngineRef>,
}

#[derive(Deserialize)]
struct EngineRef {
    name: String,
}

/// Pull the first `reasoningEngines[].name` out of a list response body.
fn first_engine_name(body: &str) -> Option<String> {
    let parsed: EngineList = serde_json::from_str(body).ok()?;
    parsed.reasoning_engines.into_iter().next().map(|e| e.name)
}
