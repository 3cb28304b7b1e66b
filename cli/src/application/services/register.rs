//! Application service — Agentspace agent registration.
//!
//! One POST associating the deployed reasoning engine with the assistant
//! engine. Any 2xx succeeds and the response body is returned for echoing;
//! any non-2xx is fatal with the body preserved unchanged.

use anyhow::{Context, Result};

use crate::application::ports::{ProgressReporter, RestGateway};
use crate::application::services::credentials::Credentials;
use crate::application::services::provision::DISCOVERY_API;
use crate::domain::config::DeployConfig;
use crate::domain::error::ApiError;

#[must_use]
pub fn register_url(project_number: &str, engine_id: &str) -> String {
    format!(
        "{DISCOVERY_API}/projects/{project_number}/locations/global/collections/default_collection/engines/{engine_id}/assistants/default_assistant/agents"
    )
}

fn register_body(config: &DeployConfig, reasoning_engine: &str) -> serde_json::Value {
    serde_json::json!({
        "displayName": config.display_name,
        "description": config.description,
        "adk_agent_definition": {
            "tool_settings": {
                "tool_description": config.description,
            },
            "provisioned_reasoning_engine": {
                "reasoning_engine": reasoning_engine,
            },
        },
    })
}

/// Register the deployed agent with the assistant engine.
///
/// Returns the raw response body on success so the caller can echo it
/// (pretty-printed when it parses as JSON).
///
/// # Errors
///
/// Returns [`ApiError`] carrying the verbatim response body on any non-2xx
/// status.
pub async fn register_agent(
    gateway: &impl RestGateway,
    reporter: &impl ProgressReporter,
    config: &DeployConfig,
    creds: &Credentials,
    reasoning_engine: &str,
    engine_id: &str,
) -> Result<String> {
    reporter.step(&format!(
        "registering '{}' with Agentspace engine '{engine_id}'...",
        config.display_name
    ));

    let response = gateway
        .post_json(
            &register_url(&creds.project_number, engine_id),
            &creds.auth_for(&config.project_id),
            &register_body(config, reasoning_engine),
        )
        .await
        .context("registering agent")?;

    if !response.is_success() {
        return Err(ApiError {
            operation: "Agent registration",
            status: response.status,
            body: response.body,
        }
        .into());
    }

    reporter.success("agent registered");
    Ok(response.body)
}
