//! Application service — conditional Agentspace engine provisioning.
//!
//! Two-state branch: when a pre-existing engine id is supplied the create
//! path is skipped entirely; otherwise a data store and an engine referencing
//! it are created with two sequential POSTs, each fatal on non-2xx. There is
//! deliberately no rollback — a store orphaned by a failed engine create is
//! reported, not deleted.

use anyhow::{Context, Result};

use crate::application::ports::{ApiAuth, ProgressReporter, RestGateway};
use crate::application::services::credentials::Credentials;
use crate::domain::config::DeployConfig;
use crate::domain::error::ApiError;
use crate::domain::identifiers::derive_resource_id;

/// Discovery Engine API endpoint.
pub const DISCOVERY_API: &str = "https://discoveryengine.googleapis.com/v1alpha";

/// Outcome of the provisioning branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineProvision {
    /// An engine id was supplied externally; no resources were created.
    Reused(String),
    /// The data store and engine were freshly created.
    Created {
        engine_id: String,
        data_store_id: String,
    },
}

impl EngineProvision {
    /// The engine id to register against, regardless of how it was obtained.
    #[must_use]
    pub fn engine_id(&self) -> &str {
        match self {
            Self::Reused(id) => id,
            Self::Created { engine_id, .. } => engine_id,
        }
    }
}

fn collection_url(project_number: &str) -> String {
    format!("{DISCOVERY_API}/projects/{project_number}/locations/global/collections/default_collection")
}

#[must_use]
pub fn data_store_url(project_number: &str, data_store_id: &str) -> String {
    format!("{}/dataStores?dataStoreId={data_store_id}", collection_url(project_number))
}

#[must_use]
pub fn engine_url(project_number: &str, engine_id: &str) -> String {
    format!("{}/engines?engineId={engine_id}", collection_url(project_number))
}

fn data_store_body(config: &DeployConfig) -> serde_json::Value {
    serde_json::json!({
        "displayName": format!("{} Data Store", config.display_name),
        "industryVertical": "GENERIC",
        "solutionTypes": ["SOLUTION_TYPE_AGENT"],
    })
}

fn engine_body(config: &DeployConfig, data_store_id: &str) -> serde_json::Value {
    serde_json::json!({
        "displayName": config.display_name,
        "dataStoreIds": [data_store_id],
        "solutionType": "SOLUTION_TYPE_AGENT",
        "appType": "APP_TYPE_INTRANET",
    })
}

/// Ensure an Agentspace engine exists, creating the backing store and the
/// engine when no pre-existing id was supplied.
///
/// # Errors
///
/// Returns [`ApiError`] with the verbatim response body on any non-2xx
/// response. A failure creating the engine after the store succeeded names
/// the orphaned store id so an operator can clean it up.
pub async fn ensure_engine(
    gateway: &impl RestGateway,
    reporter: &impl ProgressReporter,
    config: &DeployConfig,
    creds: &Credentials,
) -> Result<EngineProvision> {
    if let Some(id) = &config.existing_engine_id {
        reporter.step(&format!("using existing Agentspace engine '{id}'"));
        return Ok(EngineProvision::Reused(id.clone()));
    }

    let auth = creds.auth_for(&config.project_id);
    let base_id = derive_resource_id(&config.display_name);
    let data_store_id = format!("{base_id}-datastore");
    let engine_id = base_id;

    create_data_store(gateway, reporter, config, creds, &auth, &data_store_id).await?;
    create_engine(gateway, reporter, config, creds, &auth, &engine_id, &data_store_id).await?;

    Ok(EngineProvision::Created {
        engine_id,
        data_store_id,
    })
}

async fn create_data_store(
    gateway: &impl RestGateway,
    reporter: &impl ProgressReporter,
    config: &DeployConfig,
    creds: &Credentials,
    auth: &ApiAuth,
    data_store_id: &str,
) -> Result<()> {
    reporter.step(&format!("creating data store '{data_store_id}'..."));
    let response = gateway
        .post_json(
            &data_store_url(&creds.project_number, data_store_id),
            auth,
            &data_store_body(config),
        )
        .await
        .context("creating data store")?;
    if !response.is_success() {
        return Err(ApiError {
            operation: "Data store creation",
            status: response.status,
            body: response.body,
        }
        .into());
    }
    reporter.success(&format!("data store '{data_store_id}' created"));
    Ok(())
}

async fn create_engine(
    gateway: &impl RestGateway,
    reporter: &impl ProgressReporter,
    config: &DeployConfig,
    creds: &Credentials,
    auth: &ApiAuth,
    engine_id: &str,
    data_store_id: &str,
) -> Result<()> {
    reporter.step(&format!("creating Agentspace engine '{engine_id}'..."));
    let response = gateway
        .post_json(
            &engine_url(&creds.project_number, engine_id),
            auth,
            &engine_body(config, data_store_id),
        )
        .await
        .context("creating engine")?;
    if !response.is_success() {
        return Err(anyhow::Error::from(ApiError {
            operation: "Engine creation",
            status: response.status,
            body: response.body,
        })
        .context(format!(
            "engine creation failed; data store '{data_store_id}' was created and is left behind"
        )));
    }
    reporter.success(&format!("engine '{engine_id}' created"));
    Ok(())
}
