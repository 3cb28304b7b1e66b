//! Application service — credential resolution use-case.
//!
//! Selects between a service-account key file and the ambient authenticated
//! identity, then produces the bearer token and project number threaded
//! through every subsequent step.

use anyhow::{Context, Result};

use crate::application::ports::{ApiAuth, ProgressReporter, TokenSource};
use crate::domain::config::DeployConfig;

/// Resolved credentials for the management APIs.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub access_token: String,
    pub project_number: String,
}

impl Credentials {
    /// Authorization material for API calls, scoped to the given project id.
    #[must_use]
    pub fn auth_for(&self, project_id: &str) -> ApiAuth {
        ApiAuth {
            bearer_token: self.access_token.clone(),
            user_project: project_id.to_string(),
        }
    }
}

/// Resolve credentials for the deploy workflow.
///
/// When a key file is configured and exists, it is activated best-effort:
/// a failed activation is reported as a warning and the ambient identity is
/// used instead. Token and project-number resolution are fatal on failure.
///
/// # Errors
///
/// Returns an error when no bearer token can be obtained or the project
/// number cannot be resolved.
pub async fn resolve(
    tokens: &impl TokenSource,
    reporter: &impl ProgressReporter,
    config: &DeployConfig,
    key_file_exists: impl Fn(&str) -> bool,
) -> Result<Credentials> {
    match &config.credentials_file {
        Some(path) if key_file_exists(path) => {
            reporter.step(&format!("activating service account key {path}..."));
            if let Err(e) = tokens.activate_key_file(path).await {
                reporter.warn(&format!("key activation failed ({e}), using active identity"));
            }
        }
        Some(path) => {
            reporter.warn(&format!("credentials file {path} not found, using active identity"));
        }
        None => reporter.step("using active gcloud identity..."),
    }

    let access_token = tokens
        .access_token()
        .await
        .context("obtaining access token (is gcloud authenticated?)")?;
    anyhow::ensure!(!access_token.trim().is_empty(), "gcloud returned an empty access token");

    let project_number = tokens
        .project_number(&config.project_id)
        .await
        .with_context(|| format!("resolving project number for '{}'", config.project_id))?;
    anyhow::ensure!(
        !project_number.trim().is_empty(),
        "project number for '{}' is empty",
        config.project_id
    );

    reporter.success(&format!("authenticated against project {}", config.project_id));
    Ok(Credentials {
        access_token: access_token.trim().to_string(),
        project_number: project_number.trim().to_string(),
    })
}
