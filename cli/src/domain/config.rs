//! Domain types and validators for deployment configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access. The `.env`
//! file itself is loaded into the process environment by the infra layer;
//! this module only validates and assembles the result.

use anyhow::Result;

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

/// Keys that must be present (and non-empty) before any network call.
pub const REQUIRED_KEYS: &[&str] = &[
    "GOOGLE_CLOUD_PROJECT",
    "GOOGLE_CLOUD_LOCATION",
    "STAGING_BUCKET",
    "AGENT_DISPLAY_NAME",
];

/// Keys that are recognized but optional.
pub const OPTIONAL_KEYS: &[&str] = &[
    "AGENT_DESCRIPTION",
    "AGENT_SOURCE_DIR",
    "AGENTSPACE_ENGINE_ID",
    "GOOGLE_APPLICATION_CREDENTIALS",
    "SERVICE_ACCOUNT_NAME",
];

const DEFAULT_AGENT_SOURCE_DIR: &str = "agent";
const DEFAULT_SERVICE_ACCOUNT_NAME: &str = "talk2api-deployer";
const DEFAULT_KEY_FILE: &str = "talk2api-sa-key.json";

// ── Deploy config ────────────────────────────────────────────────────────────

/// Everything the deploy workflow needs, resolved up front.
///
/// Construction fails fast on the first missing required key so the process
/// aborts before any credential resolution or HTTP traffic.
#[derive(Debug, Clone)]
pub struct DeployConfig {
    /// Google Cloud project id (not number — that is resolved later).
    pub project_id: String,
    /// Agent Engine region, e.g. `us-central1`.
    pub location: String,
    /// Cloud Storage staging bucket, without the `gs://` prefix.
    pub staging_bucket: String,
    /// Display name for the deployed agent and derived resources.
    pub display_name: String,
    /// Description shown in Agentspace. Empty string when unset.
    pub description: String,
    /// Local directory holding the agent source passed to the deploy tool.
    pub agent_source_dir: String,
    /// Pre-existing Agentspace engine id. When set, provisioning is skipped.
    pub existing_engine_id: Option<String>,
    /// Service-account key file path. When the file exists it is activated
    /// (best effort) before requesting a token.
    pub credentials_file: Option<String>,
}

impl DeployConfig {
    /// Assemble the deploy configuration from a key lookup (normally the
    /// process environment after the `.env` file has been merged in).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] for the first absent required key
    /// and [`ConfigError::EmptyValue`] when a required key is set but blank.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &'static str| -> Result<String> {
            let value = lookup(key).ok_or(ConfigError::MissingKey(key))?;
            let value = value.trim().to_string();
            if value.is_empty() {
                return Err(ConfigError::EmptyValue { key }.into());
            }
            Ok(value)
        };
        let optional = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Ok(Self {
            project_id: required("GOOGLE_CLOUD_PROJECT")?,
            location: required("GOOGLE_CLOUD_LOCATION")?,
            staging_bucket: required("STAGING_BUCKET")?
                .trim_start_matches("gs://")
                .to_string(),
            display_name: required("AGENT_DISPLAY_NAME")?,
            description: optional("AGENT_DESCRIPTION").unwrap_or_default(),
            agent_source_dir: optional("AGENT_SOURCE_DIR")
                .unwrap_or_else(|| DEFAULT_AGENT_SOURCE_DIR.to_string()),
            existing_engine_id: optional("AGENTSPACE_ENGINE_ID"),
            credentials_file: optional("GOOGLE_APPLICATION_CREDENTIALS"),
        })
    }
}

// ── Account config ───────────────────────────────────────────────────────────

/// Configuration for the `setup-account` workflow.
#[derive(Debug, Clone)]
pub struct AccountConfig {
    pub project_id: String,
    /// Short service-account name (the part before the `@`).
    pub account_name: String,
    /// Where the generated key file is written.
    pub key_file: String,
}

impl AccountConfig {
    /// Assemble the account configuration from a key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error when `GOOGLE_CLOUD_PROJECT` is missing or empty.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let project_id = lookup("GOOGLE_CLOUD_PROJECT")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingKey("GOOGLE_CLOUD_PROJECT"))?;
        let account_name = lookup("SERVICE_ACCOUNT_NAME")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_SERVICE_ACCOUNT_NAME.to_string());
        let key_file = lookup("GOOGLE_APPLICATION_CREDENTIALS")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_KEY_FILE.to_string());

        Ok(Self {
            project_id,
            account_name,
            key_file,
        })
    }

    /// Full email of the service account.
    #[must_use]
    pub fn email(&self) -> String {
        format!("{}@{}.iam.gserviceaccount.com", self.account_name, self.project_id)
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
