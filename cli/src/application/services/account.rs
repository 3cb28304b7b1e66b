//! Application service — deployer service-account setup.
//!
//! Creates the service account (reusing it when it already exists) and
//! generates a key file. Role assignment is left to the project operator.

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, ProgressReporter};
use crate::domain::config::AccountConfig;

/// Create the service account and write a fresh key to `config.key_file`.
///
/// An "already exists" failure from account creation is downgraded to a
/// warning: the existing account is reused and key generation proceeds.
///
/// # Errors
///
/// Returns an error when account creation fails for any other reason or
/// when key generation fails.
pub async fn setup(
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
    config: &AccountConfig,
) -> Result<()> {
    reporter.step(&format!("creating service account '{}'...", config.account_name));
    let out = runner
        .run(
            "gcloud",
            &[
                "iam",
                "service-accounts",
                "create",
                &config.account_name,
                "--project",
                &config.project_id,
                "--display-name",
                "Talk2API deployer",
            ],
        )
        .await
        .context("invoking gcloud")?;

    if out.status.success() {
        reporter.success(&format!("service account '{}' created", config.account_name));
    } else {
        let stderr = String::from_utf8_lossy(&out.stderr);
        anyhow::ensure!(
            stderr.contains("already exists") || stderr.contains("alreadyExists"),
            "Service account creation failed:\n{stderr}"
        );
        reporter.warn(&format!("service account '{}' already exists, reusing it", config.account_name));
    }

    reporter.step(&format!("generating key file {}...", config.key_file));
    let email = config.email();
    let out = runner
        .run(
            "gcloud",
            &[
                "iam",
                "service-accounts",
                "keys",
                "create",
                &config.key_file,
                "--iam-account",
                &email,
            ],
        )
        .await
        .context("invoking gcloud")?;
    anyhow::ensure!(
        out.status.success(),
        "Key generation failed:\n{}",
        String::from_utf8_lossy(&out.stderr)
    );

    reporter.success(&format!("key written to {} (keep it secret)", config.key_file));
    Ok(())
}
