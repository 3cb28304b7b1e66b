//! Infrastructure implementation of the `TokenSource` port.
//!
//! Shells out to the ambient `gcloud` CLI. The CLI is already the mandatory
//! prerequisite for the deploy tool, so no token-exchange protocol is
//! reimplemented here.

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, TokenSource};

/// `TokenSource` backed by the `gcloud` CLI.
pub struct GcloudTokenSource<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> GcloudTokenSource<R> {
    #[must_use]
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    async fn capture(&self, args: &[&str]) -> Result<String> {
        let out = self.runner.run("gcloud", args).await.context("invoking gcloud")?;
        anyhow::ensure!(
            out.status.success(),
            "gcloud {} failed:\n{}",
            args.join(" "),
            String::from_utf8_lossy(&out.stderr)
        );
        Ok(String::from_utf8_lossy(&out.stdout).trim().to_string())
    }
}

impl<R: CommandRunner> TokenSource for GcloudTokenSource<R> {
    async fn activate_key_file(&self, key_file: &str) -> Result<()> {
        self.capture(&[
            "auth",
            "activate-service-account",
            "--key-file",
            key_file,
        ])
        .await
        .map(|_| ())
    }

    async fn access_token(&self) -> Result<String> {
        self.capture(&["auth", "print-access-token"]).await
    }

    async fn project_number(&self, project_id: &str) -> Result<String> {
        self.capture(&[
            "projects",
            "describe",
            project_id,
            "--format",
            "value(projectNumber)",
        ])
        .await
    }
}
