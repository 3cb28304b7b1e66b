//! Setup-account command — create the deployer service account and key file.

use anyhow::{Context, Result};

use crate::application::services::account;
use crate::domain::config::AccountConfig;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::env_file;
use crate::output::OutputContext;
use crate::output::reporter::TerminalReporter;

/// Entry point for `talk2api setup-account`.
///
/// # Errors
///
/// Returns an error when configuration is missing or any gcloud invocation
/// fails (other than the account already existing).
pub async fn run(ctx: &OutputContext) -> Result<()> {
    env_file::load()?;
    let config = AccountConfig::from_lookup(|key| std::env::var(key).ok())?;

    ctx.header(&format!("Setting up {}", config.email()));

    let runner = TokioCommandRunner::default();
    let reporter = TerminalReporter::new(ctx);
    account::setup(&runner, &reporter, &config).await?;

    // The key file is a credential; keep it owner-readable only.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&config.key_file, std::fs::Permissions::from_mode(0o600))
            .with_context(|| format!("cannot set permissions on {}", config.key_file))?;
    }

    ctx.kv("key file", &config.key_file);
    ctx.kv("next", "set GOOGLE_APPLICATION_CREDENTIALS to this path and run 'talk2api deploy'");
    Ok(())
}
