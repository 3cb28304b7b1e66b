//! Shared test helpers: output constructors and a canned deploy config.

#![allow(dead_code)]

use std::process::{ExitStatus, Output};

use talk2api_cli::domain::config::DeployConfig;

// ── Cross-platform ExitStatus construction ───────────────────────────────────

/// Build an `ExitStatus` from a logical exit code (0 = success, non-zero = failure).
///
/// On Unix the raw wait-status encodes the exit code in bits 8–15, so we shift.
/// On Windows `ExitStatusExt::from_raw` takes the exit code directly.
#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    #[allow(clippy::cast_sign_loss)]
    ExitStatus::from_raw(code as u32)
}

// ── Output constructors ──────────────────────────────────────────────────────

pub fn ok_output(stdout: &[u8]) -> Output {
    Output {
        status: exit_status(0),
        stdout: stdout.to_vec(),
        stderr: Vec::new(),
    }
}

pub fn err_output(code: i32, stderr: &[u8]) -> Output {
    Output {
        status: exit_status(code),
        stdout: Vec::new(),
        stderr: stderr.to_vec(),
    }
}

// ── Config fixture ───────────────────────────────────────────────────────────

pub fn deploy_config() -> DeployConfig {
    DeployConfig {
        project_id: "acme-prod".to_string(),
        location: "us-central1".to_string(),
        staging_bucket: "acme-staging".to_string(),
        display_name: "Talk2API Assistant".to_string(),
        description: "Discovers and executes APIs".to_string(),
        agent_source_dir: "agent".to_string(),
        existing_engine_id: None,
        credentials_file: None,
    }
}

/// A deploy output transcript containing a reasoning-engine resource name.
pub const DEPLOY_TRANSCRIPT: &str = "\
Uploading agent sources to gs://acme-staging...\n\
Creating AgentEngine\n\
AgentEngine created. Resource name: projects/814273519841/locations/us-central1/reasoningEngines/777\n";

pub const REASONING_ENGINE: &str =
    "projects/814273519841/locations/us-central1/reasoningEngines/777";
