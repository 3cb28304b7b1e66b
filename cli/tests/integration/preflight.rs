//! Pre-flight behavior of the deploy command.
//!
//! Runs the real binary with a scrubbed environment: missing required keys
//! must abort before anything else happens, and a populated `.env` file must
//! carry the configuration past the pre-flight check.

#![allow(clippy::expect_used)]

use std::io::Write as _;

use assert_cmd::Command;
use predicates::prelude::*;

/// Command with no inherited configuration and an empty PATH, so any
/// accidental gcloud invocation fails instead of touching the network.
fn scrubbed_deploy(dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("talk2api"));
    cmd.env_clear();
    cmd.env("NO_COLOR", "1");
    cmd.env("PATH", "");
    cmd.current_dir(dir);
    cmd.arg("deploy");
    cmd
}

#[test]
fn test_deploy_without_config_fails_naming_missing_key() {
    let dir = tempfile::tempdir().expect("tempdir");

    scrubbed_deploy(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("GOOGLE_CLOUD_PROJECT"));
}

#[test]
fn test_deploy_reads_env_file_and_proceeds_past_preflight() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut env_file = std::fs::File::create(dir.path().join(".env")).expect("create .env");
    writeln!(env_file, "GOOGLE_CLOUD_PROJECT=acme-prod").expect("write");
    writeln!(env_file, "GOOGLE_CLOUD_LOCATION=us-central1").expect("write");
    writeln!(env_file, "STAGING_BUCKET=gs://acme-staging").expect("write");
    writeln!(env_file, "AGENT_DISPLAY_NAME=Talk2API Assistant").expect("write");

    // Config is complete, so the failure moves past pre-flight to the
    // credential step — which cannot find gcloud on the empty PATH.
    scrubbed_deploy(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("gcloud").or(predicate::str::contains("spawn")))
        .stderr(predicate::str::contains("GOOGLE_CLOUD_PROJECT").not());
}

#[test]
fn test_process_env_overrides_env_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut env_file = std::fs::File::create(dir.path().join(".env")).expect("create .env");
    writeln!(env_file, "GOOGLE_CLOUD_PROJECT=from-file").expect("write");

    // Only the project is set; the next missing key is reported, proving
    // the file was read and merged under the process environment.
    let mut cmd = scrubbed_deploy(dir.path());
    cmd.env("GOOGLE_CLOUD_PROJECT", "from-process");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("GOOGLE_CLOUD_LOCATION"));
}
