//! Tests for the `account` application service.

#![allow(clippy::expect_used)]

use talk2api_cli::application::services::account;
use talk2api_cli::domain::config::AccountConfig;

use crate::helpers::{err_output, ok_output};
use crate::mocks::{NoopReporter, RecordingReporter, ScriptedRunner};

fn config() -> AccountConfig {
    AccountConfig {
        project_id: "acme-prod".to_string(),
        account_name: "talk2api-deployer".to_string(),
        key_file: "talk2api-sa-key.json".to_string(),
    }
}

#[tokio::test]
async fn test_setup_creates_account_then_key() {
    let runner = ScriptedRunner::new();
    runner.push_output(ok_output(b""));
    runner.push_output(ok_output(b""));

    account::setup(&runner, &NoopReporter, &config())
        .await
        .expect("setup succeeds");

    let calls = runner.run_calls.lock().expect("lock");
    assert_eq!(calls.len(), 2);
    assert!(calls[0].1.contains(&"create".to_string()));
    assert!(calls[0].1.contains(&"talk2api-deployer".to_string()));
    assert!(calls[1].1.contains(&"keys".to_string()));
    assert!(
        calls[1].1.contains(&"talk2api-deployer@acme-prod.iam.gserviceaccount.com".to_string())
    );
}

#[tokio::test]
async fn test_setup_reuses_existing_account_with_warning() {
    let runner = ScriptedRunner::new();
    runner.push_output(err_output(1, b"ERROR: service account already exists"));
    runner.push_output(ok_output(b""));
    let reporter = RecordingReporter::default();

    account::setup(&runner, &reporter, &config())
        .await
        .expect("existing account is reused");

    assert_eq!(runner.run_calls.lock().expect("lock").len(), 2);
    assert!(
        reporter.warnings().iter().any(|w| w.contains("already exists")),
        "expected a reuse warning"
    );
}

#[tokio::test]
async fn test_setup_other_create_failure_is_fatal() {
    let runner = ScriptedRunner::new();
    runner.push_output(err_output(1, b"ERROR: permission denied on project"));

    let err = account::setup(&runner, &NoopReporter, &config())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("permission denied"), "got: {err}");
    assert_eq!(runner.run_calls.lock().expect("lock").len(), 1, "no key generation attempted");
}

#[tokio::test]
async fn test_setup_key_generation_failure_is_fatal() {
    let runner = ScriptedRunner::new();
    runner.push_output(ok_output(b""));
    runner.push_output(err_output(1, b"ERROR: key quota exceeded"));

    let err = account::setup(&runner, &NoopReporter, &config())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("key quota exceeded"), "got: {err}");
}
