//! Tests for the `credentials` application service.
//!
//! Key-file selection is a two-branch choice: activate the key when it
//! exists (best effort), otherwise use the ambient identity. Token and
//! project-number failures are fatal.

#![allow(clippy::expect_used)]

use anyhow::Result;
use talk2api_cli::application::ports::TokenSource;
use talk2api_cli::application::services::credentials;
use talk2api_cli::domain::config::DeployConfig;

use crate::helpers::deploy_config;
use crate::mocks::{NoopReporter, RecordingReporter, StaticTokens};

fn config_with_key_file(path: &str) -> DeployConfig {
    DeployConfig {
        credentials_file: Some(path.to_string()),
        ..deploy_config()
    }
}

#[tokio::test]
async fn test_resolve_without_key_file_uses_ambient_identity() {
    let tokens = StaticTokens::new();
    let creds = credentials::resolve(&tokens, &NoopReporter, &deploy_config(), |_| false)
        .await
        .expect("resolved");
    assert_eq!(creds.access_token, "ya29.test-token");
    assert_eq!(creds.project_number, "814273519841");
    assert_eq!(*tokens.activations.lock().expect("lock"), 0);
}

#[tokio::test]
async fn test_resolve_activates_existing_key_file() {
    let tokens = StaticTokens::new();
    let config = config_with_key_file("sa-key.json");
    credentials::resolve(&tokens, &NoopReporter, &config, |path| path == "sa-key.json")
        .await
        .expect("resolved");
    assert_eq!(*tokens.activations.lock().expect("lock"), 1);
}

#[tokio::test]
async fn test_resolve_failed_activation_is_nonfatal_warning() {
    let tokens = StaticTokens {
        fail_activation: true,
        ..StaticTokens::new()
    };
    let reporter = RecordingReporter::default();
    let config = config_with_key_file("sa-key.json");
    let creds = credentials::resolve(&tokens, &reporter, &config, |_| true)
        .await
        .expect("activation failure falls back to active identity");
    assert_eq!(creds.access_token, "ya29.test-token");
    assert!(
        reporter.warnings().iter().any(|w| w.contains("activation failed")),
        "expected an activation warning, got {:?}",
        reporter.warnings()
    );
}

#[tokio::test]
async fn test_resolve_missing_key_file_warns_and_uses_ambient_identity() {
    let tokens = StaticTokens::new();
    let reporter = RecordingReporter::default();
    let config = config_with_key_file("nonexistent.json");
    credentials::resolve(&tokens, &reporter, &config, |_| false)
        .await
        .expect("resolved");
    assert_eq!(*tokens.activations.lock().expect("lock"), 0);
    assert!(
        reporter.warnings().iter().any(|w| w.contains("not found")),
        "expected a missing-file warning"
    );
}

#[tokio::test]
async fn test_resolve_empty_token_is_fatal() {
    struct EmptyToken;
    impl TokenSource for EmptyToken {
        async fn activate_key_file(&self, _: &str) -> Result<()> {
            Ok(())
        }
        async fn access_token(&self) -> Result<String> {
            Ok("  ".to_string())
        }
        async fn project_number(&self, _: &str) -> Result<String> {
            Ok("1".to_string())
        }
    }

    let err = credentials::resolve(&EmptyToken, &NoopReporter, &deploy_config(), |_| false)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("empty access token"), "got: {err}");
}
