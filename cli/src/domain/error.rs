//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors raised during pre-flight configuration validation.
///
/// These fire before any credential resolution or network call.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required configuration key: {0}\n\nSet it in .env or the environment.")]
    MissingKey(&'static str),

    #[error("Configuration key {key} must not be empty")]
    EmptyValue { key: &'static str },
}

// ── Deployment errors ─────────────────────────────────────────────────────────

/// Errors raised while invoking the external deployment tool and scraping
/// its output for the reasoning-engine resource name.
#[derive(Debug, Error)]
pub enum DeployError {
    #[error("'{tool}' exited with {code}. See the output above for details.")]
    ToolFailed { tool: String, code: i32 },

    #[error(
        "Could not determine the reasoning engine for '{display_name}': \
         not found in the deploy output, and the list endpoint returned no match."
    )]
    EngineNotFound { display_name: String },
}

// ── Management API errors ─────────────────────────────────────────────────────

/// A non-2xx response from a provisioning or registration call.
///
/// The response body is preserved verbatim so the operator can diagnose the
/// failure; nothing is retried.
#[derive(Debug, Error)]
#[error("{operation} failed with HTTP {status}:\n{body}")]
pub struct ApiError {
    pub operation: &'static str,
    pub status: u16,
    pub body: String,
}
