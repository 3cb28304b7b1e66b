//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::process::Output;

use anyhow::Result;

// ── Value Types ───────────────────────────────────────────────────────────────

/// Result of a streamed subprocess run: the exit status plus the full
/// combined stdout/stderr transcript that was echoed to the console.
#[derive(Debug, Clone)]
pub struct CapturedRun {
    pub exit_code: i32,
    pub transcript: String,
}

impl CapturedRun {
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }
}

/// Response from a management-API call. Non-2xx statuses are returned as
/// values, not transport errors — the caller decides fatality and surfaces
/// the body.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Authorization material attached to every management-API call: the bearer
/// token plus the project used for the tenant-scoping header.
#[derive(Debug, Clone)]
pub struct ApiAuth {
    pub bearer_token: String,
    pub user_project: String,
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds the
    /// runner's timeout. On timeout, the child process must be killed.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;

    /// Run a program, echoing its combined stdout/stderr to the console
    /// line by line while buffering the full transcript.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned; a non-zero exit
    /// is reported through [`CapturedRun::exit_code`], not as an error.
    async fn run_streaming(&self, program: &str, args: &[&str]) -> Result<CapturedRun>;
}

// ── Token Source Port ─────────────────────────────────────────────────────────

/// Abstracts credential resolution (normally the ambient `gcloud` CLI).
#[allow(async_fn_in_trait)]
pub trait TokenSource {
    /// Activate a service-account key file as the current identity.
    ///
    /// # Errors
    ///
    /// Returns an error when activation fails; callers treat this as a
    /// warning and fall back to the already-active identity.
    async fn activate_key_file(&self, key_file: &str) -> Result<()>;

    /// Produce a bearer token for the active identity.
    async fn access_token(&self) -> Result<String>;

    /// Resolve the numeric project number for a project id.
    async fn project_number(&self, project_id: &str) -> Result<String>;
}

// ── REST Gateway Port ─────────────────────────────────────────────────────────

/// Abstracts the management-API HTTP surface so application services can be
/// tested without network access.
#[allow(async_fn_in_trait)]
pub trait RestGateway {
    /// POST a JSON body. Transport failures are errors; HTTP error statuses
    /// come back as an [`ApiResponse`].
    async fn post_json(
        &self,
        url: &str,
        auth: &ApiAuth,
        body: &serde_json::Value,
    ) -> Result<ApiResponse>;

    /// GET a resource with the same auth headers as `post_json`.
    async fn get(&self, url: &str, auth: &ApiAuth) -> Result<ApiResponse>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
