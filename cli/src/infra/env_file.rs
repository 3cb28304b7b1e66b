//! `.env` loading.
//!
//! The config file is flat key=value pairs merged into the process
//! environment, with already-set environment variables taking precedence.

use std::path::Path;

use anyhow::{Context, Result};

/// Environment variable overriding the `.env` file location.
pub const ENV_FILE_VAR: &str = "TALK2API_ENV_FILE";

/// Merge the `.env` file (if any) into the process environment.
///
/// A missing file is not an error — configuration may live entirely in the
/// environment. A file that exists but cannot be parsed is fatal.
///
/// # Errors
///
/// Returns an error when the file exists but is malformed.
pub fn load() -> Result<()> {
    let path = std::env::var(ENV_FILE_VAR).unwrap_or_else(|_| ".env".to_string());
    if !Path::new(&path).exists() {
        return Ok(());
    }
    dotenvy::from_path(&path).with_context(|| format!("cannot parse {path}"))?;
    Ok(())
}
