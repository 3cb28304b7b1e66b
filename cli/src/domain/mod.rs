//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod identifiers;

#[allow(unused_imports)]
pub use config::{AccountConfig, DeployConfig, OPTIONAL_KEYS, REQUIRED_KEYS};
#[allow(unused_imports)]
pub use error::{ApiError, ConfigError, DeployError};
#[allow(unused_imports)]
pub use identifiers::{derive_resource_id, extract_reasoning_engine};
