//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution, `.env`
//! loading, gcloud invocation, and HTTP calls to the management APIs.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod command_runner;
pub mod env_file;
pub mod gcloud;
pub mod http;
