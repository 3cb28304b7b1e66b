//! Unit tests for the talk2api CLI
//!
//! These tests use mocked ports and run fast without external I/O.

mod account_service;
mod credentials_service;
mod helpers;
