//! Command implementations

pub mod deploy;
pub mod setup_account;
pub mod version;
