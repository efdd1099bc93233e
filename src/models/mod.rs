//! Database models backing the repository.

pub mod client;
pub mod config;
