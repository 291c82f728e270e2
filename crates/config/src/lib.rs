//! Connection configuration for keydeck.
//!
//! This crate provides types and a loader for resolving the automation
//! server's host and port from explicit values (command-line flags) and
//! environment variables. Values the merge cannot resolve stay unset so the
//! binary can fall back to interactive prompting.

mod loader;
mod types;

pub use loader::{ConfigError, ConfigLoader};
pub use types::{ConnectionConfig, PartialConnection};
