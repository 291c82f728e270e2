//! HTTP client for the Streamer.bot actions API.
//!
//! This crate provides a small type-safe client for the two operations the
//! automation server exposes over local HTTP/JSON: listing the available
//! actions and executing one action by its server-assigned id.

pub mod client;
pub mod error;
pub mod models;

pub use client::{ActionClient, ActionClientBuilder};
pub use error::{ClientError, Result};
pub use models::{ActionCatalog, ActionDescriptor};
