//! Error types for the actions client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during action client operations.
///
/// Whether an error is fatal is a policy of the caller: the interactive loop
/// treats a failed catalog fetch as unrecoverable but a failed execution as
/// a reportable condition it continues past.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level HTTP error (connection refused, timeout, etc.).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a status the API contract does not allow.
    #[error("unexpected status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body did not match the expected JSON shape.
    #[error("invalid response format: {0}")]
    InvalidResponse(String),

    /// The configured base URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}
