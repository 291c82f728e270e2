//! Configuration loader for flags and environment variables.
//!
//! Responsibilities:
//! - Merge explicit values (command-line flags) over environment variables
//!   (`KEYDECK_HOST`, `KEYDECK_PORT`).
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading
//!   in tests.
//!
//! Does NOT handle:
//! - Interactive prompting for missing values (the binary owns stdin/stdout).
//! - Persisting configuration to disk; keydeck keeps no state between runs.
//!
//! Invariants:
//! - Explicit values always take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

use thiserror::Error;

use crate::types::PartialConnection;

/// Environment variable naming the automation server host.
pub const ENV_HOST: &str = "KEYDECK_HOST";
/// Environment variable naming the automation server port.
pub const ENV_PORT: &str = "KEYDECK_PORT";

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },
}

/// Configuration loader that merges explicit values over environment
/// variables.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    host: Option<String>,
    port: Option<u16>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load environment variables from a .env file if present.
    ///
    /// If the `DOTENV_DISABLED` environment variable is set to "true" or
    /// "1", the .env file is not loaded (useful for testing).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if std::env::var("DOTENV_DISABLED").ok().as_deref() != Some("true")
            && std::env::var("DOTENV_DISABLED").ok().as_deref() != Some("1")
        {
            dotenvy::dotenv().ok();
        }
        Ok(self)
    }

    /// Set an explicit host, overriding the environment.
    pub fn with_host(mut self, host: Option<String>) -> Self {
        if host.is_some() {
            self.host = host;
        }
        self
    }

    /// Set an explicit port, overriding the environment.
    pub fn with_port(mut self, port: Option<u16>) -> Self {
        if port.is_some() {
            self.port = port;
        }
        self
    }

    /// Read an environment variable, returning None if unset, empty, or
    /// whitespace-only.
    pub fn env_var_or_none(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.trim().is_empty())
    }

    /// Resolve the connection parameters.
    ///
    /// Explicit values win; the environment fills whatever is left. Fields
    /// neither source provides stay unset in the returned partial.
    pub fn load(self) -> Result<PartialConnection, ConfigError> {
        let host = self.host.or_else(|| Self::env_var_or_none(ENV_HOST));

        let port = match self.port {
            Some(port) => Some(port),
            None => match Self::env_var_or_none(ENV_PORT) {
                Some(raw) => {
                    Some(
                        raw.trim()
                            .parse::<u16>()
                            .map_err(|_| ConfigError::InvalidValue {
                                var: ENV_PORT.to_string(),
                                message: "must be a port number (0-65535)".to_string(),
                            })?,
                    )
                }
                None => None,
            },
        };

        Ok(PartialConnection { host, port })
    }
}
