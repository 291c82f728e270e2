//! Configuration types for keydeck.

use std::fmt;

/// Resolved connection parameters for the automation server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Host name or IP address of the automation server.
    pub host: String,
    /// TCP port of the automation server's HTTP endpoint.
    pub port: u16,
}

impl ConnectionConfig {
    /// The base URL the actions client should target.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl fmt::Display for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Connection parameters after the flag/environment merge.
///
/// Either field may still be unset; the binary prompts interactively for
/// whatever is missing before building a [`ConnectionConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialConnection {
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl PartialConnection {
    /// Complete the configuration if both fields are present.
    pub fn into_config(self) -> Option<ConnectionConfig> {
        match (self.host, self.port) {
            (Some(host), Some(port)) => Some(ConnectionConfig { host, port }),
            _ => None,
        }
    }
}
