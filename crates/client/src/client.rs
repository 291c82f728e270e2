//! Main actions API client.

use std::time::Duration;

use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::{ActionCatalog, ActionRef, DoActionRequest};

/// Builder for creating a new [`ActionClient`].
pub struct ActionClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl Default for ActionClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: None,
        }
    }
}

impl ActionClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the automation server.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set an optional request timeout.
    ///
    /// There is no timeout by default: the interactive loop blocks on every
    /// remote call, and a hung call hangs the loop. Operators who prefer a
    /// bounded wait can opt in.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// This prevents double slashes when concatenating with endpoint paths.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the client.
    pub fn build(self) -> Result<ActionClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        url::Url::parse(&base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        let mut http_builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            http_builder = http_builder.timeout(timeout);
        }
        let http = http_builder.build()?;

        Ok(ActionClient { http, base_url })
    }
}

/// Client for the automation server's actions API.
///
/// One request per call; the server is expected on the local network, so
/// there is no retry, backoff, or connection management beyond what the
/// transport provides by default.
pub struct ActionClient {
    http: reqwest::Client,
    base_url: String,
}

impl ActionClient {
    /// Fetch the full action catalog from `GET <base>/GetActions`.
    ///
    /// Transport failures and bodies that do not decode as a catalog are
    /// both errors; there is no retry.
    pub async fn get_actions(&self) -> Result<ActionCatalog> {
        let url = format!("{}/GetActions", self.base_url);
        debug!(%url, "fetching action catalog");

        let response = self.http.get(&url).send().await?;
        let status = response.status().as_u16();
        if !response.status().is_success() {
            return Err(ClientError::UnexpectedStatus { status, url });
        }

        let body = response.text().await?;
        let catalog: ActionCatalog = serde_json::from_str(&body)
            .map_err(|e| ClientError::InvalidResponse(format!("failed to parse catalog: {e}")))?;

        debug!(count = catalog.count, "received action catalog");
        Ok(catalog)
    }

    /// Execute one action via `POST <base>/DoAction`.
    ///
    /// Success is strictly HTTP 204; any other status is an
    /// [`ClientError::UnexpectedStatus`].
    pub async fn do_action(&self, id: &str) -> Result<()> {
        let url = format!("{}/DoAction", self.base_url);
        debug!(%url, action_id = id, "executing action");

        let request = DoActionRequest {
            action: ActionRef { id },
        };
        let response = self.http.post(&url).json(&request).send().await?;

        let status = response.status().as_u16();
        if status != 204 {
            return Err(ClientError::UnexpectedStatus { status, url });
        }
        Ok(())
    }

    /// The normalized base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
