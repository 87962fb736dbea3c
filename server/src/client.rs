//! Client for a running canvaslift generation service.

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use canvaslift_core::types::GenerationManifest;
use canvaslift_core::{LiftError, LiftResult};

/// Talks to `POST /api/generate-component` on a running service.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    http: Client,
    base_url: String,
}

impl GenerationClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http: Client::new(), base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the service to generate a component.
    ///
    /// A refused connection becomes [`LiftError::ServiceUnavailable`]; a
    /// reachable service that answers `success: false` becomes
    /// [`LiftError::Remote`] carrying its message.
    pub async fn generate(&self, component_id: &str) -> LiftResult<GenerationManifest> {
        let url = format!("{}/api/generate-component", self.base_url);
        debug!(url = %url, component_id, "Requesting generation");

        let resp = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "componentId": component_id }))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = resp.status();
        let body: Value = resp.json().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() || body["success"] != Value::Bool(true) {
            let message = body["error"].as_str().map(str::to_string).unwrap_or_else(|| {
                format!("request failed with status {status}")
            });
            return Err(LiftError::Remote(message));
        }

        serde_json::from_value(body).map_err(|e| LiftError::Remote(format!("unexpected response: {e}")))
    }

    fn transport_error(&self, e: reqwest::Error) -> LiftError {
        if e.is_connect() || e.is_timeout() {
            LiftError::ServiceUnavailable { url: self.base_url.clone(), reason: e.to_string() }
        } else {
            LiftError::Remote(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash() {
        let client = GenerationClient::new("http://127.0.0.1:4202/");
        assert_eq!(client.base_url(), "http://127.0.0.1:4202");
    }
}
