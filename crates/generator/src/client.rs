//! Request/response types and the blocking call into the generator service.

use std::time::Duration;

use boilergen_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body sent to the generator service.
///
/// `userId` is forwarded so the generator can attribute artifacts; it plays
/// no role in deduplication.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest<'a> {
    pub stack: &'a str,
    pub version: &'a str,
    pub features: &'a Value,
    #[serde(rename = "userId")]
    pub user_id: &'a str,
}

/// The artifact record inside a successful generator response.
///
/// Every field is optional on the wire; the coordinator falls back to the
/// request values (and empty urls) for anything the generator omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedProject {
    pub stack: Option<String>,
    pub version: Option<String>,
    pub features: Option<Value>,
    pub zip_url: Option<String>,
    pub pdf_url: Option<String>,
    pub expires_at: Option<Timestamp>,
}

/// Top-level generator response envelope.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    success: bool,
    project: Option<GeneratedProject>,
    message: Option<String>,
}

/// Errors from a generator call.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Network-level failure (connect, timeout, body read).
    #[error("Generator request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The generator answered with a non-success HTTP status.
    #[error("Backend generator error: {status}")]
    Upstream { status: u16, body: String },

    /// The generator answered 2xx but the payload was unusable.
    #[error("Invalid response from generator: {0}")]
    InvalidResponse(String),
}

/// Client for one generator service endpoint.
///
/// Cheap to clone behind an `Arc`; the inner `reqwest::Client` pools
/// connections and carries the request timeout.
pub struct GeneratorClient {
    base_url: String,
    retries: u32,
    http: reqwest::Client,
}

/// Pause between transport-error retries, multiplied by the attempt number.
const RETRY_BACKOFF: Duration = Duration::from_millis(500);

impl GeneratorClient {
    /// Create a client targeting `base_url` with a bounded request timeout.
    ///
    /// `retries` is the number of additional attempts after a transport
    /// failure; HTTP responses of any status are never retried.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        retries: u32,
    ) -> Result<Self, GeneratorError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into(),
            retries,
            http,
        })
    }

    /// Generator endpoint URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request generation of a boilerplate for the given configuration.
    ///
    /// Awaits the generator synchronously; this is the single suspension
    /// point of the generation workflow. Transport errors are retried with
    /// linear backoff; an HTTP error status or a malformed/unsuccessful
    /// payload fails immediately.
    pub async fn generate(
        &self,
        request: &GenerateRequest<'_>,
    ) -> Result<GeneratedProject, GeneratorError> {
        let response = self.send_with_retry(request).await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), %body, "Generator returned error status");
            return Err(GeneratorError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let payload: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GeneratorError::InvalidResponse(e.to_string()))?;

        if !payload.success {
            return Err(GeneratorError::InvalidResponse(
                payload
                    .message
                    .unwrap_or_else(|| "generator reported failure".into()),
            ));
        }

        payload
            .project
            .ok_or_else(|| GeneratorError::InvalidResponse("missing project payload".into()))
    }

    async fn send_with_retry(
        &self,
        request: &GenerateRequest<'_>,
    ) -> Result<reqwest::Response, reqwest::Error> {
        let mut attempt: u32 = 0;
        loop {
            match self.http.post(&self.base_url).json(request).send().await {
                Ok(response) => return Ok(response),
                Err(err) if attempt < self.retries => {
                    attempt += 1;
                    tracing::warn!(
                        error = %err,
                        attempt,
                        retries = self.retries,
                        "Generator request failed, retrying"
                    );
                    tokio::time::sleep(RETRY_BACKOFF * attempt).await;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_user_id_in_camel_case() {
        let features = json!(["auth"]);
        let request = GenerateRequest {
            stack: "node",
            version: "20",
            features: &features,
            user_id: "user_1",
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({"stack": "node", "version": "20", "features": ["auth"], "userId": "user_1"})
        );
    }

    #[test]
    fn response_parses_with_optional_fields() {
        let payload: GenerateResponse = serde_json::from_value(json!({
            "success": true,
            "project": {
                "stack": "node",
                "version": "20",
                "features": {"auth": true},
                "zip_url": "https://cdn.example.com/projects/a.zip",
                "pdf_url": "https://cdn.example.com/projects/a.pdf"
            }
        }))
        .unwrap();
        assert!(payload.success);
        let project = payload.project.unwrap();
        assert_eq!(project.zip_url.as_deref(), Some("https://cdn.example.com/projects/a.zip"));
        assert!(project.expires_at.is_none());
    }

    #[test]
    fn response_tolerates_missing_project() {
        let payload: GenerateResponse = serde_json::from_value(json!({
            "success": false,
            "message": "unsupported stack"
        }))
        .unwrap();
        assert!(!payload.success);
        assert!(payload.project.is_none());
        assert_eq!(payload.message.as_deref(), Some("unsupported stack"));
    }
}
