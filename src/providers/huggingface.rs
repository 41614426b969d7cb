//! HuggingFace Inference API client for text classification.
//!
//! This client uses HuggingFace's serverless inference endpoints.
//! See: <https://huggingface.co/docs/api-inference/index>

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::traits::SentimentProvider;
use crate::types::RawModelOutput;
use crate::{ClaimcheckError, Result};

/// Default model endpoint (SST-2 fine-tuned DistilBERT behind the HF router).
pub const DEFAULT_ENDPOINT: &str = "https://router.huggingface.co/hf-inference/models/distilbert/distilbert-base-uncased-finetuned-sst-2-english";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for a HuggingFace text-classification endpoint.
///
/// Holds only static configuration and a pooled HTTP client, so one instance
/// is built at startup and shared across requests.
#[derive(Clone)]
pub struct HuggingFaceClient {
    api_token: String,
    http: Client,
    endpoint: String,
    timeout: Duration,
}

impl HuggingFaceClient {
    /// Create a client for the default endpoint and timeout.
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        Self::with_endpoint(
            api_token,
            DEFAULT_ENDPOINT,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Create a client with a custom endpoint and timeout (also used with wiremock).
    pub fn with_endpoint(
        api_token: impl Into<String>,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build().map_err(|e| {
            ClaimcheckError::Configuration(format!("failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            api_token: api_token.into(),
            http,
            endpoint: endpoint.into(),
            timeout,
        })
    }

    /// Endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Send `text` to the model and return its JSON body unchanged.
    ///
    /// Exactly one attempt is made; see [`ClaimcheckError`] for the status
    /// and transport mapping.
    #[instrument(skip(self, text), fields(provider = "huggingface", chars = text.chars().count()))]
    pub async fn classify(&self, text: &str) -> Result<RawModelOutput> {
        let response = self
            .http
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .json(&ClassifyRequest { inputs: text })
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let response = Self::handle_response_errors(response).await?;

        let body: Value = response.json().await.map_err(|e| self.transport_error(e))?;
        let output = RawModelOutput::from(body);
        debug!(shape = output.shape(), "model response received");
        Ok(output)
    }

    /// Check response status and map to the matching error category.
    ///
    /// Order matters: the specific statuses are checked before the generic
    /// non-success fallback.
    async fn handle_response_errors(response: Response) -> Result<Response> {
        let status = response.status();

        let err = match status.as_u16() {
            503 => ClaimcheckError::ModelUnavailable,
            500 => ClaimcheckError::ServerError,
            429 => ClaimcheckError::RateLimited,
            401 => ClaimcheckError::AuthenticationFailed,
            400 => {
                let body = response.text().await.unwrap_or_else(|e| {
                    warn!(error = %e, "failed to read model error body");
                    String::new()
                });
                ClaimcheckError::BadRequest { body }
            }
            _ if status.is_success() => return Ok(response),
            code => ClaimcheckError::Http { status: code },
        };

        warn!(status = status.as_u16(), category = err.category(), "model request failed");
        Err(err)
    }

    /// Map a transport-level failure. Timeouts win over connection errors.
    fn transport_error(&self, err: reqwest::Error) -> ClaimcheckError {
        let mapped = if err.is_timeout() {
            ClaimcheckError::Timeout {
                timeout: self.timeout,
            }
        } else if err.is_connect() {
            ClaimcheckError::Connection(err.to_string())
        } else {
            ClaimcheckError::Unexpected(err.to_string())
        };

        warn!(error = %err, category = mapped.category(), "model request failed");
        mapped
    }
}

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    inputs: &'a str,
}

#[async_trait]
impl SentimentProvider for HuggingFaceClient {
    fn name(&self) -> &str {
        "huggingface"
    }

    async fn classify(&self, text: &str) -> Result<RawModelOutput> {
        // Delegate to the inherent method
        HuggingFaceClient::classify(self, text).await
    }
}
