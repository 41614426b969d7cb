//! Claim analysis: one provider call piped into the verdict mapper.
//!
//! [`ClaimAnalyzer`] holds nothing but the injected provider, so a single
//! instance is shared (behind `Arc`) by every concurrent request.

pub mod verdict;

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, instrument};

use crate::Result;
use crate::providers::SentimentProvider;
use crate::telemetry;
use crate::types::ClassificationResult;

pub use verdict::{UNCERTAIN_EXPLANATION, explain, interpret, round_to_millis};

/// Analyzes claims against a sentiment provider.
#[derive(Clone)]
pub struct ClaimAnalyzer {
    provider: Arc<dyn SentimentProvider>,
}

impl ClaimAnalyzer {
    pub fn new(provider: Arc<dyn SentimentProvider>) -> Self {
        Self { provider }
    }

    /// Name of the underlying provider.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Analyze an already-validated claim.
    ///
    /// Provider errors are returned unchanged; the mapper only runs on a
    /// successful model response.
    #[instrument(skip(self, claim), fields(provider = self.provider.name()))]
    pub async fn analyze(&self, claim: &str) -> Result<ClassificationResult> {
        let outcome = self.classify_and_interpret(claim).await;

        let label = match &outcome {
            Ok(result) => {
                debug!(
                    classification = %result.classification,
                    confidence = result.confidence,
                    "claim analyzed"
                );
                result.classification.as_str()
            }
            Err(e) if e.is_upstream() => {
                debug!(category = e.category(), "model call failed");
                e.category()
            }
            Err(e) => {
                error!(category = e.category(), error = %e, "claim analysis failed");
                e.category()
            }
        };
        metrics::counter!(telemetry::ANALYSES_TOTAL, "outcome" => label).increment(1);

        outcome
    }

    async fn classify_and_interpret(&self, claim: &str) -> Result<ClassificationResult> {
        let start = Instant::now();
        let raw = self.provider.classify(claim).await;
        self.record_model_request(start, raw.as_ref().err().map(|e| e.category()));

        interpret(claim, &raw?)
    }

    fn record_model_request(&self, start: Instant, error_category: Option<&'static str>) {
        let provider = self.provider.name().to_owned();
        metrics::counter!(telemetry::MODEL_REQUESTS_TOTAL,
            "provider" => provider.clone(),
            "status" => error_category.unwrap_or("ok"),
        )
        .increment(1);
        metrics::histogram!(telemetry::MODEL_REQUEST_DURATION_SECONDS,
            "provider" => provider,
        )
        .record(start.elapsed().as_secs_f64());
    }
}
