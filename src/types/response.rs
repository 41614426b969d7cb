//! Response payloads: a classification on success, an error record otherwise.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::verdict::Verdict;
use crate::{ClaimcheckError, Result};

/// Successful analysis of a claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClassificationResult {
    /// The original claim that was analyzed
    pub claim: String,
    /// The predicted classification
    pub classification: Verdict,
    /// Confidence score between 0 and 1
    #[schema(minimum = 0.0, maximum = 1.0)]
    pub confidence: f64,
    /// Human-readable explanation of the classification
    pub explanation: String,
}

impl ClassificationResult {
    /// Build a result, rejecting a confidence outside `[0, 1]`.
    pub fn new(
        claim: impl Into<String>,
        classification: Verdict,
        confidence: f64,
        explanation: impl Into<String>,
    ) -> Result<Self> {
        if !(0.0..=1.0).contains(&confidence) {
            return Err(ClaimcheckError::Parsing(format!(
                "confidence {confidence} is outside [0, 1]"
            )));
        }
        Ok(Self {
            claim: claim.into(),
            classification,
            confidence,
            explanation: explanation.into(),
        })
    }
}

/// Error record returned instead of a [`ClassificationResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResult {
    /// Error type or category
    pub error: String,
    /// Detailed error message
    pub message: String,
    /// HTTP status code
    pub status_code: u16,
}
