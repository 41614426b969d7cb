//! Inbound claim request and its length limits.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{ClaimcheckError, Result};

/// Default minimum claim length, in characters.
pub const DEFAULT_MIN_CLAIM_CHARS: usize = 5;

/// Default maximum claim length, in characters.
pub const DEFAULT_MAX_CLAIM_CHARS: usize = 500;

/// Request body for `POST /api/v1/analyze-claim`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "claim": "Global temperatures have risen by 1.1 degrees Celsius since pre-industrial times."
}))]
pub struct ClaimRequest {
    /// The news claim to analyze (5-500 characters unless configured otherwise)
    #[schema(min_length = 5, max_length = 500, example = "The Earth is flat")]
    pub claim: String,
}

impl ClaimRequest {
    pub fn new(claim: impl Into<String>) -> Self {
        Self {
            claim: claim.into(),
        }
    }

    /// Check the claim against `limits`.
    pub fn validate(&self, limits: &ClaimLimits) -> Result<()> {
        limits.check(&self.claim)
    }
}

/// Inclusive bounds on claim length, counted in Unicode scalar values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimLimits {
    #[serde(default = "default_min_chars")]
    pub min_claim_chars: usize,
    #[serde(default = "default_max_chars")]
    pub max_claim_chars: usize,
}

impl Default for ClaimLimits {
    fn default() -> Self {
        Self {
            min_claim_chars: DEFAULT_MIN_CLAIM_CHARS,
            max_claim_chars: DEFAULT_MAX_CLAIM_CHARS,
        }
    }
}

fn default_min_chars() -> usize {
    DEFAULT_MIN_CLAIM_CHARS
}

fn default_max_chars() -> usize {
    DEFAULT_MAX_CLAIM_CHARS
}

impl ClaimLimits {
    /// Reject limits that no claim could satisfy.
    pub fn ensure_consistent(&self) -> Result<()> {
        if self.min_claim_chars == 0 {
            return Err(ClaimcheckError::Configuration(
                "min_claim_chars must be at least 1".to_string(),
            ));
        }
        if self.min_claim_chars > self.max_claim_chars {
            return Err(ClaimcheckError::Configuration(format!(
                "min_claim_chars ({}) exceeds max_claim_chars ({})",
                self.min_claim_chars, self.max_claim_chars
            )));
        }
        Ok(())
    }

    /// Check that `claim` falls within the bounds.
    pub fn check(&self, claim: &str) -> Result<()> {
        let len = claim.chars().count();
        if len < self.min_claim_chars {
            return Err(ClaimcheckError::InvalidInput(format!(
                "claim must be at least {} characters, got {len}",
                self.min_claim_chars
            )));
        }
        if len > self.max_claim_chars {
            return Err(ClaimcheckError::InvalidInput(format!(
                "claim must be at most {} characters, got {len}",
                self.max_claim_chars
            )));
        }
        Ok(())
    }
}
