//! Provider trait for remote sentiment classification.
//!
//! The analyzer only depends on [`SentimentProvider`], so the HuggingFace
//! client can be swapped for another backend (or a test double) without
//! touching the verdict logic.
//!
//! # Error Semantics
//!
//! Implementations perform exactly one attempt per call and report every
//! failure as a [`ClaimcheckError`](crate::ClaimcheckError) carrying its
//! category and status. They never retry.

use async_trait::async_trait;

use crate::Result;
use crate::types::RawModelOutput;

/// Provider for sentiment classification of a single text.
#[async_trait]
pub trait SentimentProvider: Send + Sync {
    /// Provider name for logging/metrics.
    fn name(&self) -> &str;

    /// Classify `text`, returning the remote body untouched on success.
    async fn classify(&self, text: &str) -> Result<RawModelOutput>;
}
