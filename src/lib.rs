//! Claimcheck - claim analysis backed by a remote sentiment model
//!
//! This crate sends a short text claim to a sentiment-classification model
//! and maps the returned label onto a truthfulness verdict (`likely_true`,
//! `likely_false` or `uncertain`) with a templated explanation. With the
//! `server` feature it also exposes the pipeline over HTTP.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use claimcheck::{ClaimAnalyzer, providers::HuggingFaceClient};
//!
//! #[tokio::main]
//! async fn main() -> claimcheck::Result<()> {
//!     let client = HuggingFaceClient::new("hf_your_token")?;
//!     let analyzer = ClaimAnalyzer::new(Arc::new(client));
//!
//!     let result = analyzer.analyze("The Earth orbits the Sun.").await?;
//!     println!("{} ({})", result.classification, result.confidence);
//!     Ok(())
//! }
//! ```

pub mod analyzer;
pub mod error;
pub mod providers;
#[cfg(feature = "server")]
pub mod server;
pub mod telemetry;
pub mod types;
mod version;

// Re-export main types at crate root
pub use analyzer::ClaimAnalyzer;
pub use error::{ClaimcheckError, Result};
pub use version::{PKG_VERSION, SERVICE_NAME, version_string};

pub use types::{
    ClaimLimits, ClaimRequest, ClassificationResult, ConfidenceTier, ErrorResult, Prediction,
    RawModelOutput, Verdict,
};
