//! Public types for the claimcheck API.

mod claim;
mod prediction;
mod response;
mod verdict;

pub use claim::{ClaimLimits, ClaimRequest, DEFAULT_MAX_CLAIM_CHARS, DEFAULT_MIN_CLAIM_CHARS};
pub use prediction::{Prediction, RawModelOutput, UNKNOWN_LABEL, json_type_name};
pub use response::{ClassificationResult, ErrorResult};
pub use verdict::{ConfidenceTier, Verdict};
