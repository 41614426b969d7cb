//! Provider implementations for sentiment classification.
//!
//! The HuggingFace Inference API is the only remote backend; other backends
//! plug in through [`SentimentProvider`].

pub mod huggingface;
pub mod traits;

pub use huggingface::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, HuggingFaceClient};
pub use traits::SentimentProvider;
