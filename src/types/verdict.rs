//! Verdict and confidence tier types.
//!
//! A verdict states whether a claim looks true, looks false, or cannot be
//! judged. The confidence tier is the verbal bucket used in explanations.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Truthfulness verdict for a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The model reported positive sentiment.
    LikelyTrue,
    /// The model reported negative sentiment.
    LikelyFalse,
    /// Any other label.
    Uncertain,
}

impl Verdict {
    /// Map a sentiment label onto a verdict (case-insensitive).
    pub fn from_sentiment_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "positive" => Self::LikelyTrue,
            "negative" => Self::LikelyFalse,
            _ => Self::Uncertain,
        }
    }

    /// Wire name, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LikelyTrue => "likely_true",
            Self::LikelyFalse => "likely_false",
            Self::Uncertain => "uncertain",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verbal confidence bucket derived from a model score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfidenceTier {
    Minimal,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl ConfidenceTier {
    /// Bucket a score. Lower bounds are inclusive; NaN falls through to `Minimal`.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.9 {
            Self::VeryStrong
        } else if score >= 0.8 {
            Self::Strong
        } else if score >= 0.7 {
            Self::Moderate
        } else if score >= 0.6 {
            Self::Weak
        } else {
            Self::Minimal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryStrong => "very strong",
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
            Self::Minimal => "minimal",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_labels_map_case_insensitively() {
        assert_eq!(Verdict::from_sentiment_label("POSITIVE"), Verdict::LikelyTrue);
        assert_eq!(Verdict::from_sentiment_label("Negative"), Verdict::LikelyFalse);
        assert_eq!(Verdict::from_sentiment_label("neutral"), Verdict::Uncertain);
        assert_eq!(Verdict::from_sentiment_label(""), Verdict::Uncertain);
    }

    #[test]
    fn verdict_serializes_snake_case() {
        let json = serde_json::to_string(&Verdict::LikelyFalse).unwrap();
        assert_eq!(json, r#""likely_false""#);
        assert_eq!(Verdict::LikelyFalse.to_string(), "likely_false");
    }

    #[test]
    fn tier_boundaries_are_inclusive() {
        assert_eq!(ConfidenceTier::from_score(0.9), ConfidenceTier::VeryStrong);
        assert_eq!(ConfidenceTier::from_score(0.8999), ConfidenceTier::Strong);
        assert_eq!(ConfidenceTier::from_score(0.8), ConfidenceTier::Strong);
        assert_eq!(ConfidenceTier::from_score(0.7), ConfidenceTier::Moderate);
        assert_eq!(ConfidenceTier::from_score(0.6), ConfidenceTier::Weak);
        assert_eq!(ConfidenceTier::from_score(0.5999), ConfidenceTier::Minimal);
        assert_eq!(ConfidenceTier::from_score(f64::NAN), ConfidenceTier::Minimal);
    }

    #[test]
    fn tier_is_monotonic_in_score() {
        let mut previous = ConfidenceTier::VeryStrong;
        for step in (0..=1000).rev() {
            let tier = ConfidenceTier::from_score(f64::from(step) / 1000.0);
            assert!(tier <= previous, "tier rose as score fell at {step}");
            previous = tier;
        }
    }
}
