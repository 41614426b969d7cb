//! Mapping from a raw sentiment prediction to a truthfulness verdict.
//!
//! The sentiment → truthfulness mapping is a placeholder heuristic: positive
//! sentiment reads as "likely true", negative as "likely false". Only its
//! mechanical behaviour is guaranteed here.

use crate::Result;
use crate::types::{ClassificationResult, ConfidenceTier, RawModelOutput, Verdict};

/// Explanation used for any label other than positive/negative.
pub const UNCERTAIN_EXPLANATION: &str = "Unable to classify this claim with confidence.";

/// Interpret `raw` for `claim`.
///
/// Any shape or coercion problem comes back as a `parsing_error`.
pub fn interpret(claim: &str, raw: &RawModelOutput) -> Result<ClassificationResult> {
    let prediction = raw.top_prediction()?;
    let verdict = Verdict::from_sentiment_label(&prediction.label);
    let explanation = explain(verdict, prediction.score);

    ClassificationResult::new(
        claim,
        verdict,
        round_to_millis(prediction.score),
        explanation,
    )
}

/// Human-readable explanation for `verdict` at `score`.
pub fn explain(verdict: Verdict, score: f64) -> String {
    let tier = ConfidenceTier::from_score(score);
    match verdict {
        Verdict::LikelyTrue => format!(
            "This claim shows {tier} characteristics of being true. The analysis indicates \
             positive sentiment and factual language patterns commonly found in verified \
             statements."
        ),
        Verdict::LikelyFalse => format!(
            "This claim shows {tier} characteristics of being false. The analysis detected \
             language patterns and semantic markers typically associated with misinformation \
             or unfounded statements."
        ),
        Verdict::Uncertain => UNCERTAIN_EXPLANATION.to_string(),
    }
}

/// Round to three decimal places.
///
/// Rounds the exact binary value of `score`, so `0.0045` (stored just below
/// the half) becomes `0.004`. Exact ties go to the even digit.
pub fn round_to_millis(score: f64) -> f64 {
    if !score.is_finite() {
        return score;
    }

    // Only odd multiples of 1/16 sit exactly halfway between two millis.
    let sixteenths = score * 16.0;
    if sixteenths.fract() == 0.0 && sixteenths % 2.0 != 0.0 {
        let millis = score * 1000.0;
        let down = millis.floor();
        let even = if down % 2.0 == 0.0 { down } else { millis.ceil() };
        return even / 1000.0;
    }

    format!("{score:.3}").parse().unwrap_or(score)
}
