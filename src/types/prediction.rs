//! Raw model output and the top prediction extracted from it.
//!
//! Text-classification endpoints answer in one of several shapes depending on
//! the deployment: a bare `{label, score}` record, `[{label, score}, ...]`, or
//! `[[{label, score}, ...]]`. [`RawModelOutput`] tags the outer shape once and
//! [`RawModelOutput::top_record`] unwraps it in one place.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{ClaimcheckError, Result};

/// Label used when a prediction record carries no `label` field.
pub const UNKNOWN_LABEL: &str = "unknown";

/// Unprocessed JSON body returned by the remote classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawModelOutput {
    /// A single prediction record.
    Record(Map<String, Value>),
    /// A sequence of records, or of sequences of records.
    Sequence(Vec<Value>),
    /// Anything else (numbers, strings, booleans, null).
    Other(Value),
}

impl From<Value> for RawModelOutput {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Record(map),
            Value::Array(items) => Self::Sequence(items),
            other => Self::Other(other),
        }
    }
}

impl RawModelOutput {
    /// Short description of the outer shape, for logging.
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Record(_) => "record",
            Self::Sequence(items) => match items.first() {
                Some(Value::Array(_)) => "nested sequence",
                _ => "sequence",
            },
            Self::Other(value) => json_type_name(value),
        }
    }

    /// Locate the first prediction record, unwrapping at most two sequence levels.
    pub fn top_record(&self) -> Result<&Map<String, Value>> {
        match self {
            Self::Record(record) => Ok(record),
            Self::Sequence(items) => match items.first() {
                Some(Value::Object(record)) => Ok(record),
                Some(Value::Array(inner)) => match inner.first() {
                    Some(Value::Object(record)) => Ok(record),
                    Some(other) => Err(unexpected("nested element", other)),
                    None => Err(ClaimcheckError::Parsing(
                        "nested prediction list is empty".to_string(),
                    )),
                },
                Some(other) => Err(unexpected("element", other)),
                None => Err(ClaimcheckError::Parsing(
                    "prediction list is empty".to_string(),
                )),
            },
            Self::Other(value) => Err(unexpected("response", value)),
        }
    }

    /// Extract the top prediction.
    pub fn top_prediction(&self) -> Result<Prediction> {
        Prediction::from_record(self.top_record()?)
    }
}

/// The top `(label, score)` pair reported by the model.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    pub score: f64,
}

impl Prediction {
    /// Read `label` and `score`, applying defaults for missing fields.
    ///
    /// Non-string labels use their JSON text. Scores accept numbers, booleans
    /// and numeric strings; any other type is a parsing error.
    pub fn from_record(record: &Map<String, Value>) -> Result<Self> {
        let label = match record.get("label") {
            None => UNKNOWN_LABEL.to_string(),
            Some(Value::String(label)) => label.clone(),
            Some(other) => other.to_string(),
        };

        let score = match record.get("score") {
            None => 0.0,
            Some(value) => coerce_score(value)?,
        };

        Ok(Self { label, score })
    }
}

fn coerce_score(value: &Value) -> Result<f64> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| ClaimcheckError::Parsing(format!("score {n} is not representable"))),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| {
            ClaimcheckError::Parsing(format!("could not convert string to float: '{s}'"))
        }),
        other => Err(ClaimcheckError::Parsing(format!(
            "score must be a number, got {}",
            json_type_name(other)
        ))),
    }
}

fn unexpected(position: &str, value: &Value) -> ClaimcheckError {
    ClaimcheckError::Parsing(format!(
        "unexpected {position} type in model response: {}",
        json_type_name(value)
    ))
}

/// JSON type name of `value`.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
