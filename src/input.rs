//! Request parsing for the command-line front end.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when parsing a request.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("unknown operation: {0}")]
    UnknownOp(String),
}

/// The raw JSON request read from stdin.
#[derive(Debug, Clone, Deserialize)]
struct RawRequest {
    /// The operation to run ("split", "escape" or "join").
    op: String,

    /// Line to split.
    #[serde(default)]
    line: Option<String>,

    /// Value to escape; any JSON value is accepted.
    #[serde(default)]
    value: Option<Value>,

    /// Arguments to join.
    #[serde(default)]
    words: Option<Vec<Value>>,
}

/// A validated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Split a line into words.
    Split { line: String },
    /// Escape a single word.
    Escape { value: String },
    /// Escape and join a list of words.
    Join { words: Vec<String> },
}

impl Request {
    /// Parse from JSON string.
    pub fn parse(json: &str) -> Result<Self, InputError> {
        let raw: RawRequest = serde_json::from_str(json)?;
        match raw.op.as_str() {
            "split" => {
                let line = raw.line.ok_or(InputError::MissingField("line"))?;
                Ok(Request::Split { line })
            }
            "escape" => {
                let value = raw.value.ok_or(InputError::MissingField("value"))?;
                Ok(Request::Escape {
                    value: coerce(value),
                })
            }
            "join" => {
                let words = raw.words.ok_or(InputError::MissingField("words"))?;
                Ok(Request::Join {
                    words: words.into_iter().map(coerce).collect(),
                })
            }
            other => Err(InputError::UnknownOp(other.to_string())),
        }
    }

    /// Name of the operation.
    pub fn op(&self) -> &'static str {
        match self {
            Request::Split { .. } => "split",
            Request::Escape { .. } => "escape",
            Request::Join { .. } => "join",
        }
    }

    /// Plain-text rendering of the request input.
    pub fn summary(&self) -> String {
        match self {
            Request::Split { line } => line.clone(),
            Request::Escape { value } => value.clone(),
            Request::Join { words } => words.join(" "),
        }
    }
}

/// JSON strings are taken as-is; anything else becomes its JSON text.
fn coerce(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
