//! Outcome types for request handling.

use serde::Serialize;

/// The result of running a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Words produced by a split.
    Words(Vec<String>),
    /// A shell-safe line produced by escape or join.
    Line(String),
    /// The input was rejected.
    Rejected(RejectInfo),
}

/// Information about why an input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectInfo {
    /// Short description of the failure.
    pub reason: String,
    /// The rejected input.
    pub input: String,
}

impl RejectInfo {
    pub fn new(reason: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            input: input.into(),
        }
    }
}

impl Outcome {
    /// Create a rejected outcome.
    pub fn reject(reason: impl Into<String>, input: impl Into<String>) -> Self {
        Outcome::Rejected(RejectInfo::new(reason, input))
    }

    /// Check if the input was rejected.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }

    /// Get the reject info if rejected.
    pub fn reject_info(&self) -> Option<&RejectInfo> {
        match self {
            Outcome::Rejected(info) => Some(info),
            Outcome::Words(_) | Outcome::Line(_) => None,
        }
    }
}
