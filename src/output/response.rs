//! Response formatting for command-line output.

use crate::outcome::{Outcome, RejectInfo};
use serde::Serialize;

/// JSON response for a successful split.
#[derive(Debug, Serialize)]
pub struct WordsResponse<'a> {
    pub words: &'a [String],
}

/// JSON response for a successful escape or join.
#[derive(Debug, Serialize)]
pub struct LineResponse<'a> {
    pub line: &'a str,
}

/// JSON response for rejected input.
#[derive(Debug, Serialize)]
pub struct ErrorResponse<'a> {
    pub error: &'a str,
    pub input: &'a str,
}

/// Format an outcome as JSON. Rejections belong on stderr, everything else
/// on stdout.
pub fn format_response(outcome: &Outcome, pretty: bool) -> String {
    match outcome {
        Outcome::Words(words) => to_json(&WordsResponse { words }, pretty),
        Outcome::Line(line) => to_json(&LineResponse { line }, pretty),
        Outcome::Rejected(info) => format_error(info, pretty),
    }
}

fn format_error(info: &RejectInfo, pretty: bool) -> String {
    let response = ErrorResponse {
        error: &info.reason,
        input: &info.input,
    };
    to_json(&response, pretty)
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> String {
    let result = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    // Plain structs of strings always serialize
    result.unwrap_or_default()
}
