//! Audit logging for handled requests.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::input::Request;
use crate::outcome::Outcome;

const MAX_SUMMARY_LEN: usize = 200;

/// An audit log entry.
#[derive(Debug, Serialize)]
pub struct AuditEntry {
    /// Timestamp of the request.
    pub timestamp: DateTime<Utc>,
    /// Operation that was run.
    pub op: &'static str,
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Failure reason (if rejected).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Summary of the request input.
    pub summary: String,
}

impl AuditEntry {
    /// Create a new audit entry from a request and its outcome.
    pub fn new(request: &Request, outcome: &Outcome) -> Self {
        Self {
            timestamp: Utc::now(),
            op: request.op(),
            ok: !outcome.is_rejected(),
            error: outcome.reject_info().map(|info| info.reason.clone()),
            summary: truncate_string(&request.summary(), MAX_SUMMARY_LEN),
        }
    }
}

fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut end = max_len - 3;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}

/// Audit logger for writing entries to a file.
pub struct AuditLogger {
    file: File,
}

impl AuditLogger {
    /// Open or create an audit log file.
    pub fn open(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file })
    }

    /// Write an audit entry to the log.
    pub fn log(&mut self, entry: &AuditEntry) -> std::io::Result<()> {
        let json = serde_json::to_string(entry)?;
        writeln!(self.file, "{}", json)?;
        self.file.flush()
    }

    /// Log the outcome of a request.
    pub fn log_outcome(&mut self, request: &Request, outcome: &Outcome) -> std::io::Result<()> {
        let entry = AuditEntry::new(request, outcome);
        self.log(&entry)
    }
}
