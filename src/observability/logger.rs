//! Structured JSON logger for formguard
//!
//! - one log line = one event
//! - synchronous writes, no buffering
//! - deterministic key ordering (event, severity, then fields sorted by key)
//!
//! JSON is assembled by hand so key ordering stays deterministic without
//! depending on map iteration order.

use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Diagnostic detail (e.g. composition cycle guards)
    Trace = 0,
    /// Normal operations
    Info = 1,
    /// Recoverable issues
    Warn = 2,
    /// Operation failures
    Error = 3,
    /// Unrecoverable, process exits
    Fatal = 4,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Emits one structured event line to the given writer
pub fn write_event<W: Write>(
    writer: &mut W,
    severity: Severity,
    event: &str,
    fields: &[(&str, &str)],
) {
    let mut line = String::with_capacity(128);
    line.push_str("{\"event\":\"");
    escape_into(&mut line, event);
    line.push_str("\",\"severity\":\"");
    line.push_str(severity.as_str());
    line.push('"');

    let mut sorted: Vec<_> = fields.iter().collect();
    sorted.sort_by_key(|(k, _)| *k);
    for (key, value) in sorted {
        line.push_str(",\"");
        escape_into(&mut line, key);
        line.push_str("\":\"");
        escape_into(&mut line, value);
        line.push('"');
    }

    line.push_str("}\n");
    let _ = writer.write_all(line.as_bytes());
    let _ = writer.flush();
}

/// Escapes a string for embedding in a JSON value
fn escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
}

/// Logs a TRACE event to stdout
pub fn trace(event: &str, fields: &[(&str, &str)]) {
    write_event(&mut io::stdout(), Severity::Trace, event, fields);
}

/// Logs an INFO event to stdout
pub fn info(event: &str, fields: &[(&str, &str)]) {
    write_event(&mut io::stdout(), Severity::Info, event, fields);
}

/// Logs a WARN event to stdout
pub fn warn(event: &str, fields: &[(&str, &str)]) {
    write_event(&mut io::stdout(), Severity::Warn, event, fields);
}

/// Logs an ERROR event to stderr
pub fn error(event: &str, fields: &[(&str, &str)]) {
    write_event(&mut io::stderr(), Severity::Error, event, fields);
}

/// Logs a FATAL event to stderr
pub fn fatal(event: &str, fields: &[(&str, &str)]) {
    write_event(&mut io::stderr(), Severity::Fatal, event, fields);
}
