//! Observability for formguard
//!
//! Structured JSON logging only:
//! - one line per event, synchronous, unbuffered
//! - deterministic key ordering
//! - no side effects on descriptor builds

pub mod logger;

pub use logger::Severity;
