//! Utility modules.

/// Timestamp formatting for signed requests.
pub mod datetime;

/// Log sanitization utilities to keep response dumps bounded.
pub mod log_sanitizer;
