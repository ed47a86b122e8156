//! Utility modules.

/// Log sanitization to keep personal data out of full-length log lines.
pub mod log_sanitizer;
