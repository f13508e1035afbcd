//! JSON serialization for verdicts.

use crate::result::Verdict;

/// Serialize a Verdict to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for Verdict).
pub fn to_json(verdict: &Verdict) -> Result<String, serde_json::Error> {
    serde_json::to_string(verdict)
}

/// Serialize a Verdict to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for Verdict).
pub fn to_json_pretty(verdict: &Verdict) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(verdict)
}
