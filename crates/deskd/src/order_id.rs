//! Order id validation and extraction.
//!
//! Two entry points with different strictness. `normalize_strict` gates
//! the structured request field: the whole value must be an order id or
//! the request is rejected. `extract_from_text` mines free ticket text
//! and treats absence as a normal outcome. Both canonicalize accepted
//! ids to `ORD-<digits>` so lookups and traces agree on one spelling.

use desk_common::DeskError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Whole-string pattern for the structured order_id field
static ORDER_ID_STRICT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^ord[-\s]?(\d{3,})$").unwrap());

/// Word-bounded pattern for ids embedded in free text
static ORDER_ID_IN_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bord[-\s]?(\d{3,})\b").unwrap());

/// Validate a structured order id and canonicalize it.
///
/// Accepts `ORD-1001`, `ord1001` or `ORD 1001` (any case, at least
/// three digits). Anything else is an `InvalidOrderId`.
pub fn normalize_strict(raw: &str) -> Result<String, DeskError> {
    match ORDER_ID_STRICT.captures(raw.trim()) {
        Some(caps) => Ok(format!("ORD-{}", &caps[1])),
        None => Err(DeskError::InvalidOrderId(raw.to_string())),
    }
}

/// Pull the first order id out of free text, canonicalized.
pub fn extract_from_text(text: &str) -> Option<String> {
    ORDER_ID_IN_TEXT
        .captures(text)
        .map(|caps| format!("ORD-{}", &caps[1]))
}
