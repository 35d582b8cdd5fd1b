//! Classification trace for auditable ticket decisions.
//!
//! Records which path produced the category, which keyword sets matched,
//! and how the order id was resolved. Purely observational: the trace
//! carries no authority over the final category. Every value serializes
//! as a string or null so the UI can display it unchanged.

use serde::{Deserialize, Serialize};

/// Which path decided the final category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategorySource {
    /// A keyword rule fired
    Rules,
    /// The generative fallback ran
    Llm,
    /// The trained classifier was consulted (no-LLM deployments)
    Model,
}

impl std::fmt::Display for CategorySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Rules => "rules",
            Self::Llm => "llm",
            Self::Model => "model",
        };
        write!(f, "{}", s)
    }
}

/// Diagnostic record for one analyzed ticket.
///
/// Built once from pipeline locals and never mutated afterwards. Keys
/// are always present on the wire; absent values serialize as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketTrace {
    /// Path that produced the final category
    pub category_source: CategorySource,
    /// Comma-joined labels of the keyword sets that matched, if any
    pub matched_keywords: Option<String>,
    /// Raw generative output, present only when the fallback ran
    pub llm_raw: Option<String>,
    /// Canonicalized structured-input order id
    pub order_id_input: Option<String>,
    /// Order id recovered from free text, when extraction ran
    pub order_id_extracted: Option<String>,
    /// Order id the pipeline actually used
    pub order_id_effective: Option<String>,
    /// Whether any order id was available, rendered as "true"/"false"
    pub had_order_id: String,
    /// Whether the looked-up order exists, present only after a lookup
    pub order_exists: Option<String>,
}
