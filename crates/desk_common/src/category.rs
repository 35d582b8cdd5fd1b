//! The closed ticket category set.
//!
//! Every analyzed ticket resolves to exactly one category. Anything a
//! model emits outside the set is normalized to `Other`.

use serde::{Deserialize, Serialize};

/// Ticket category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Refund,
    Delivery,
    Defect,
    Other,
}

impl Category {
    /// Wire form of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Refund => "refund",
            Self::Delivery => "delivery",
            Self::Defect => "defect",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Normalize a raw model label into the closed set.
///
/// Substring matching protects against verbose or malformed output:
/// a mention of "refund" anywhere wins, then delivery terms, then
/// defect terms, else `Other`.
pub fn normalize_label(raw: &str) -> Category {
    let lbl = raw.trim().to_lowercase();
    if lbl.contains("refund") {
        return Category::Refund;
    }
    if lbl.contains("deliver") || lbl.contains("shipping") {
        return Category::Delivery;
    }
    if lbl.contains("defect") || lbl.contains("broken") || lbl.contains("fault") {
        return Category::Defect;
    }
    Category::Other
}
