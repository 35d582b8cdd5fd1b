//! Keyword rule stage of the classifier.
//!
//! Deterministic, case-insensitive substring matching against three
//! fixed keyword sets. The verdict comes from an ordered rule list
//! evaluated top to bottom with early return:
//!
//!   1. delivery guard phrases force `delivery`
//!   2. any refund keyword forces `refund`
//!   3. delivery keywords without defect keywords give `delivery`
//!   4. defect keywords give `defect`
//!   5. otherwise the stage abstains and the caller falls back
//!
//! The guard exists because "marked delivered but never received" style
//! complaints routinely mention damage too and must stay with the
//! carrier-facing queue.

use desk_common::Category;

/// Refund keyword set
pub const KW_REFUND: &[&str] = &[
    "refund",
    "money back",
    "return my money",
    "charged twice",
    "overcharged",
    "cancel order",
    "cancelled order",
    "chargeback",
    "return for refund",
];

/// Delivery keyword set
pub const KW_DELIVERY: &[&str] = &[
    "delivered",
    "delivery",
    "courier",
    "driver",
    "tracking",
    "in transit",
    "shipped",
    "shipping",
    "delayed",
    "stuck",
    "wrong address",
    "left at",
    "parcel",
    "package",
    "never received",
    "not received",
    "missing package",
    "proof of delivery",
    "pod",
];

/// Defect keyword set
pub const KW_DEFECT: &[&str] = &[
    "broken",
    "cracked",
    "defective",
    "defect",
    "doesn't work",
    "not working",
    "faulty",
    "damaged",
    "dead on arrival",
    "screen issue",
    "battery issue",
    "camera issue",
    "won't turn on",
    "malfunction",
];

/// What the rule stage decided for one ticket
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    /// `None` means the rules abstained
    pub category: Option<Category>,
    /// Names of the keyword sets that matched, in refund/delivery/defect order
    pub matched: Vec<&'static str>,
}

fn any_keyword(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

/// Delivery-failure phrases that outrank normal precedence
fn delivery_guard(text: &str) -> bool {
    (text.contains("delivered")
        && (text.contains("never received") || text.contains("not received")))
        || text.contains("wrong address")
        || text.contains("in transit")
        || text.contains("tracking")
        || text.contains("missing package")
}

/// Run the keyword rules over raw ticket text.
pub fn classify(text: &str) -> RuleOutcome {
    let text = text.to_lowercase();

    let mut matched: Vec<&'static str> = Vec::new();
    if any_keyword(&text, KW_REFUND) {
        matched.push("refund");
    }
    if any_keyword(&text, KW_DELIVERY) {
        matched.push("delivery");
    }
    if any_keyword(&text, KW_DEFECT) {
        matched.push("defect");
    }

    // Ordered rules, first hit wins.
    if delivery_guard(&text) {
        return RuleOutcome {
            category: Some(Category::Delivery),
            matched,
        };
    }
    if matched.contains(&"refund") {
        return RuleOutcome {
            category: Some(Category::Refund),
            matched,
        };
    }
    if matched.contains(&"delivery") && !matched.contains(&"defect") {
        return RuleOutcome {
            category: Some(Category::Delivery),
            matched,
        };
    }
    if matched.contains(&"defect") {
        return RuleOutcome {
            category: Some(Category::Defect),
            matched,
        };
    }

    RuleOutcome {
        category: None,
        matched,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refund_keyword_wins() {
        let outcome = classify("I was charged twice and want my money back");
        assert_eq!(outcome.category, Some(Category::Refund));
        assert!(outcome.matched.contains(&"refund"));
    }

    #[test]
    fn test_refund_beats_plain_delivery() {
        let outcome = classify("Please refund me, the parcel was late");
        assert_eq!(outcome.category, Some(Category::Refund));
        assert_eq!(outcome.matched, vec!["refund", "delivery"]);
    }

    #[test]
    fn test_guard_beats_refund() {
        let outcome = classify("Tracking says delivered but I want a refund");
        assert_eq!(outcome.category, Some(Category::Delivery));
        assert!(outcome.matched.contains(&"refund"));
    }

    #[test]
    fn test_guard_beats_defect() {
        let outcome =
            classify("Package marked delivered but never received, probably damaged too");
        assert_eq!(outcome.category, Some(Category::Delivery));
        assert!(outcome.matched.contains(&"defect"));
    }

    #[test]
    fn test_delivery_and_defect_without_guard_is_defect() {
        // "package" + "damaged" but no guard phrase
        let outcome = classify("The package was damaged on arrival");
        assert_eq!(outcome.category, Some(Category::Defect));
        assert_eq!(outcome.matched, vec!["delivery", "defect"]);
    }

    #[test]
    fn test_pure_delivery() {
        let outcome = classify("Courier says the parcel is delayed");
        assert_eq!(outcome.category, Some(Category::Delivery));
        assert_eq!(outcome.matched, vec!["delivery"]);
    }

    #[test]
    fn test_pure_defect() {
        let outcome = classify("Item arrived broken and unusable");
        assert_eq!(outcome.category, Some(Category::Defect));
        assert_eq!(outcome.matched, vec!["defect"]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let outcome = classify("REFUND NOW");
        assert_eq!(outcome.category, Some(Category::Refund));
    }

    #[test]
    fn test_substring_match_inside_words() {
        // plain substring matching, no tokenization
        let outcome = classify("preferred refunds only");
        assert_eq!(outcome.category, Some(Category::Refund));
    }

    #[test]
    fn test_abstains_without_keywords() {
        let outcome = classify("How do I change my account email?");
        assert_eq!(outcome.category, None);
        assert!(outcome.matched.is_empty());
    }

    #[test]
    fn test_guard_implies_delivery_in_matched() {
        // every guard phrase is itself a delivery keyword
        for text in [
            "delivered but never received",
            "delivered yet not received",
            "sent to the wrong address",
            "it says in transit",
            "tracking is frozen",
            "missing package report",
        ] {
            let outcome = classify(text);
            assert_eq!(outcome.category, Some(Category::Delivery), "{}", text);
            assert!(outcome.matched.contains(&"delivery"), "{}", text);
        }
    }
}
