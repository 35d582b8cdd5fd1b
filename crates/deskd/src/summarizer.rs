//! Ticket summarization.
//!
//! Primary path asks the generative backend for one short sentence and
//! keeps only the first sentence of whatever comes back. Any failure,
//! including blank output, falls back to truncating the ticket text
//! itself. A non-empty ticket therefore always gets a non-empty summary.

use crate::llm::Generate;
use crate::prompts;
use tracing::warn;

/// Word budget for the deterministic fallback
pub const FALLBACK_WORD_LIMIT: usize = 20;

/// Summarize ticket text in one short sentence.
pub async fn summarize(llm: &dyn Generate, text: &str) -> String {
    match llm.generate(&prompts::summary_prompt(text)).await {
        Ok(out) => {
            let sentence = first_sentence(out.trim());
            if sentence.is_empty() {
                truncate_words(text, FALLBACK_WORD_LIMIT)
            } else {
                sentence.to_string()
            }
        }
        Err(e) => {
            warn!("Summary generation failed, using truncation: {}", e);
            truncate_words(text, FALLBACK_WORD_LIMIT)
        }
    }
}

/// Deterministic summary for deployments running without a backend.
pub fn summarize_offline(text: &str) -> String {
    truncate_words(text, FALLBACK_WORD_LIMIT)
}

/// Cut at the first sentence-ending punctuation mark that is followed
/// by whitespace. Text without such a boundary passes through whole, so
/// a trailing "." does not truncate anything.
pub fn first_sentence(text: &str) -> &str {
    let mut chars = text.char_indices().peekable();
    while let Some((idx, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?') {
            if let Some(&(_, next)) = chars.peek() {
                if next.is_whitespace() {
                    return &text[..idx + c.len_utf8()];
                }
            }
        }
    }
    text
}

/// First `limit` whitespace-separated words, with an ellipsis when the
/// text had more.
pub fn truncate_words(text: &str, limit: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut summary = words
        .iter()
        .take(limit)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    if words.len() > limit {
        summary.push_str("...");
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use desk_common::DeskError;

    struct Scripted(&'static str);

    #[async_trait]
    impl Generate for Scripted {
        async fn generate(&self, _prompt: &str) -> Result<String, DeskError> {
            Ok(self.0.to_string())
        }
    }

    struct Failing;

    #[async_trait]
    impl Generate for Failing {
        async fn generate(&self, _prompt: &str) -> Result<String, DeskError> {
            Err(DeskError::Llm("connection refused".into()))
        }
    }

    #[test]
    fn test_first_sentence_cuts_at_boundary() {
        assert_eq!(
            first_sentence("Parcel is lost. Customer is angry."),
            "Parcel is lost."
        );
    }

    #[test]
    fn test_first_sentence_keeps_trailing_punctuation() {
        assert_eq!(first_sentence("Parcel is lost."), "Parcel is lost.");
    }

    #[test]
    fn test_first_sentence_without_boundary_passes_through() {
        assert_eq!(first_sentence("no punctuation at all"), "no punctuation at all");
    }

    #[test]
    fn test_first_sentence_handles_stacked_punctuation() {
        assert_eq!(first_sentence("What?! Then it broke."), "What?!");
    }

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate_words("only four words here", 20), "only four words here");
    }

    #[test]
    fn test_truncate_adds_ellipsis_past_limit() {
        let text = "w ".repeat(25);
        let out = truncate_words(&text, 20);
        assert!(out.ends_with("..."));
        assert_eq!(out.split_whitespace().count(), 20);
    }

    #[test]
    fn test_truncate_exact_limit_has_no_ellipsis() {
        let text = vec!["word"; 20].join(" ");
        let out = truncate_words(&text, 20);
        assert!(!out.ends_with("..."));
    }

    #[tokio::test]
    async fn test_summarize_keeps_first_sentence_only() {
        let out = summarize(&Scripted("Refund requested. Also angry."), "whatever text").await;
        assert_eq!(out, "Refund requested.");
    }

    #[tokio::test]
    async fn test_summarize_falls_back_on_error() {
        let out = summarize(&Failing, "My package never arrived and I would like help").await;
        assert_eq!(out, "My package never arrived and I would like help");
    }

    #[tokio::test]
    async fn test_summarize_falls_back_on_blank_output() {
        let out = summarize(&Scripted("   "), "Ticket body words").await;
        assert_eq!(out, "Ticket body words");
    }

    #[tokio::test]
    async fn test_fallback_truncates_long_tickets() {
        let text = vec!["word"; 30].join(" ");
        let out = summarize(&Failing, &text).await;
        assert_eq!(out.split_whitespace().count(), 20);
        assert!(out.ends_with("..."));
    }
}
