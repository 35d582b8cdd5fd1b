//! Prompt construction for the generative capability.
//!
//! Two prompts, both deliberately terse. The summary prompt asks for a
//! single sentence so the first-sentence cut in the summarizer rarely
//! discards anything. The label prompt asks for a bare word so the
//! normalizer has as little to scrape as possible.

/// One-sentence summary instruction
pub fn summary_prompt(text: &str) -> String {
    format!(
        "Summarize the customer's ticket in one short sentence. \
         No greeting. No extra details.\n\
         Ticket:\n{}\n\
         Summary:",
        text
    )
}

/// Single-word category label instruction
pub fn label_prompt(text: &str) -> String {
    format!(
        "Classify the ticket into one of: refund, delivery, defect, other. \
         Return ONLY a single word label (no punctuation, no quotes).\n\n\
         Ticket:\n{}\n\n\
         Label:",
        text
    )
}
