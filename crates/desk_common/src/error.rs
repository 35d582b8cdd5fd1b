//! Error types for the helpdesk agent.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("Order ID must look like ORD-1001 (ORD- + 3+ digits): got '{0}'")]
    InvalidOrderId(String),

    #[error("Ticket text must be at least {min} characters: got {got}")]
    TextTooShort { min: usize, got: usize },

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
