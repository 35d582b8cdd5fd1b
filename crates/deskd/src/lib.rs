//! Desk daemon library - exposes modules for testing.

pub mod config;
pub mod fallback;
pub mod llm;
pub mod ollama;
pub mod order_id;
pub mod orders;
pub mod pipeline;
pub mod prompts;
pub mod reply;
pub mod routes;
pub mod rules;
pub mod server;
pub mod summarizer;
