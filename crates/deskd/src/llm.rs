//! Generation seam between the pipeline and the model backend.
//!
//! The pipeline talks to this trait, never to a concrete client. Tests
//! plug in scripted implementations; production wires up the Ollama
//! client from `crate::ollama`.

use async_trait::async_trait;
use desk_common::DeskError;

/// External text-generation capability.
///
/// One best-effort call per prompt, no retries. Callers own their own
/// degradation: every use site has a deterministic fallback.
#[async_trait]
pub trait Generate: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, DeskError>;
}
