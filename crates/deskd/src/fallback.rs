//! Fallback classification for tickets the keyword rules abstain on.
//!
//! Two interchangeable backends. The generative path sends one label
//! prompt and scrapes the reply; deployments without a generative
//! backend can plug in a trained category model instead. Either way the
//! raw label goes through `normalize_label` and failures degrade to
//! `other`, so every ticket leaves with a category.

use crate::llm::Generate;
use crate::prompts;
use desk_common::{normalize_label, Category, DeskError};
use tracing::warn;

/// Trained text-category model consumed as a black box.
///
/// `predict` returns whatever label vocabulary the model was trained
/// with; normalization into the closed category set happens here, not
/// in the model.
pub trait CategoryModel: Send + Sync {
    fn predict(&self, text: &str) -> Result<String, DeskError>;
}

/// Classify via the generative backend.
///
/// Returns the raw label for the diagnostics trace alongside the
/// normalized category.
pub async fn llm_label(llm: &dyn Generate, text: &str) -> (String, Category) {
    let raw = match llm.generate(&prompts::label_prompt(text)).await {
        Ok(out) => out.trim().to_string(),
        Err(e) => {
            warn!("Label generation failed, degrading to 'other': {}", e);
            "other".to_string()
        }
    };
    let category = normalize_label(&raw);
    (raw, category)
}

/// Classify via a trained model.
pub fn model_label(model: &dyn CategoryModel, text: &str) -> Category {
    match model.predict(text) {
        Ok(label) => normalize_label(&label),
        Err(e) => {
            warn!("Category model failed, degrading to 'other': {}", e);
            Category::Other
        }
    }
}
