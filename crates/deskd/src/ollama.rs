//! Ollama-backed implementation of the generation seam.
//!
//! Talks to a local Ollama instance over its HTTP API. Generation goes
//! through `/api/generate` with streaming disabled and temperature
//! pinned to zero so repeated tickets classify the same way.

use crate::llm::Generate;
use async_trait::async_trait;
use desk_common::DeskError;
use std::time::Duration;

/// Client for one Ollama instance
#[derive(Debug, Clone)]
pub struct OllamaClient {
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl OllamaClient {
    pub fn new(base_url: &str, model: &str, timeout_secs: u64) -> Result<Self, DeskError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| DeskError::Llm(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            client,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Check if the Ollama service answers at all
    pub async fn is_running(&self) -> bool {
        self.client
            .get(format!("{}/api/tags", self.base_url))
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    /// Check if the configured model is available locally
    pub async fn has_model(&self) -> bool {
        let response = self
            .client
            .get(format!("{}/api/tags", self.base_url))
            .send()
            .await;

        match response {
            Ok(resp) => {
                if let Ok(json) = resp.json::<serde_json::Value>().await {
                    if let Some(models) = json.get("models").and_then(|m| m.as_array()) {
                        return models.iter().any(|m| {
                            m.get("name")
                                .and_then(|n| n.as_str())
                                .map(|n| n.starts_with(&self.model))
                                .unwrap_or(false)
                        });
                    }
                }
                false
            }
            Err(_) => false,
        }
    }
}

#[async_trait]
impl Generate for OllamaClient {
    async fn generate(&self, prompt: &str) -> Result<String, DeskError> {
        let body = serde_json::json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false,
            "options": { "temperature": 0.0 }
        });

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| DeskError::Llm(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DeskError::Llm(format!(
                "Ollama request failed: {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| DeskError::Llm(e.to_string()))?;
        let response_text = json
            .get("response")
            .and_then(|r| r.as_str())
            .unwrap_or("")
            .to_string();

        Ok(response_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = OllamaClient::new("http://127.0.0.1:11434/", "llama3.2:3b", 5).unwrap();
        assert_eq!(client.base_url, "http://127.0.0.1:11434");
    }

    #[test]
    fn test_model_accessor() {
        let client = OllamaClient::new("http://127.0.0.1:11434", "llama3.2:3b", 5).unwrap();
        assert_eq!(client.model(), "llama3.2:3b");
    }
}
