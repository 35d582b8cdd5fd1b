//! HTTP client for communicating with deskd.

use anyhow::{anyhow, Result};
use desk_common::{
    AnalyzeRequest, ErrorResponse, HealthResponse, OrderInfo, TicketResponse, DEFAULT_HTTP_ADDR,
};
use std::time::Duration;

/// Client for one deskd instance
pub struct DeskClient {
    base_url: String,
    http: reqwest::Client,
}

impl DeskClient {
    /// Resolve the daemon URL from the --url flag, $DESKD_URL, or the
    /// builtin default, in that order.
    pub fn new(url_flag: Option<String>) -> Result<Self> {
        let base_url = url_flag
            .or_else(|| std::env::var("DESKD_URL").ok())
            .unwrap_or_else(|| format!("http://{}", DEFAULT_HTTP_ADDR));

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn unreachable_hint(&self, e: reqwest::Error) -> anyhow::Error {
        anyhow!(
            "Cannot reach deskd at {}: {}\n\n\
             The daemon may not be running. Start it with:\n\
             deskd",
            self.base_url,
            e
        )
    }

    /// Turn a non-2xx response into the server's own error message
    async fn api_error(resp: reqwest::Response) -> anyhow::Error {
        let status = resp.status();
        match resp.json::<ErrorResponse>().await {
            Ok(body) => anyhow!("{} ({})", body.error, status),
            Err(_) => anyhow!("Request failed with status {}", status),
        }
    }

    pub async fn health(&self) -> Result<HealthResponse> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .map_err(|e| self.unreachable_hint(e))?;

        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        Ok(resp.json().await?)
    }

    pub async fn order(&self, order_id: &str) -> Result<OrderInfo> {
        let resp = self
            .http
            .get(format!("{}/orders/{}", self.base_url, order_id))
            .send()
            .await
            .map_err(|e| self.unreachable_hint(e))?;

        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        Ok(resp.json().await?)
    }

    pub async fn analyze(&self, order_id: Option<String>, text: &str) -> Result<TicketResponse> {
        let request = AnalyzeRequest {
            order_id,
            text: text.to_string(),
        };

        let resp = self
            .http
            .post(format!("{}/analyze_ticket", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| self.unreachable_hint(e))?;

        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        Ok(resp.json().await?)
    }
}
