//! Wire schemas for the helpdesk agent HTTP API.
//!
//! Field names are part of the API contract and must not change: the
//! form client and the CLI both read them verbatim.

use crate::category::Category;
use crate::trace::TicketTrace;
use serde::{Deserialize, Serialize};

/// Minimum accepted ticket text length, in characters
pub const MIN_TICKET_TEXT_CHARS: usize = 5;

/// Request body for `POST /analyze_ticket`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Optional order id, e.g. ORD-1001
    pub order_id: Option<String>,
    /// Raw ticket text from email or chat
    pub text: String,
}

/// Response for one analyzed ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketResponse {
    pub summary: String,
    pub category: Category,
    pub suggested_response: String,
    pub trace: TicketTrace,
}

/// Status record for one order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderInfo {
    pub order_id: String,
    pub status: String,
    pub last_update: String,
    pub carrier: Option<String>,
    pub tracking: Option<String>,
    #[serde(default = "default_exists")]
    pub exists: bool,
}

fn default_exists() -> bool {
    true
}

impl OrderInfo {
    /// Sentinel record for ids not present in the directory
    pub fn missing(order_id: &str) -> Self {
        Self {
            order_id: order_id.to_string(),
            status: "unknown".to_string(),
            last_update: "-".to_string(),
            carrier: None,
            tracking: None,
            exists: false,
        }
    }
}

/// Response for `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Structured body for rejected requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sentinel_shape() {
        let order = OrderInfo::missing("ORD-9999");
        assert!(!order.exists);
        assert_eq!(order.status, "unknown");
        assert_eq!(order.last_update, "-");
        assert!(order.carrier.is_none());
    }

    #[test]
    fn test_order_info_exists_defaults_true() {
        let json = r#"{"order_id":"ORD-1003","status":"processing","last_update":"2025-09-02","carrier":null,"tracking":null}"#;
        let order: OrderInfo = serde_json::from_str(json).unwrap();
        assert!(order.exists);
    }

    #[test]
    fn test_analyze_request_order_id_optional() {
        let req: AnalyzeRequest =
            serde_json::from_str(r#"{"text":"my parcel is late"}"#).unwrap();
        assert!(req.order_id.is_none());
        assert_eq!(req.text, "my parcel is late");
    }
}
