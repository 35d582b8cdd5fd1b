//! Order directory.
//!
//! Read-only mapping from order id to status record. Ships with a small
//! builtin seed; deployments can point `[orders].seed_path` at a JSON
//! file instead. Lookups never fail: unknown ids come back as the
//! non-existent sentinel so templates can still acknowledge the id.

use desk_common::{DeskError, OrderInfo};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct OrderDirectory {
    records: HashMap<String, OrderInfo>,
}

fn seed(
    order_id: &str,
    status: &str,
    last_update: &str,
    carrier: Option<&str>,
    tracking: Option<&str>,
) -> OrderInfo {
    OrderInfo {
        order_id: order_id.to_string(),
        status: status.to_string(),
        last_update: last_update.to_string(),
        carrier: carrier.map(|s| s.to_string()),
        tracking: tracking.map(|s| s.to_string()),
        exists: true,
    }
}

impl OrderDirectory {
    /// Builtin seed used when no orders file is configured
    pub fn builtin() -> Self {
        let records = [
            seed("ORD-1001", "shipped", "2025-09-01", Some("DHL"), Some("DHL123456")),
            seed("ORD-1002", "delivered", "2025-08-30", Some("UPS"), Some("1Z999")),
            seed("ORD-1003", "processing", "2025-09-02", None, None),
            seed("ORD-1004", "in transit", "2025-09-02", Some("FedEx"), Some("FDX555888")),
            seed("ORD-2001", "returned", "2025-08-25", None, None),
        ];
        Self {
            records: records
                .into_iter()
                .map(|r| (r.order_id.clone(), r))
                .collect(),
        }
    }

    /// Load records from a JSON file holding a list of order records.
    ///
    /// Records omitting `exists` are treated as existing.
    pub fn from_path(path: &Path) -> Result<Self, DeskError> {
        let data = std::fs::read_to_string(path)?;
        let list: Vec<OrderInfo> = serde_json::from_str(&data)?;
        Ok(Self {
            records: list
                .into_iter()
                .map(|r| (r.order_id.clone(), r))
                .collect(),
        })
    }

    /// Look up an order id, passed through verbatim.
    pub fn lookup(&self, order_id: &str) -> OrderInfo {
        self.records
            .get(order_id)
            .cloned()
            .unwrap_or_else(|| OrderInfo::missing(order_id))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
