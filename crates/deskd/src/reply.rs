//! Suggested-reply composition.
//!
//! Each category has a fixed sentence list; the only order-aware part is
//! the opening status line. Delivery and refund swap in a "please share
//! your Order ID" opener when no id was available, defect and other
//! simply omit the opener. Every list is capped before joining so a
//! reply can never grow past its category's budget.

use desk_common::{Category, OrderInfo};

const DELIVERY_SENTENCE_CAP: usize = 5;
const REFUND_SENTENCE_CAP: usize = 5;
const DEFECT_SENTENCE_CAP: usize = 5;
const OTHER_SENTENCE_CAP: usize = 4;

const DELIVERY_NO_ID_OPENER: &str =
    "No Order ID provided. Please share your Order ID so we can review tracking scans and delivery events.";

const DELIVERY_FOLLOWUPS: &[&str] = &[
    "We’ll check the latest courier updates and verify proof-of-delivery if applicable.",
    "If it was marked delivered but not received, we’ll request GPS/photo confirmation and coordinate with the carrier.",
    "Please confirm the shipping address and check with neighbors or building security.",
    "We’ll update you within 24–48 hours with next steps, including a replacement or refund if the parcel cannot be located.",
];

const REFUND_NO_ID_OPENER: &str =
    "No Order ID provided. To start the refund review, please include your Order ID to verify eligibility.";

const REFUND_FOLLOWUPS: &[&str] = &[
    "We’ll email return instructions and an RMA number for tracking.",
    "After inspection, refunds are issued to the original payment method.",
    "You’ll receive a confirmation email with the expected time frame.",
];

const DEFECT_FOLLOWUPS: &[&str] = &[
    "Sorry to hear there’s a product issue.",
    "Please share clear photos or a short video of the defect so we can validate the claim quickly.",
    "We can arrange a replacement or repair and will send a prepaid return label if needed.",
    "If you have your Order ID handy, include it to speed up verification; otherwise a receipt or serial number also helps.",
];

const OTHER_FOLLOWUPS: &[&str] = &[
    "Thanks for reaching out. Please share a few more details about your request.",
    "We’ll triage the issue and guide you through the right next steps.",
    "If this relates to delivery or a refund, including your Order ID helps us look it up quickly.",
];

/// Opening sentence describing the order lookup result.
///
/// Empty when no order was resolved. Unknown orders get a "noted but
/// not located" line; known orders get id, status and last update, plus
/// carrier and tracking when both are present.
pub fn order_status_line(order: Option<&OrderInfo>) -> String {
    let Some(order) = order else {
        return String::new();
    };
    if !order.exists || order.status == "unknown" {
        return format!(
            "Order ID {} noted. We could not locate this order in our system yet.",
            order.order_id
        );
    }
    let mut line = format!(
        "Order ID {} noted. Our system shows the order status as '{}' (last update {}).",
        order.order_id, order.status, order.last_update
    );
    if let (Some(carrier), Some(tracking)) = (&order.carrier, &order.tracking) {
        line.push_str(&format!(" Carrier: {}, Tracking: {}.", carrier, tracking));
    }
    line
}

fn join_capped(lines: &[String], cap: usize) -> String {
    lines
        .iter()
        .take(cap)
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Compose the suggested reply for a classified ticket.
pub fn compose(category: Category, order: Option<&OrderInfo>, had_order_id: bool) -> String {
    let mut lines: Vec<String> = Vec::new();

    match category {
        Category::Delivery => {
            if had_order_id && order.is_some() {
                lines.push(order_status_line(order));
            } else {
                lines.push(DELIVERY_NO_ID_OPENER.to_string());
            }
            lines.extend(DELIVERY_FOLLOWUPS.iter().map(|s| s.to_string()));
            join_capped(&lines, DELIVERY_SENTENCE_CAP)
        }
        Category::Refund => {
            if had_order_id && order.is_some() {
                lines.push(order_status_line(order));
            } else {
                lines.push(REFUND_NO_ID_OPENER.to_string());
            }
            lines.extend(REFUND_FOLLOWUPS.iter().map(|s| s.to_string()));
            join_capped(&lines, REFUND_SENTENCE_CAP)
        }
        Category::Defect => {
            if had_order_id && order.is_some() {
                lines.push(order_status_line(order));
            }
            lines.extend(DEFECT_FOLLOWUPS.iter().map(|s| s.to_string()));
            join_capped(&lines, DEFECT_SENTENCE_CAP)
        }
        Category::Other => {
            if had_order_id && order.is_some() {
                lines.push(order_status_line(order));
            }
            lines.extend(OTHER_FOLLOWUPS.iter().map(|s| s.to_string()));
            join_capped(&lines, OTHER_SENTENCE_CAP)
        }
    }
}
