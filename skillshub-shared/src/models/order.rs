use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order lifecycle state as reported by the payment API.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Paid,
    Cancelled,
    Refunded,
    #[serde(other)]
    Unknown,
}

/// A purchase order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: uuid::Uuid,
    pub order_no: String,
    pub user_id: uuid::Uuid,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
}

/// Response carrying the external gateway URL for a pending order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentUrlResponse {
    pub payment_url: String,
    pub order_id: uuid::Uuid,
    pub order_no: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing() {
        let order: Order = serde_json::from_str(
            r#"{"id":"3fa85f64-5717-4562-b3fc-2c963f66afa6","order_no":"SO-1001",
                "user_id":"3fa85f64-5717-4562-b3fc-2c963f66afa7","status":"paid"}"#,
        )
        .expect("order should deserialize");
        assert_eq!(order.status, OrderStatus::Paid);
        assert!(order.paid_at.is_none());
    }

    #[test]
    fn test_unrecognized_status_is_unknown() {
        let order: Order = serde_json::from_str(
            r#"{"id":"3fa85f64-5717-4562-b3fc-2c963f66afa6","order_no":"SO-1002",
                "user_id":"3fa85f64-5717-4562-b3fc-2c963f66afa7","status":"disputed"}"#,
        )
        .expect("order with unknown status should deserialize");
        assert_eq!(order.status, OrderStatus::Unknown);
    }
}
