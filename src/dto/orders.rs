use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Order;

/// Candidate order as submitted by the form. Every field is optional at the
/// boundary so the validator can report all missing fields in one pass
/// instead of serde rejecting the body on the first one. `quantity` is kept
/// as a raw JSON value because the form posts it as a string while API
/// clients send a number; the validator parses it explicitly.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub order_id: Option<String>,
    pub customer_name: Option<String>,
    pub product_ordered: Option<String>,
    #[schema(value_type = Option<String>)]
    pub quantity: Option<serde_json::Value>,
    pub order_date: Option<NaiveDate>,
    pub order_status: Option<String>,
}

/// Partial update body. Unknown keys are dropped by serde rather than
/// rejected; omitted fields keep their stored values.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateOrderRequest {
    pub order_id: Option<String>,
    pub customer_name: Option<String>,
    pub product_ordered: Option<String>,
    #[schema(value_type = Option<String>)]
    pub quantity: Option<serde_json::Value>,
    pub order_date: Option<NaiveDate>,
    pub order_status: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderList {
    pub items: Vec<Order>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_keys_are_ignored() {
        let req: UpdateOrderRequest = serde_json::from_value(json!({
            "order_status": "Completed",
            "priority": "high",
            "notes": 42
        }))
        .unwrap();

        assert_eq!(req.order_status.as_deref(), Some("Completed"));
        assert!(req.order_id.is_none());
    }

    #[test]
    fn quantity_accepts_string_or_number() {
        let as_string: CreateOrderRequest =
            serde_json::from_value(json!({ "quantity": "3" })).unwrap();
        let as_number: CreateOrderRequest =
            serde_json::from_value(json!({ "quantity": 3 })).unwrap();

        assert!(as_string.quantity.is_some());
        assert!(as_number.quantity.is_some());
    }
}
