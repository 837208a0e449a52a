//! Field-rule validation for candidate orders.
//!
//! Pure functions: every rule is evaluated independently so a single pass
//! reports all violations, and a clean pass yields a fully-typed record with
//! strings trimmed and quantity parsed. The same rules run client-side in
//! the submitting form; this is the authoritative copy.

use chrono::NaiveDate;

use crate::dto::orders::{CreateOrderRequest, UpdateOrderRequest};
use crate::models::OrderStatus;

/// A validated order ready for insertion. Strings are trimmed, quantity is
/// numeric and positive.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub order_id: String,
    pub customer_name: String,
    pub product_ordered: String,
    pub quantity: f64,
    pub order_date: NaiveDate,
    pub order_status: OrderStatus,
}

/// The validated subset of fields supplied in a partial update. `None`
/// means "leave the stored value alone".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderChanges {
    pub order_id: Option<String>,
    pub customer_name: Option<String>,
    pub product_ordered: Option<String>,
    pub quantity: Option<f64>,
    pub order_date: Option<NaiveDate>,
    pub order_status: Option<OrderStatus>,
}

impl OrderChanges {
    pub fn is_empty(&self) -> bool {
        self.order_id.is_none()
            && self.customer_name.is_none()
            && self.product_ordered.is_none()
            && self.quantity.is_none()
            && self.order_date.is_none()
            && self.order_status.is_none()
    }
}

/// Check a candidate order against all six field rules. Either every rule
/// passes and the typed record comes back, or the full list of violations
/// does, in rule order.
pub fn validate_create(req: &CreateOrderRequest) -> Result<NewOrder, Vec<String>> {
    let mut errors = Vec::new();

    let order_id = non_blank(req.order_id.as_deref());
    if order_id.is_none() {
        errors.push("Order ID required".to_string());
    }

    let customer_name = non_blank(req.customer_name.as_deref());
    if customer_name.is_none() {
        errors.push("Customer name required".to_string());
    }

    let product_ordered = non_blank(req.product_ordered.as_deref());
    if product_ordered.is_none() {
        errors.push("Product ordered required".to_string());
    }

    let quantity = req.quantity.as_ref().and_then(parse_quantity);
    if quantity.is_none() {
        errors.push("Quantity must be a positive number".to_string());
    }

    if req.order_date.is_none() {
        errors.push("Order date required".to_string());
    }

    let order_status = req.order_status.as_deref().and_then(OrderStatus::parse);
    if order_status.is_none() {
        errors.push("Order status invalid".to_string());
    }

    match (
        order_id,
        customer_name,
        product_ordered,
        quantity,
        req.order_date,
        order_status,
    ) {
        (
            Some(order_id),
            Some(customer_name),
            Some(product_ordered),
            Some(quantity),
            Some(order_date),
            Some(order_status),
        ) => Ok(NewOrder {
            order_id,
            customer_name,
            product_ordered,
            quantity,
            order_date,
            order_status,
        }),
        _ => Err(errors),
    }
}

/// Apply the same rules to only the fields a partial update supplies.
/// `order_status`, if present, must still be one of the two literals.
pub fn validate_update(req: &UpdateOrderRequest) -> Result<OrderChanges, Vec<String>> {
    let mut errors = Vec::new();
    let mut changes = OrderChanges::default();

    if let Some(raw) = req.order_id.as_deref() {
        match non_blank(Some(raw)) {
            Some(v) => changes.order_id = Some(v),
            None => errors.push("Order ID required".to_string()),
        }
    }

    if let Some(raw) = req.customer_name.as_deref() {
        match non_blank(Some(raw)) {
            Some(v) => changes.customer_name = Some(v),
            None => errors.push("Customer name required".to_string()),
        }
    }

    if let Some(raw) = req.product_ordered.as_deref() {
        match non_blank(Some(raw)) {
            Some(v) => changes.product_ordered = Some(v),
            None => errors.push("Product ordered required".to_string()),
        }
    }

    if let Some(value) = req.quantity.as_ref() {
        match parse_quantity(value) {
            Some(q) => changes.quantity = Some(q),
            None => errors.push("Quantity must be a positive number".to_string()),
        }
    }

    changes.order_date = req.order_date;

    if let Some(raw) = req.order_status.as_deref() {
        match OrderStatus::parse(raw) {
            Some(s) => changes.order_status = Some(s),
            None => errors.push("Order status invalid".to_string()),
        }
    }

    if errors.is_empty() { Ok(changes) } else { Err(errors) }
}

fn non_blank(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Explicit parse of the quantity field: a JSON number, or a string holding
/// one. Valid only when finite and strictly positive; fractional values are
/// fine.
pub fn parse_quantity(value: &serde_json::Value) -> Option<f64> {
    let quantity = match value {
        serde_json::Value::Number(n) => n.as_f64()?,
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (quantity.is_finite() && quantity > 0.0).then_some(quantity)
}
