use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The two order states. The table column is a Postgres enum with the same
/// two labels; there is no transition policy, either value may be written
/// at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "order_status")]
pub enum OrderStatus {
    Pending,
    Completed,
}

impl OrderStatus {
    /// Parse one of the two exact literals; anything else is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Pending" => Some(Self::Pending),
            "Completed" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Order {
    /// System-assigned row id; the only key used for update/delete.
    pub id: i64,
    /// User-supplied business key, unique across all orders.
    pub order_id: String,
    pub customer_name: String,
    pub product_ordered: String,
    pub quantity: f64,
    pub order_date: NaiveDate,
    pub order_status: OrderStatus,
    pub created_at: DateTime<Utc>,
}
