use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::actor_framework::RecordId;

pub const ORDER_STATUSES: [&str; 5] = ["pending", "paid", "shipped", "completed", "cancelled"];
pub const ORDER_STATUS_PENDING: &str = "pending";
pub const ORDER_STATUS_CANCELLED: &str = "cancelled";

/// A customer order. Customer details are a snapshot taken when the order was placed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: RecordId,
    pub order_no: String,
    pub customer_name: String,
    pub customer_email: String,
    /// Sum of item subtotals at creation; never recomputed.
    pub total_amount: f64,
    pub status: String,
    pub payment_method: String,
    pub items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    pub id: RecordId,
    pub product_name: String,
    pub sku: String,
    pub quantity: u32,
    pub price: f64,
    pub subtotal: f64,
}

/// Payload for placing a new order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderCreate {
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub payment_method: String,
    pub items: Vec<OrderItemCreate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderItemCreate {
    pub product_name: String,
    pub sku: String,
    pub quantity: u32,
    pub price: f64,
}

impl OrderItem {
    pub fn new(id: RecordId, input: OrderItemCreate) -> Self {
        Self {
            id,
            subtotal: input.price * f64::from(input.quantity),
            product_name: input.product_name,
            sku: input.sku,
            quantity: input.quantity,
            price: input.price,
        }
    }
}

pub fn order_number(id: RecordId, placed_at: DateTime<Utc>) -> String {
    format!("ORD{}{:04}", placed_at.format("%Y%m%d"), id)
}
