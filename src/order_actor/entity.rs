use std::convert::Infallible;

use chrono::{DateTime, Utc};

use super::actions::OrderAction;
use crate::actor_framework::{Entity, FrameworkError, RecordId};
use crate::domain::{order_number, require, Order, OrderCreate, OrderItem, ORDER_STATUS_PENDING};
use crate::query::Searchable;

impl Entity for Order {
    type CreateParams = OrderCreate;
    type Patch = Infallible;
    type Action = OrderAction;

    const KIND: &'static str = "Order";

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn set_updated_at(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }

    fn validate_create(params: &OrderCreate) -> Result<(), FrameworkError> {
        require("customer_name", &params.customer_name)?;
        if params.items.is_empty() {
            return Err(FrameworkError::Validation("an order needs at least one item".into()));
        }
        for item in &params.items {
            require("product_name", &item.product_name)?;
            if item.quantity == 0 {
                return Err(FrameworkError::Validation(format!(
                    "quantity for {} must be at least 1",
                    item.product_name
                )));
            }
            if !(item.price.is_finite() && item.price >= 0.0) {
                return Err(FrameworkError::Validation(format!(
                    "price for {} must not be negative",
                    item.product_name
                )));
            }
            if !(item.price * f64::from(item.quantity)).is_finite() {
                return Err(FrameworkError::Validation(format!(
                    "subtotal for {} is out of range",
                    item.product_name
                )));
            }
        }
        let total: f64 = params.items.iter().map(|item| item.price * f64::from(item.quantity)).sum();
        if !total.is_finite() {
            return Err(FrameworkError::Validation("order total is out of range".into()));
        }
        Ok(())
    }

    /// Creates a pending order. The total is fixed here from the item subtotals.
    fn from_create_params(id: RecordId, params: OrderCreate, now: DateTime<Utc>) -> Self {
        let items: Vec<OrderItem> = params
            .items
            .into_iter()
            .zip(1..)
            .map(|(input, item_id)| OrderItem::new(item_id, input))
            .collect();
        let total_amount: f64 = items.iter().map(|item| item.subtotal).sum();

        Self {
            id,
            order_no: order_number(id, now),
            customer_name: params.customer_name,
            customer_email: params.customer_email,
            total_amount,
            status: ORDER_STATUS_PENDING.to_string(),
            payment_method: params.payment_method,
            items,
            created_at: now,
            updated_at: now,
        }
    }

    fn on_update(&mut self, patch: Infallible) -> Result<(), FrameworkError> {
        match patch {}
    }

    fn handle_action(&mut self, action: OrderAction) -> Result<(), FrameworkError> {
        match action {
            OrderAction::ChangeStatus(status) => self.status = status,
        }
        Ok(())
    }
}

impl Searchable for Order {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.order_no.as_str(), self.customer_name.as_str(), self.customer_email.as_str()]
    }

    fn filter_field(&self) -> &str {
        &self.status
    }
}
