use tracing::{debug, info, instrument};

use crate::actor_framework::{RecordId, ResourceClient};
use crate::domain::{Order, OrderCreate, ORDER_STATUS_CANCELLED};
use crate::order_actor::{OrderAction, OrderError};

/// Client for interacting with the Order store.
///
/// Orders have no general update and are never removed: deleting one cancels it.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    default_page_size: usize,
}

impl_client_new!(OrderClient, Order);
impl_client_methods!(OrderClient, Order, OrderError, order, orders);

impl OrderClient {
    #[instrument(skip(self, form), fields(customer = %form.customer_name, items = form.items.len()))]
    pub async fn create_order(&self, form: OrderCreate) -> Result<Order, OrderError> {
        debug!("Sending request");
        let order = self.inner.create(form).await?;
        info!(order_id = order.id, order_no = %order.order_no, total = order.total_amount, "Order created successfully");
        Ok(order)
    }

    /// Any status string is accepted from any current status.
    #[instrument(skip(self, status), fields(status = tracing::field::Empty))]
    pub async fn change_status(&self, id: RecordId, status: impl Into<String>) -> Result<Order, OrderError> {
        let status = status.into();
        tracing::Span::current().record("status", status.as_str());
        debug!("Sending request");
        let order = self.inner.perform_action(id, OrderAction::ChangeStatus(status)).await?;
        info!(order_id = order.id, "Order status updated");
        Ok(order)
    }

    /// Soft delete: the order stays in the store with status `cancelled`.
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, id: RecordId) -> Result<Order, OrderError> {
        self.change_status(id, ORDER_STATUS_CANCELLED).await
    }
}
