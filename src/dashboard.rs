//! Live overview numbers computed from store snapshots.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::clients::{OrderClient, ProductClient, UserClient};
use crate::domain::{Order, Product, User, ORDER_STATUS_CANCELLED, ORDER_STATUS_PENDING};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use crate::user_actor::UserError;

const TOP_PRODUCTS_LIMIT: usize = 4;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_users: usize,
    pub total_products: usize,
    pub total_orders: usize,
    /// Sum over every order that is not cancelled.
    pub total_revenue: f64,
    pub active_users: usize,
    pub pending_orders: usize,
    pub low_stock: usize,
    pub today_orders: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub recent_orders: Vec<Order>,
    pub recent_users: Vec<User>,
    pub top_products: Vec<Product>,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DashboardError {
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Product(#[from] ProductError),
    #[error(transparent)]
    Order(#[from] OrderError),
}

#[derive(Clone)]
pub struct DashboardClient {
    users: UserClient,
    products: ProductClient,
    orders: OrderClient,
    low_stock_threshold: i64,
    recent_limit: usize,
}

impl DashboardClient {
    pub fn new(
        users: UserClient,
        products: ProductClient,
        orders: OrderClient,
        low_stock_threshold: i64,
        recent_limit: usize,
    ) -> Self {
        Self {
            users,
            products,
            orders,
            low_stock_threshold,
            recent_limit,
        }
    }

    #[instrument(skip(self))]
    pub async fn stats(&self) -> Result<DashboardStats, DashboardError> {
        let (users, products, orders) = self.snapshots().await?;
        Ok(compute_stats(&users, &products, &orders, self.low_stock_threshold, Utc::now()))
    }

    #[instrument(skip(self))]
    pub async fn data(&self) -> Result<DashboardData, DashboardError> {
        let (mut users, mut products, mut orders) = self.snapshots().await?;
        let stats = compute_stats(&users, &products, &orders, self.low_stock_threshold, Utc::now());

        orders.sort_by(|a, b| b.id.cmp(&a.id));
        orders.truncate(self.recent_limit);

        users.sort_by(|a, b| b.id.cmp(&a.id));
        users.truncate(self.recent_limit);

        products.retain(|p| p.status == "active");
        products.sort_by(|a, b| b.price.total_cmp(&a.price).then(b.id.cmp(&a.id)));
        products.truncate(TOP_PRODUCTS_LIMIT);

        debug!(?stats, "Dashboard assembled");
        Ok(DashboardData {
            stats,
            recent_orders: orders,
            recent_users: users,
            top_products: products,
        })
    }

    async fn snapshots(&self) -> Result<(Vec<User>, Vec<Product>, Vec<Order>), DashboardError> {
        let (users, products, orders) = tokio::join!(
            self.users.snapshot(),
            self.products.snapshot(),
            self.orders.snapshot()
        );
        Ok((users?, products?, orders?))
    }
}

pub fn compute_stats(
    users: &[User],
    products: &[Product],
    orders: &[Order],
    low_stock_threshold: i64,
    now: DateTime<Utc>,
) -> DashboardStats {
    let today = now.date_naive();
    DashboardStats {
        total_users: users.len(),
        total_products: products.len(),
        total_orders: orders.len(),
        total_revenue: orders
            .iter()
            .filter(|o| o.status != ORDER_STATUS_CANCELLED)
            .map(|o| o.total_amount)
            .sum(),
        active_users: users.iter().filter(|u| u.status == "active").count(),
        pending_orders: orders.iter().filter(|o| o.status == ORDER_STATUS_PENDING).count(),
        low_stock: products.iter().filter(|p| p.stock < low_stock_threshold).count(),
        today_orders: orders.iter().filter(|o| o.created_at.date_naive() == today).count(),
    }
}
