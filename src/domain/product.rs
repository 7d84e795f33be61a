use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::actor_framework::RecordId;

pub const PRODUCT_STATUSES: [&str; 3] = ["active", "inactive", "out_of_stock"];

/// Represents a product in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: RecordId,
    pub name: String,
    /// Unique, fixed at creation.
    pub sku: String,
    pub category: String,
    pub price: f64,
    pub stock: i64,
    pub status: String,
    pub image: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: f64,
    pub stock: i64,
    pub status: String,
    #[serde(default)]
    pub description: String,
}

/// Replaces every editable field; SKU and image stay as created.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductUpdate {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: i64,
    pub status: String,
    #[serde(default)]
    pub description: String,
}

pub(crate) fn placeholder_image(name: &str) -> String {
    format!("https://via.placeholder.com/300x200?text={name}")
}
