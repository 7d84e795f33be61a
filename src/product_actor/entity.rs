use std::convert::Infallible;

use chrono::{DateTime, Utc};

use crate::actor_framework::{Entity, FrameworkError, RecordId};
use crate::domain::{placeholder_image, require, require_one_of, Product, ProductCreate, ProductUpdate, PRODUCT_STATUSES};
use crate::query::Searchable;

fn validate_listing(name: &str, category: &str, price: f64, stock: i64, status: &str) -> Result<(), FrameworkError> {
    require("name", name)?;
    require("category", category)?;
    if !(price.is_finite() && price > 0.0) {
        return Err(FrameworkError::Validation(format!("price must be greater than 0, got {price}")));
    }
    if stock < 0 {
        return Err(FrameworkError::Validation(format!("stock must not be negative, got {stock}")));
    }
    require_one_of("status", status, &PRODUCT_STATUSES)
}

impl Entity for Product {
    type CreateParams = ProductCreate;
    type Patch = ProductUpdate;
    type Action = Infallible;

    const KIND: &'static str = "Product";
    const UNIQUE_FIELD: Option<&'static str> = Some("sku");

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn set_updated_at(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.sku)
    }

    fn create_key(params: &ProductCreate) -> Option<&str> {
        Some(&params.sku)
    }

    fn validate_create(params: &ProductCreate) -> Result<(), FrameworkError> {
        require("sku", &params.sku)?;
        validate_listing(&params.name, &params.category, params.price, params.stock, &params.status)
    }

    fn from_create_params(id: RecordId, params: ProductCreate, now: DateTime<Utc>) -> Self {
        Self {
            id,
            image: placeholder_image(&params.name),
            name: params.name,
            sku: params.sku,
            category: params.category,
            price: params.price,
            stock: params.stock,
            status: params.status,
            description: params.description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Updates the product's listing fields.
    ///
    /// # Fields Updated
    /// - `name`, `category`, `description`
    /// - `price`: must stay above zero
    /// - `stock`: must not go negative
    /// - `status`
    fn on_update(&mut self, update: ProductUpdate) -> Result<(), FrameworkError> {
        validate_listing(&update.name, &update.category, update.price, update.stock, &update.status)?;
        self.name = update.name;
        self.category = update.category;
        self.price = update.price;
        self.stock = update.stock;
        self.status = update.status;
        self.description = update.description;
        Ok(())
    }

    fn handle_action(&mut self, action: Infallible) -> Result<(), FrameworkError> {
        match action {}
    }
}

/// Products are filtered by category rather than status.
impl Searchable for Product {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.sku.as_str(), self.description.as_str()]
    }

    fn filter_field(&self) -> &str {
        &self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ProductCreate {
        ProductCreate {
            name: "Keyboard".into(),
            sku: "SKU90001".into(),
            category: "电脑配件".into(),
            price: 199.0,
            stock: 0,
            status: "out_of_stock".into(),
            description: String::new(),
        }
    }

    #[test]
    fn price_and_stock_bounds() {
        assert!(Product::validate_create(&form()).is_ok());

        let mut bad = form();
        bad.price = 0.0;
        assert!(matches!(Product::validate_create(&bad), Err(FrameworkError::Validation(_))));

        let mut bad = form();
        bad.price = f64::NAN;
        assert!(matches!(Product::validate_create(&bad), Err(FrameworkError::Validation(_))));

        let mut bad = form();
        bad.stock = -1;
        assert!(matches!(Product::validate_create(&bad), Err(FrameworkError::Validation(_))));
    }

    #[test]
    fn update_never_touches_sku() {
        let mut product = Product::from_create_params(1, form(), Utc::now());
        product
            .on_update(ProductUpdate {
                name: "Mechanical Keyboard".into(),
                category: "办公用品".into(),
                price: 249.5,
                stock: 12,
                status: "active".into(),
                description: "RGB".into(),
            })
            .unwrap();
        assert_eq!(product.sku, "SKU90001");
        assert_eq!(product.stock, 12);
        assert_eq!(product.filter_field(), "办公用品");
    }
}
