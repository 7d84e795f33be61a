use tracing::{debug, info, instrument};

use crate::actor_framework::{RecordId, ResourceClient};
use crate::domain::{Product, ProductCreate, ProductUpdate};
use crate::product_actor::ProductError;

/// Client for interacting with the Product store.
///
/// The `status` search parameter filters products by category.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
    default_page_size: usize,
}

impl_basic_client!(ProductClient, Product, ProductError, product, products);

impl ProductClient {
    #[instrument(skip(self, form), fields(sku = %form.sku))]
    pub async fn create_product(&self, form: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        let product = self.inner.create(form).await?;
        info!(product_id = product.id, "Product created successfully");
        Ok(product)
    }

    #[instrument(skip(self, form))]
    pub async fn update_product(&self, id: RecordId, form: ProductUpdate) -> Result<Product, ProductError> {
        debug!("Sending request");
        let product = self.inner.update(id, form).await?;
        info!(product_id = product.id, "Product updated successfully");
        Ok(product)
    }

    #[instrument(skip(self))]
    pub async fn sku_exists(&self, sku: &str) -> Result<bool, ProductError> {
        Ok(self.inner.exists_by_unique(sku).await?)
    }
}
