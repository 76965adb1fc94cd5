//! Variant list / delete view

use shared::models::ProductVariants;
use variant_client::VariantService;

use crate::error::FormResult;

/// Read-only catalog of every product's variants, with per-product bulk delete
pub struct CatalogView<S> {
    service: S,
    products: Vec<ProductVariants>,
}

impl<S: VariantService> CatalogView<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            products: Vec::new(),
        }
    }

    /// Fetch the product -> variant -> value tree
    pub async fn load(&mut self) -> FormResult<()> {
        match self.service.catalog().await {
            Ok(products) => {
                self.products = products;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching products with variants");
                Err(e.into())
            }
        }
    }

    pub fn products(&self) -> &[ProductVariants] {
        &self.products
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Delete every variant of a product and drop it from the view.
    ///
    /// Confirmation prompting is the caller's concern. A failed delete
    /// leaves the held list unchanged.
    pub async fn delete_product_variants(&mut self, product_id: &str) -> FormResult<()> {
        match self.service.delete_product_variants(product_id).await {
            Ok(()) => {
                self.products.retain(|p| p.id != product_id);
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Error deleting variants");
                Err(e.into())
            }
        }
    }

    /// URL a value's stored image is served from
    pub fn image_url(&self, path: &str) -> String {
        self.service.image_url(path)
    }
}
