//! Service trait for the admin endpoints
//!
//! The forms are generic over this trait so they can run against the live
//! [`VariantApi`] or a recording test double.

use async_trait::async_trait;

use shared::models::{ProductSummary, ProductVariants, VariantDraft};
use shared::response::SubmitOutcome;

use crate::error::ClientResult;
use crate::http::VariantApi;

/// Remote operations the admin forms depend on
#[async_trait]
pub trait VariantService: Send + Sync {
    /// List products for the selector
    async fn products(&self) -> ClientResult<Vec<ProductSummary>>;

    /// Full product -> variant -> value catalog
    async fn catalog(&self) -> ClientResult<Vec<ProductVariants>>;

    /// One product's variant tree
    async fn product_variants(&self, product_id: &str) -> ClientResult<ProductVariants>;

    /// Submit new variants for a product
    async fn create_variants(
        &self,
        product_id: &str,
        variants: &[VariantDraft],
    ) -> ClientResult<SubmitOutcome>;

    /// Submit edited variants for a product
    async fn update_variants(
        &self,
        product_id: &str,
        variants: &[VariantDraft],
    ) -> ClientResult<SubmitOutcome>;

    /// Delete one variant value
    async fn delete_value(&self, variant_id: &str, value_id: &str) -> ClientResult<()>;

    /// Delete one variant with all of its values
    async fn delete_variant(&self, product_id: &str, variant_id: &str) -> ClientResult<()>;

    /// Delete every variant of a product
    async fn delete_product_variants(&self, product_id: &str) -> ClientResult<()>;

    /// URL an uploaded image is served from
    fn image_url(&self, path: &str) -> String;
}

#[async_trait]
impl VariantService for VariantApi {
    async fn products(&self) -> ClientResult<Vec<ProductSummary>> {
        VariantApi::products(self).await
    }

    async fn catalog(&self) -> ClientResult<Vec<ProductVariants>> {
        VariantApi::catalog(self).await
    }

    async fn product_variants(&self, product_id: &str) -> ClientResult<ProductVariants> {
        VariantApi::product_variants(self, product_id).await
    }

    async fn create_variants(
        &self,
        product_id: &str,
        variants: &[VariantDraft],
    ) -> ClientResult<SubmitOutcome> {
        VariantApi::create_variants(self, product_id, variants).await
    }

    async fn update_variants(
        &self,
        product_id: &str,
        variants: &[VariantDraft],
    ) -> ClientResult<SubmitOutcome> {
        VariantApi::update_variants(self, product_id, variants).await
    }

    async fn delete_value(&self, variant_id: &str, value_id: &str) -> ClientResult<()> {
        VariantApi::delete_value(self, variant_id, value_id).await
    }

    async fn delete_variant(&self, product_id: &str, variant_id: &str) -> ClientResult<()> {
        VariantApi::delete_variant(self, product_id, variant_id).await
    }

    async fn delete_product_variants(&self, product_id: &str) -> ClientResult<()> {
        VariantApi::delete_product_variants(self, product_id).await
    }

    fn image_url(&self, path: &str) -> String {
        VariantApi::image_url(self, path)
    }
}
