//! Variant creation flow

use std::path::Path;

use shared::models::{ImageSource, ProductSummary};
use variant_client::{VariantService, data_url};

use crate::editor::VariantEditor;
use crate::error::{FormError, FormResult};
use crate::validate;

/// State behind the "create product variants" form
pub struct CreateForm<S> {
    service: S,
    products: Vec<ProductSummary>,
    selected_product: Option<String>,
    /// Draft tree; field edits go through the editor's operations
    pub editor: VariantEditor,
}

impl<S: VariantService> CreateForm<S> {
    /// New form: one blank variant card, no product selected
    pub fn new(service: S) -> Self {
        Self {
            service,
            products: Vec::new(),
            selected_product: None,
            editor: VariantEditor::with_blank_variant(),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Fetch the product selector options.
    ///
    /// A failure leaves the form usable; the caller decides how to surface it.
    pub async fn load_products(&mut self) -> FormResult<()> {
        match self.service.products().await {
            Ok(products) => {
                self.products = products;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching products");
                Err(e.into())
            }
        }
    }

    pub fn products(&self) -> &[ProductSummary] {
        &self.products
    }

    /// Select the product the variants belong to (empty id clears)
    pub fn select_product(&mut self, product_id: impl Into<String>) {
        let id = product_id.into();
        self.selected_product = if id.is_empty() { None } else { Some(id) };
    }

    pub fn selected_product(&self) -> Option<&str> {
        self.selected_product.as_deref()
    }

    /// Encode a local file into the value's preview image.
    ///
    /// The creation flow attaches whatever file was picked; only the edit
    /// flow gates on MIME type.
    pub async fn attach_image(
        &mut self,
        variant: usize,
        value: usize,
        path: impl AsRef<Path>,
    ) -> FormResult<()> {
        let url = data_url::encode_file(path).await?;
        self.editor
            .set_image(variant, value, ImageSource::DataUrl(url))
    }

    /// Validate and submit; returns the server's success message.
    ///
    /// Any validation problem aborts before a request is issued, with the
    /// editor left untouched.
    pub async fn submit(&mut self) -> FormResult<String> {
        let product_id = self
            .selected_product
            .clone()
            .ok_or(FormError::NoProductSelected)?;
        validate::ensure_valid(self.editor.variants())?;

        match self
            .service
            .create_variants(&product_id, self.editor.variants())
            .await
        {
            Ok(outcome) => Ok(outcome.message_or("Variants saved.")),
            Err(e) => {
                tracing::error!(error = %e, "Error submitting variants");
                Err(e.into())
            }
        }
    }
}
