//! Variant edit flow

use std::path::Path;

use shared::models::{ImageSource, ProductSummary, VariantDraft};
use variant_client::{VariantService, data_url};

use crate::editor::VariantEditor;
use crate::error::{FormError, FormResult};

/// State behind the "edit product variants" form
pub struct EditForm<S> {
    service: S,
    product_id: String,
    products: Vec<ProductSummary>,
    /// Draft tree; field edits go through the editor's operations
    pub editor: VariantEditor,
}

impl<S: VariantService> EditForm<S> {
    pub fn new(service: S, product_id: impl Into<String>) -> Self {
        Self {
            service,
            product_id: product_id.into(),
            products: Vec::new(),
            editor: VariantEditor::new(),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Product the form is editing
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// Name of the edited product, once the product list is loaded
    pub fn product_name(&self) -> Option<&str> {
        self.products
            .iter()
            .find(|p| p.id == self.product_id)
            .map(|p| p.name.as_str())
    }

    /// Fetch the product list (for the heading) and this product's variants
    pub async fn load(&mut self) -> FormResult<()> {
        match self.service.products().await {
            Ok(products) => self.products = products,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load products");
                return Err(e.into());
            }
        }

        let fetched = match self.service.product_variants(&self.product_id).await {
            Ok(fetched) => fetched,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load variant details");
                return Err(e.into());
            }
        };
        self.editor = VariantEditor::from_drafts(
            fetched.variants.iter().map(VariantDraft::from_wire).collect(),
        );
        Ok(())
    }

    // ========== Remove operations ==========

    /// Remove a value; persisted values are deleted remotely first.
    ///
    /// Unpersisted values never issue a network call. A failed remote delete
    /// leaves the editor unchanged.
    pub async fn remove_value(&mut self, variant: usize, value: usize) -> FormResult<()> {
        let value_id = self.editor.value(variant, value)?.id.clone();

        let Some(value_id) = value_id else {
            self.editor.remove_value(variant, value)?;
            tracing::info!(variant, value, "Removed unsaved variant value");
            return Ok(());
        };

        let variant_id = self
            .editor
            .variant(variant)?
            .id
            .clone()
            .ok_or(FormError::MissingVariantId)?;

        match self.service.delete_value(&variant_id, &value_id).await {
            Ok(()) => {
                self.editor.remove_value(variant, value)?;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Error deleting variant value");
                Err(e.into())
            }
        }
    }

    /// Remove a whole variant; requires a successful remote delete first.
    ///
    /// Variants in this flow always came from the server, so a missing id is
    /// an error rather than a local-only removal.
    pub async fn remove_variant(&mut self, variant: usize) -> FormResult<()> {
        let variant_id = self
            .editor
            .variant(variant)?
            .id
            .clone()
            .ok_or(FormError::MissingVariantId)?;

        match self
            .service
            .delete_variant(&self.product_id, &variant_id)
            .await
        {
            Ok(()) => {
                self.editor.remove_variant(variant)?;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Error deleting variant");
                Err(e.into())
            }
        }
    }

    /// Encode a local file into the value's preview image.
    ///
    /// Unlike the creation flow, non-image files are rejected before
    /// encoding.
    pub async fn attach_image(
        &mut self,
        variant: usize,
        value: usize,
        path: impl AsRef<Path>,
    ) -> FormResult<()> {
        let path = path.as_ref();
        let mime = data_url::mime_for_path(path);
        if !mime.starts_with("image/") {
            return Err(FormError::NotAnImage(path.display().to_string()));
        }
        let url = data_url::encode_file(path).await?;
        self.editor
            .set_image(variant, value, ImageSource::DataUrl(url))
    }

    /// Submit the edited tree to the update endpoint.
    ///
    /// The edit flow performs no field validation; its only gate is the
    /// presence of at least one variant.
    pub async fn submit(&mut self) -> FormResult<String> {
        if self.editor.is_empty() {
            return Err(FormError::EmptyEditor);
        }

        match self
            .service
            .update_variants(&self.product_id, self.editor.variants())
            .await
        {
            Ok(outcome) => Ok(outcome.message_or("Variants updated successfully!")),
            Err(e) => {
                tracing::error!(error = %e, "Error updating variants");
                Err(e.into())
            }
        }
    }
}
