//! HTTP client for the variant admin API

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use shared::models::{ProductSummary, ProductVariants, VariantDraft};
use shared::response::{ErrorBody, SubmitOutcome};

use crate::form::{self, FormField};
use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for the admin variant endpoints
#[derive(Debug, Clone)]
pub struct VariantApi {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl VariantApi {
    /// Create a new API client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.get(self.url(path));
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a multipart POST request
    async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: Vec<FormField>,
    ) -> ClientResult<T> {
        let body = form::into_multipart(fields)?;
        let mut request = self.client.post(self.url(path)).multipart(body);
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request, discarding any response body
    async fn delete(&self, path: &str) -> ClientResult<()> {
        let mut request = self.client.delete(self.url(path));
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from(status, response.text().await?));
        }
        Ok(())
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from(status, response.text().await?));
        }

        response.json().await.map_err(Into::into)
    }

    /// Map a failed response onto the error taxonomy, preferring the API's
    /// structured `errors` body over the raw text.
    fn error_from(status: StatusCode, body: String) -> ClientError {
        let structured = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.describe());
        let from_api = structured.is_some();
        let message = structured.unwrap_or(body);

        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ClientError::Validation(message)
            }
            _ if from_api => ClientError::Api(message),
            _ => ClientError::Internal(message),
        }
    }

    // ========== Read API ==========

    /// List products for the selector
    pub async fn products(&self) -> ClientResult<Vec<ProductSummary>> {
        self.get("api/admin/products").await
    }

    /// Full product -> variant -> value catalog
    pub async fn catalog(&self) -> ClientResult<Vec<ProductVariants>> {
        self.get("api/admin/variants").await
    }

    /// One product's variant tree
    pub async fn product_variants(&self, product_id: &str) -> ClientResult<ProductVariants> {
        self.get(&format!("api/admin/variants/{product_id}")).await
    }

    // ========== Write API ==========

    /// Submit new variants for a product
    pub async fn create_variants(
        &self,
        product_id: &str,
        variants: &[VariantDraft],
    ) -> ClientResult<SubmitOutcome> {
        tracing::info!(product_id = %product_id, variants = variants.len(), "Creating variants");
        let fields = form::create_fields(product_id, variants);
        self.post_multipart("api/admin/variants", fields).await
    }

    /// Submit edited variants for a product (method-override update)
    pub async fn update_variants(
        &self,
        product_id: &str,
        variants: &[VariantDraft],
    ) -> ClientResult<SubmitOutcome> {
        tracing::info!(product_id = %product_id, variants = variants.len(), "Updating variants");
        let fields = form::update_fields(variants);
        self.post_multipart(&format!("api/admin/variants/update/{product_id}"), fields)
            .await
    }

    // ========== Delete API ==========

    /// Delete one variant value
    pub async fn delete_value(&self, variant_id: &str, value_id: &str) -> ClientResult<()> {
        tracing::info!(variant_id = %variant_id, value_id = %value_id, "Deleting variant value");
        self.delete(&format!("api/admin/variants/{variant_id}/values/{value_id}"))
            .await
    }

    /// Delete one variant with all of its values
    pub async fn delete_variant(&self, product_id: &str, variant_id: &str) -> ClientResult<()> {
        tracing::info!(product_id = %product_id, variant_id = %variant_id, "Deleting variant");
        self.delete(&format!("api/admin/variants/{product_id}/variant/{variant_id}"))
            .await
    }

    /// Delete every variant of a product
    pub async fn delete_product_variants(&self, product_id: &str) -> ClientResult<()> {
        tracing::info!(product_id = %product_id, "Deleting all variants for product");
        self.delete(&format!("api/admin/variants/{product_id}")).await
    }

    /// URL an uploaded image is served from (static storage convention)
    pub fn image_url(&self, path: &str) -> String {
        format!("{}/storage/{}", self.base_url, path.trim_start_matches('/'))
    }
}
