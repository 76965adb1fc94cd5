//! Variant Client - HTTP client for the variant admin API
//!
//! Provides the typed endpoint calls, the multipart submission serializer,
//! and the data-URL image codec used by the admin forms.

pub mod config;
pub mod data_url;
pub mod error;
pub mod form;
pub mod http;
pub mod service;

pub use config::ClientConfig;
pub use data_url::DecodedImage;
pub use error::{ClientError, ClientResult};
pub use form::FormField;
pub use http::VariantApi;
pub use service::VariantService;

// Re-export shared types for convenience
pub use shared::models::{ProductSummary, ProductVariants, VariantDraft};
pub use shared::response::SubmitOutcome;
