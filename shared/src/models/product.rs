//! Product Model

use serde::{Deserialize, Serialize};

use super::de;
use super::variant::Variant;

/// Product row for the selector (`GET /api/admin/products`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSummary {
    #[serde(deserialize_with = "de::opaque_id")]
    pub id: String,
    pub name: String,
}

/// One product's variant tree, as returned by the catalog endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductVariants {
    #[serde(deserialize_with = "de::opaque_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub variants: Vec<Variant>,
}
