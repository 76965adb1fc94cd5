//! Variant Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::de;

/// Prefix used when projecting a color value into its display string
const COLOR_LABEL_PREFIX: &str = "Color: ";

/// Build the display string for a color value (`"Color: <hex>"`)
pub fn color_label(hex: &str) -> String {
    format!("{COLOR_LABEL_PREFIX}{hex}")
}

/// Recover the hex code from a color display string.
///
/// Returns `None` for values that are not color labels. The round trip
/// `parse_color_label(&color_label(hex)) == Some(hex)` holds for every hex
/// accepted by the editor (hex codes containing `": "` are rejected there).
pub fn parse_color_label(value: &str) -> Option<&str> {
    value.strip_prefix(COLOR_LABEL_PREFIX)
}

/// Variant kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantKind {
    Color,
    Size,
    Material,
    Custom,
}

impl VariantKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariantKind::Color => "color",
            VariantKind::Size => "size",
            VariantKind::Material => "material",
            VariantKind::Custom => "custom",
        }
    }

    /// All selectable kinds, in display order
    pub fn all() -> &'static [VariantKind] {
        &[
            VariantKind::Color,
            VariantKind::Size,
            VariantKind::Material,
            VariantKind::Custom,
        ]
    }
}

impl std::fmt::Display for VariantKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error for unrecognized kind strings
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown variant kind: {0}")]
pub struct UnknownVariantKind(pub String);

impl std::str::FromStr for VariantKind {
    type Err = UnknownVariantKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "color" => Ok(VariantKind::Color),
            "size" => Ok(VariantKind::Size),
            "material" => Ok(VariantKind::Material),
            "custom" => Ok(VariantKind::Custom),
            other => Err(UnknownVariantKind(other.to_string())),
        }
    }
}

/// Variant value row (persisted)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantValue {
    #[serde(default, deserialize_with = "de::opt_opaque_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub value: String,
    /// Unit price. The API serializes decimals as strings, older rows come
    /// back as numbers, so parsing is lenient (missing/invalid -> 0).
    #[serde(default, deserialize_with = "de::lenient_decimal")]
    pub price: Decimal,
    #[serde(default, deserialize_with = "de::lenient_int")]
    pub stock: i64,
    #[serde(default)]
    pub color: String,
    /// Server-relative storage path, empty when the value has no image
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl VariantValue {
    /// Hex for the list view's color swatch, when this is a color value
    pub fn swatch_hex(&self) -> Option<&str> {
        parse_color_label(&self.value)
    }
}

/// Variant entity with embedded values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
    #[serde(default, deserialize_with = "de::opt_opaque_id")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: VariantKind,
    #[serde(default)]
    pub variant_values: Vec<VariantValue>,
}
