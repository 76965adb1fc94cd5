//! Editor draft tree
//!
//! In-memory form of the variant editor before submission. Color values are
//! tagged instead of string-encoded; the `"Color: <hex>"` projection happens
//! only at display and serialization boundaries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::variant::{Variant, VariantKind, VariantValue, color_label};

/// Content of a value draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueContent {
    /// Free-text value (size label, material name, ...)
    Plain(String),
    /// Hex code selected through the color picker
    Color(String),
}

impl ValueContent {
    /// Display string sent to the API (`"Color: <hex>"` for colors)
    pub fn display(&self) -> String {
        match self {
            ValueContent::Plain(text) => text.clone(),
            ValueContent::Color(hex) => color_label(hex),
        }
    }

    /// The submission form's `color` field (empty for non-color values)
    pub fn color_field(&self) -> &str {
        match self {
            ValueContent::Plain(_) => "",
            ValueContent::Color(hex) => hex,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            ValueContent::Plain(text) => text.is_empty(),
            ValueContent::Color(hex) => hex.is_empty(),
        }
    }
}

impl Default for ValueContent {
    fn default() -> Self {
        ValueContent::Plain(String::new())
    }
}

/// Image attachment state of a value draft
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ImageSource {
    /// No image attached
    #[default]
    None,
    /// Freshly selected file, encoded for preview and upload
    DataUrl(String),
    /// Server-relative path of an already persisted image; never re-uploaded
    Stored(String),
}

impl ImageSource {
    pub fn from_wire(path: &str) -> Self {
        if path.is_empty() {
            ImageSource::None
        } else {
            ImageSource::Stored(path.to_string())
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, ImageSource::None)
    }
}

/// One value row in the editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueDraft {
    /// Server id, present once persisted
    pub id: Option<String>,
    pub content: ValueContent,
    pub price: Decimal,
    pub stock: i64,
    pub image: ImageSource,
    /// Created or modified client-side since the last load
    pub is_new: bool,
}

impl ValueDraft {
    /// Empty row appended by "add value"
    pub fn empty() -> Self {
        Self {
            id: None,
            content: ValueContent::default(),
            price: Decimal::ZERO,
            stock: 0,
            image: ImageSource::None,
            is_new: true,
        }
    }

    /// Rebuild a draft from a persisted row (edit flow load)
    pub fn from_wire(value: &VariantValue) -> Self {
        let content = if value.color.is_empty() {
            ValueContent::Plain(value.value.clone())
        } else {
            ValueContent::Color(value.color.clone())
        };
        Self {
            id: value.id.clone(),
            content,
            price: value.price,
            stock: value.stock,
            image: ImageSource::from_wire(&value.image),
            is_new: false,
        }
    }

    /// Display string for the form's `value` field
    pub fn display_value(&self) -> String {
        self.content.display()
    }
}

/// One variant card in the editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantDraft {
    /// Server id, present once persisted
    pub id: Option<String>,
    /// Unset until the user picks a kind (creation flow starts blank)
    pub kind: Option<VariantKind>,
    pub values: Vec<ValueDraft>,
}

impl VariantDraft {
    /// Fresh card appended by "add variant": no kind, one empty value
    pub fn empty() -> Self {
        Self {
            id: None,
            kind: None,
            values: vec![ValueDraft::empty()],
        }
    }

    /// Rebuild a draft from a persisted variant (edit flow load)
    pub fn from_wire(variant: &Variant) -> Self {
        Self {
            id: variant.id.clone(),
            kind: Some(variant.kind),
            values: variant.variant_values.iter().map(ValueDraft::from_wire).collect(),
        }
    }

    /// Wire string for the form's `type` field (empty while unselected)
    pub fn kind_str(&self) -> &'static str {
        self.kind.map(VariantKind::as_str).unwrap_or("")
    }
}
