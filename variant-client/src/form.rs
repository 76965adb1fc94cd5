//! Submission serializer
//!
//! Flattens the editor's draft tree into the bracketed-index multipart body
//! the API reconstructs nested arrays from: `variants[i][type]`,
//! `variants[i][values][j][value]` and so on. Field iteration order follows
//! array order exactly, since reconstruction is positional.

use shared::models::{ImageSource, VariantDraft};

use crate::data_url::{self, DecodedImage};
use crate::error::{ClientError, ClientResult};

/// Method-override marker injected into update submissions
const METHOD_OVERRIDE_FIELD: &str = "_method";
const METHOD_OVERRIDE_VALUE: &str = "PUT";

/// One field of the submission body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormField {
    Text { name: String, value: String },
    File { name: String, image: DecodedImage },
}

impl FormField {
    fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        FormField::Text {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FormField::Text { name, .. } => name,
            FormField::File { name, .. } => name,
        }
    }
}

/// Serialize the creation submission: `product_id` plus the variant tree
pub fn create_fields(product_id: &str, variants: &[VariantDraft]) -> Vec<FormField> {
    let mut fields = vec![FormField::text("product_id", product_id)];
    push_variant_fields(&mut fields, variants);
    fields
}

/// Serialize the update submission: method override plus the variant tree
pub fn update_fields(variants: &[VariantDraft]) -> Vec<FormField> {
    let mut fields = vec![FormField::text(METHOD_OVERRIDE_FIELD, METHOD_OVERRIDE_VALUE)];
    push_variant_fields(&mut fields, variants);
    fields
}

fn push_variant_fields(fields: &mut Vec<FormField>, variants: &[VariantDraft]) {
    for (i, variant) in variants.iter().enumerate() {
        fields.push(FormField::text(
            format!("variants[{i}][type]"),
            variant.kind_str(),
        ));
        for (j, value) in variant.values.iter().enumerate() {
            let prefix = format!("variants[{i}][values][{j}]");
            let display = value.display_value();
            fields.push(FormField::text(format!("{prefix}[value]"), display.as_str()));
            fields.push(FormField::text(
                format!("{prefix}[price]"),
                value.price.to_string(),
            ));
            fields.push(FormField::text(
                format!("{prefix}[stock]"),
                value.stock.to_string(),
            ));
            fields.push(FormField::text(
                format!("{prefix}[color]"),
                value.content.color_field(),
            ));
            // Only freshly encoded images become file parts. Stored paths are
            // already persisted server-side; undecodable previews are skipped.
            if let ImageSource::DataUrl(url) = &value.image {
                if let Some(image) = data_url::decode(url, format!("{display}.png")) {
                    fields.push(FormField::File {
                        name: format!("{prefix}[image]"),
                        image,
                    });
                }
            }
        }
    }
}

/// Convert serialized fields into a reqwest multipart form
pub fn into_multipart(fields: Vec<FormField>) -> ClientResult<reqwest::multipart::Form> {
    let mut form = reqwest::multipart::Form::new();
    for field in fields {
        form = match field {
            FormField::Text { name, value } => form.text(name, value),
            FormField::File { name, image } => {
                let part = reqwest::multipart::Part::bytes(image.bytes)
                    .file_name(image.filename)
                    .mime_str(&image.mime)
                    .map_err(|e| ClientError::Internal(format!("Invalid MIME type: {e}")))?;
                form.part(name, part)
            }
        };
    }
    Ok(form)
}
