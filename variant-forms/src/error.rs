//! Form error types

use thiserror::Error;
use variant_client::ClientError;

/// Form error type
#[derive(Debug, Error)]
pub enum FormError {
    /// Remote call failed
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Aggregated pre-submission problems (creation flow)
    #[error("Please fill in the following fields: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Submission without a product selected
    #[error("Please select a product")]
    NoProductSelected,

    /// Edit submission with no variants loaded
    #[error("Please add at least one variant")]
    EmptyEditor,

    /// Remote removal of a variant the server never assigned an id to
    #[error("Variant id not found, cannot delete")]
    MissingVariantId,

    /// Editor index outside the current tree
    #[error("No such editor entry: variant {variant}, value {value:?}")]
    OutOfRange { variant: usize, value: Option<usize> },

    /// Selected file is not an image (edit flow gate)
    #[error("Not an image file: {0}")]
    NotAnImage(String),

    /// Hex code that would corrupt the color label round trip
    #[error("Invalid color hex: {0}")]
    InvalidColor(String),
}

impl FormError {
    pub(crate) fn out_of_range(variant: usize, value: Option<usize>) -> Self {
        FormError::OutOfRange { variant, value }
    }

    /// Problem list for UI rendering, when this is a validation failure
    pub fn problems(&self) -> Option<&[String]> {
        match self {
            FormError::Validation(problems) => Some(problems),
            _ => None,
        }
    }
}

/// Result type for form operations
pub type FormResult<T> = Result<T, FormError>;
