//! Admin forms for product variants
//!
//! Three flows against the variant admin API: a creation form, an edit
//! form, and the list/delete view. Each is a plain state machine generic
//! over [`VariantService`], leaving rendering and prompting to the caller.

pub mod create;
pub mod edit;
pub mod editor;
pub mod error;
pub mod list;
pub mod validate;

pub use create::CreateForm;
pub use edit::EditForm;
pub use editor::VariantEditor;
pub use error::{FormError, FormResult};
pub use list::CatalogView;

// Re-export the surface the forms are built on
pub use shared::models::{ImageSource, ValueContent, ValueDraft, VariantDraft, VariantKind};
pub use variant_client::{ClientConfig, VariantApi, VariantService};
