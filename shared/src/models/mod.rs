//! Data models
//!
//! Wire entities mirror the admin API's JSON shapes; draft types are the
//! editor-side tree that exists only before submission.

pub(crate) mod de;
pub mod draft;
pub mod product;
pub mod variant;

// Re-exports
pub use draft::*;
pub use product::*;
pub use variant::*;
