//! Shared types for the variant admin tooling
//!
//! Wire entities, editor draft types, and response envelopes used by
//! both the HTTP client and the form crates.

pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};
