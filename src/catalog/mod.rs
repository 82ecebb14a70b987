//! Catalog API integration
//!
//! Typed client for the remote objekt catalog. Responses are decoded
//! at this boundary; missing or malformed payloads fail explicitly
//! instead of surfacing deep in business logic.

pub mod client;
pub mod types;

pub use client::{CatalogApi, CatalogClient};
pub use types::{ObjektBySlug, ObjektMetadata, ObjektRecord};
