//! Application context
//!
//! Explicit context object passed to handlers. Holds the read-only
//! registry and the catalog client; there are no ambient globals.

use std::sync::Arc;

use crate::catalog::CatalogApi;
use crate::registry::Registry;

pub struct AppContext {
    pub registry: Registry,
    pub catalog: Arc<dyn CatalogApi>,
}

impl AppContext {
    pub fn new(registry: Registry, catalog: Arc<dyn CatalogApi>) -> Self {
        Self { registry, catalog }
    }
}
