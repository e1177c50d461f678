//! # Catalog State
//!
//! The menu, read-only after startup. No lock needed.

use cafe_core::catalog::Catalog;

#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    catalog: Catalog,
}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        CatalogState { catalog }
    }

    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
