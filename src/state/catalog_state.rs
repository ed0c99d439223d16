//! Loaded catalog state.

use rcatalog::Catalog;

/// The catalog currently shown and a description of its source.
#[derive(Debug, Default)]
pub struct CatalogState {
    catalog: Option<Catalog>,
    source: Option<String>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, catalog: Catalog, source: String) {
        self.catalog = Some(catalog);
        self.source = Some(source);
    }

    pub fn clear(&mut self) {
        self.catalog = None;
        self.source = None;
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    /// Human-readable source, e.g. a file path
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}
