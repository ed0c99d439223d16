use crate::catalog::Catalog;
use crate::product::Product;

/// Type alias for product IDs (unique, stable identifiers from the catalog source)
pub type ProductId = u64;

/// Trait for catalog sources.
///
/// A provider is asked exactly once at startup for the full ordered product
/// sequence. Malformed sources must return an error instead of an empty catalog.
pub trait CatalogProvider {
    /// Loads and validates the catalog
    fn load(&self) -> anyhow::Result<Catalog>;

    /// Short human-readable description of where the products come from
    fn describe(&self) -> String;
}

/// Receives "show details for product P" intents.
///
/// Fire-and-forget: the caller never observes a result.
pub trait Navigator {
    /// Transitions to the detail view for `product`
    fn navigate_to_details(&mut self, product: &Product);
}
