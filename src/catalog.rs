//! Validated, immutable product sequence.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::product::Product;
use crate::traits::ProductId;

/// Document-level catalog failures. Any of these aborts loading.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog document has no \"products\" array")]
    MissingProducts,

    #[error("catalog contains no readable products ({skipped} record(s) skipped)")]
    Empty { skipped: usize },

    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),
}

/// Ordered, immutable product sequence with an id index.
///
/// Cloning is cheap; the products are shared.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<[Product]>,
    positions: Arc<HashMap<ProductId, usize>>,
}

impl Catalog {
    /// Builds a catalog, rejecting empty input and duplicate identifiers.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        if products.is_empty() {
            return Err(CatalogError::Empty { skipped: 0 });
        }

        let mut positions = HashMap::with_capacity(products.len());
        for (index, product) in products.iter().enumerate() {
            if positions.insert(product.id, index).is_some() {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }

        Ok(Self {
            products: products.into(),
            positions: Arc::new(positions),
        })
    }

    /// All products in source order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.positions.get(&id).map(|&index| &self.products[index])
    }

    /// Position of a product in source order.
    pub fn position(&self, id: ProductId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// Number of products currently in stock
    pub fn in_stock_count(&self) -> usize {
        self.products.iter().filter(|p| p.in_stock).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductSpecifications;

    fn product(id: ProductId) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            price: 10.0,
            image: String::new(),
            description: String::new(),
            category: Default::default(),
            rating: 4.0,
            in_stock: id % 2 == 0,
            specifications: ProductSpecifications::with_brand("Acme"),
        }
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::new(vec![product(5), product(7), product(9)]).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(7).map(|p| p.id), Some(7));
        assert_eq!(catalog.position(9), Some(2));
        assert!(catalog.get(1).is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(vec![product(1), product(2), product(1)]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(1))));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(Catalog::new(Vec::new()), Err(CatalogError::Empty { .. })));
    }

    #[test]
    fn test_in_stock_count() {
        let catalog = Catalog::new(vec![product(1), product(2), product(4)]).unwrap();
        assert_eq!(catalog.in_stock_count(), 2);
    }
}
