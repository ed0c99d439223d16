//! Route stack between the product list and product details.

use crate::card::CardEvent;
use crate::catalog::Catalog;
use crate::product::Product;
use crate::traits::Navigator;

#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    ProductList,
    /// Carries the full record, not just its id
    ProductDetails { product: Product },
}

/// A minimal navigation stack rooted at the product list.
#[derive(Debug, Clone)]
pub struct NavigationStack {
    routes: Vec<Route>,
}

impl NavigationStack {
    pub fn new() -> Self {
        Self {
            routes: vec![Route::ProductList],
        }
    }

    pub fn current(&self) -> &Route {
        // The root route is never popped
        &self.routes[self.routes.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.routes.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.routes.len() > 1
    }

    /// Pops the top route. Returns false at the root.
    pub fn go_back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.routes.pop();
        true
    }

    /// Product currently shown in details, if any.
    pub fn current_product(&self) -> Option<&Product> {
        match self.current() {
            Route::ProductDetails { product } => Some(product),
            Route::ProductList => None,
        }
    }
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for NavigationStack {
    fn navigate_to_details(&mut self, product: &Product) {
        tracing::debug!(product_id = product.id, "navigate to details");
        self.routes.push(Route::ProductDetails {
            product: product.clone(),
        });
    }
}

/// Resolves a card event against the catalog and forwards it to `navigator`.
///
/// Returns false if the event refers to an id not in the catalog.
pub fn dispatch_card_event(
    event: CardEvent,
    catalog: &Catalog,
    navigator: &mut dyn Navigator,
) -> bool {
    match event {
        CardEvent::Selected { product_id } => match catalog.get(product_id) {
            Some(product) => {
                navigator.navigate_to_details(product);
                true
            }
            None => {
                tracing::warn!(product_id, "selected product is not in the catalog");
                false
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_catalog_str;

    struct RecordingNavigator {
        visited: Vec<Product>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate_to_details(&mut self, product: &Product) {
            self.visited.push(product.clone());
        }
    }

    fn catalog() -> Catalog {
        parse_catalog_str(
            r#"{"products":[
                {"id": 3, "name": "Mouse", "price": 25, "specifications": {"brand": "Vortex"}},
                {"id": 7, "name": "Power Bank", "price": 49.99, "inStock": false,
                 "specifications": {"brand": "ChargeMax", "capacity": "20000mAh"}}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_dispatch_carries_exact_record() {
        let catalog = catalog();
        let mut navigator = RecordingNavigator { visited: Vec::new() };

        assert!(dispatch_card_event(
            CardEvent::Selected { product_id: 7 },
            &catalog,
            &mut navigator
        ));
        assert_eq!(navigator.visited.len(), 1);
        assert_eq!(&navigator.visited[0], catalog.get(7).unwrap());

        assert!(!dispatch_card_event(
            CardEvent::Selected { product_id: 99 },
            &catalog,
            &mut navigator
        ));
        assert_eq!(navigator.visited.len(), 1);
    }

    #[test]
    fn test_stack_back() {
        let catalog = catalog();
        let mut stack = NavigationStack::new();
        assert!(!stack.go_back());
        assert_eq!(stack.current(), &Route::ProductList);

        dispatch_card_event(CardEvent::Selected { product_id: 3 }, &catalog, &mut stack);
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.current_product().map(|p| p.id), Some(3));

        assert!(stack.go_back());
        assert_eq!(stack.current_product(), None);
    }
}
