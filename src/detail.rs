//! Full detail view model for a single product.

use crate::card::{display_name, ImageSource, StockBadge};
use crate::formatting::{capitalize_first, format_price, format_rating};
use crate::product::{Product, SpecKey};
use crate::traits::ProductId;

/// Acknowledgement shown after the add-to-cart action
pub const CART_ACK: &str = "Added to cart!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecRow {
    pub key: SpecKey,
    /// Key name with the first letter uppercased
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartButton {
    pub label: &'static str,
    pub enabled: bool,
}

impl CartButton {
    fn for_stock(stock: StockBadge) -> Self {
        match stock {
            StockBadge::InStock => CartButton {
                label: "Add to Cart",
                enabled: true,
            },
            StockBadge::OutOfStock => CartButton {
                label: "Out of Stock",
                enabled: false,
            },
        }
    }
}

/// Result of pressing an enabled cart button. Nothing is actually ordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartAcknowledgement {
    pub product_id: ProductId,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetailView {
    pub product_id: ProductId,
    pub image: ImageSource,
    pub category_label: String,
    pub stock: StockBadge,
    pub name: String,
    pub price_text: String,
    /// Rating with one decimal, e.g. "4.5"
    pub rating_text: String,
    /// e.g. "4.5 out of 5"
    pub rating_caption: String,
    pub description: String,
    pub spec_rows: Vec<SpecRow>,
    pub cart_button: CartButton,
}

impl ProductDetailView {
    /// Runs the placeholder cart action.
    ///
    /// Returns `None` when the button is disabled.
    pub fn add_to_cart(&self) -> Option<CartAcknowledgement> {
        if !self.cart_button.enabled {
            return None;
        }
        tracing::info!(product_id = self.product_id, "add to cart");
        Some(CartAcknowledgement {
            product_id: self.product_id,
            message: CART_ACK,
        })
    }
}

pub fn render_detail(product: &Product) -> ProductDetailView {
    let stock = StockBadge::from_flag(product.in_stock);
    let rating_text = format_rating(product.rating);

    let spec_rows = product
        .specifications
        .entries()
        .into_iter()
        .map(|(key, value)| SpecRow {
            key,
            label: capitalize_first(key.wire_name()),
            value: value.to_string(),
        })
        .collect();

    ProductDetailView {
        product_id: product.id,
        image: ImageSource::for_product(product),
        category_label: product.category.label().to_uppercase(),
        stock,
        name: display_name(product).to_string(),
        price_text: format_price(product.price),
        rating_caption: format!("{} out of 5", rating_text),
        rating_text,
        description: product.description.clone(),
        spec_rows,
        cart_button: CartButton::for_stock(stock),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{ProductCategory, ProductSpecifications};

    fn headphones(in_stock: bool) -> Product {
        let mut specifications = ProductSpecifications::with_brand("SoundWave");
        specifications.set(SpecKey::BatteryLife, Some("30 hours".to_string()));
        specifications.set(SpecKey::Connectivity, Some("Bluetooth 5.0".to_string()));
        specifications.set(SpecKey::Weight, Some("   ".to_string()));
        Product {
            id: 1,
            name: "Wireless Headphones".to_string(),
            price: 199.99,
            image: String::new(),
            description: "Over-ear headphones with noise cancellation.".to_string(),
            category: ProductCategory::Audio,
            rating: 4.5,
            in_stock,
            specifications,
        }
    }

    #[test]
    fn test_detail_text() {
        let view = render_detail(&headphones(true));
        assert_eq!(view.price_text, "$199.99");
        assert_eq!(view.rating_caption, "4.5 out of 5");
        assert_eq!(view.category_label, "AUDIO");
        assert_eq!(view.image, ImageSource::Placeholder);
        assert_eq!(view.description, "Over-ear headphones with noise cancellation.");
    }

    #[test]
    fn test_spec_rows_skip_empty_and_capitalize() {
        let view = render_detail(&headphones(true));
        let labels: Vec<&str> = view.spec_rows.iter().map(|row| row.label.as_str()).collect();
        assert_eq!(labels, vec!["Brand", "BatteryLife", "Connectivity"]);
        assert_eq!(view.spec_rows[1].value, "30 hours");
    }

    #[test]
    fn test_blank_name_matches_card() {
        let mut product = headphones(true);
        product.name = "  ".to_string();
        let view = render_detail(&product);
        assert_eq!(view.name, crate::card::UNNAMED_PRODUCT);
        assert_eq!(crate::card::render_card(&product, 300.0).name_lines, vec![view.name.clone()]);
    }

    #[test]
    fn test_cart_button_follows_stock() {
        let view = render_detail(&headphones(true));
        assert_eq!(view.cart_button.label, "Add to Cart");
        let ack = view.add_to_cart().unwrap();
        assert_eq!(ack.message, CART_ACK);
        assert_eq!(ack.product_id, 1);

        let view = render_detail(&headphones(false));
        assert_eq!(view.cart_button.label, "Out of Stock");
        assert!(!view.cart_button.enabled);
        assert_eq!(view.add_to_cart(), None);
    }
}
