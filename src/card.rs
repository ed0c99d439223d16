//! Summary card view model for one product in the list.

use crate::formatting::{chars_per_line, format_price, format_rating, wrap_lines};
use crate::product::Product;
use crate::traits::ProductId;

/// Lines of product name shown on a card
pub const CARD_NAME_MAX_LINES: usize = 2;

/// Inner horizontal padding of the card text block
pub const CARD_TEXT_PADDING: f32 = 12.0;

/// Average glyph width of the card name font, used to wrap names
pub const NAME_GLYPH_WIDTH: f32 = 8.0;

/// Shown when a product has no name
pub const UNNAMED_PRODUCT: &str = "Unnamed product";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockBadge {
    InStock,
    OutOfStock,
}

impl StockBadge {
    pub fn from_flag(in_stock: bool) -> Self {
        if in_stock {
            StockBadge::InStock
        } else {
            StockBadge::OutOfStock
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockBadge::InStock => "In Stock",
            StockBadge::OutOfStock => "Out of Stock",
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, StockBadge::InStock)
    }
}

/// Where a card or detail view takes its image from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Uri(String),
    Placeholder,
}

impl ImageSource {
    pub fn for_product(product: &Product) -> Self {
        if product.has_image() {
            ImageSource::Uri(product.image.trim().to_string())
        } else {
            ImageSource::Placeholder
        }
    }
}

/// Events a card reports to its owner. Cards never navigate themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEvent {
    Selected { product_id: ProductId },
}

/// Everything a painter needs to draw a product card.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCardView {
    pub product_id: ProductId,
    pub width: f32,
    pub image: ImageSource,
    /// Category in uppercase
    pub category_label: String,
    pub stock: StockBadge,
    /// At most `CARD_NAME_MAX_LINES` lines, ellipsized when cut
    pub name_lines: Vec<String>,
    pub rating_text: String,
    pub price_text: String,
    pub brand: String,
}

impl ProductCardView {
    /// The event emitted when the card is tapped.
    pub fn select(&self) -> CardEvent {
        CardEvent::Selected {
            product_id: self.product_id,
        }
    }

    /// All visible text of the card, top to bottom.
    pub fn text(&self) -> Vec<&str> {
        let mut text = vec![self.category_label.as_str(), self.stock.label()];
        text.extend(self.name_lines.iter().map(String::as_str));
        text.push(&self.rating_text);
        text.push(&self.price_text);
        text.push(&self.brand);
        text
    }
}

/// Product name, or `UNNAMED_PRODUCT` when the source left it blank.
pub(crate) fn display_name(product: &Product) -> &str {
    if product.name.trim().is_empty() {
        UNNAMED_PRODUCT
    } else {
        product.name.as_str()
    }
}

/// Builds the card for `product` at the given card width.
///
/// Pure: the result depends only on the product and the width.
pub fn render_card(product: &Product, width: f32) -> ProductCardView {
    let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
    let text_width = width - CARD_TEXT_PADDING * 2.0;
    let name = display_name(product);

    ProductCardView {
        product_id: product.id,
        width,
        image: ImageSource::for_product(product),
        category_label: product.category.label().to_uppercase(),
        stock: StockBadge::from_flag(product.in_stock),
        name_lines: wrap_lines(
            name,
            chars_per_line(text_width, NAME_GLYPH_WIDTH),
            CARD_NAME_MAX_LINES,
        ),
        rating_text: format_rating(product.rating),
        price_text: format_price(product.price),
        brand: product.brand().to_string(),
    }
}
