pub mod traits;
pub mod product;
pub mod catalog;
pub mod parser;
pub mod writer;
pub mod virtual_reader;
pub mod layout;
pub mod window;
pub mod formatting;
pub mod card;
pub mod detail;
pub mod navigation;
pub mod theme;

// Export traits
pub use traits::{CatalogProvider, Navigator, ProductId};

// Export data model
pub use product::{
    Product, ProductCategory, ProductSpecifications, SpecKey,
    ALL_SPEC_KEYS, MAX_RATING, UNKNOWN_BRAND
};
pub use catalog::{Catalog, CatalogError};

// Export providers
pub use parser::{
    parse_catalog, parse_catalog_reader, parse_catalog_str,
    EmbeddedCatalogProvider, JsonCatalogProvider
};
pub use virtual_reader::VirtualCatalogProvider;
pub use writer::CatalogWriter;

// Export layout and windowing
pub use layout::{compute_layout, ItemRect, LayoutConfig, LayoutGeometry};
pub use window::{
    MaterializedItem, PassStats, RenderedItem, SlotBinding,
    ViewSlot, Viewport, WindowConfig, WindowedList
};

// Export view models and navigation
pub use card::{render_card, CardEvent, ImageSource, ProductCardView, StockBadge};
pub use detail::{render_detail, CartAcknowledgement, CartButton, ProductDetailView, SpecRow, CART_ACK};
pub use navigation::{dispatch_card_event, NavigationStack, Route};
pub use formatting::{capitalize_first, chars_per_line, format_price, format_rating, wrap_lines};

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, adjust_brightness, with_alpha};
