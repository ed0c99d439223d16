//! Product card painting
//!
//! Draws a [`ProductCardView`] into a rectangle computed by the windowed
//! list. Cards are painted directly with the egui painter (no nested
//! layouts), so a card costs the same no matter where it sits in the list.

use eframe::egui;
use egui::{Align2, Color32, CornerRadius, FontId, Id, Rect, Sense, Stroke, StrokeKind, Vec2};
use rcatalog::card::CARD_TEXT_PADDING;
use rcatalog::{adjust_brightness, ImageSource, ProductCardView, ThemeColors};

use crate::presentation::color_mapping::stock_badge_color;
use crate::rendering::text_utils::truncate_text_to_fit;

/// Share of the card height used by the image area
const IMAGE_SHARE: f32 = 0.5;
const CORNER: u8 = 8;
const BADGE_CORNER: u8 = 10;
const NAME_LINE_HEIGHT: f32 = 19.0;

/// Paints a card and returns its click response.
///
/// The interaction id is derived from the product id, so hover and click
/// state follow the product rather than the slot or position.
pub fn paint_card(
    ui: &mut egui::Ui,
    rect: Rect,
    card: &ProductCardView,
    colors: &ThemeColors,
) -> egui::Response {
    let response = ui.interact(rect, Id::new(("product_card", card.product_id)), Sense::click());
    let painter = ui.painter_at(rect.expand(4.0));

    let fill = if response.hovered() {
        adjust_brightness(colors.card_background, 0.96)
    } else {
        colors.card_background
    };
    painter.rect_filled(rect.translate(Vec2::new(0.0, 2.0)), CORNER, colors.card_shadow);
    painter.rect_filled(rect, CORNER, fill);
    painter.rect_stroke(rect, CORNER, Stroke::new(1.0, colors.border), StrokeKind::Inside);

    let image_rect = Rect::from_min_size(rect.min, Vec2::new(rect.width(), rect.height() * IMAGE_SHARE));
    paint_image_area(&painter, image_rect, &card.image, colors);
    paint_stock_badge(&painter, image_rect, card, colors);

    let left = rect.left() + CARD_TEXT_PADDING;
    let text_width = rect.width() - CARD_TEXT_PADDING * 2.0;
    let mut y = image_rect.bottom() + CARD_TEXT_PADDING;

    painter.text(
        egui::pos2(left, y),
        Align2::LEFT_TOP,
        &card.category_label,
        FontId::proportional(11.0),
        colors.category,
    );
    y += 18.0;

    let name_font = FontId::proportional(15.0);
    for line in &card.name_lines {
        painter.text(egui::pos2(left, y), Align2::LEFT_TOP, line, name_font.clone(), colors.text_strong);
        y += NAME_LINE_HEIGHT;
    }
    y += 4.0;

    painter.text(
        egui::pos2(left, y),
        Align2::LEFT_TOP,
        format!("★ {}", card.rating_text),
        FontId::proportional(13.0),
        colors.star,
    );

    // Price and brand share the bottom line
    let bottom = rect.bottom() - CARD_TEXT_PADDING;
    let price_rect = painter.text(
        egui::pos2(left, bottom),
        Align2::LEFT_BOTTOM,
        &card.price_text,
        FontId::proportional(18.0),
        colors.price,
    );
    let brand_font = FontId::proportional(12.0);
    let brand_space = text_width - price_rect.width() - CARD_TEXT_PADDING;
    let brand = truncate_text_to_fit(&card.brand, brand_space, &brand_font, &painter);
    if !brand.is_empty() {
        painter.text(
            egui::pos2(rect.right() - CARD_TEXT_PADDING, bottom),
            Align2::RIGHT_BOTTOM,
            brand,
            brand_font,
            colors.text_dim,
        );
    }

    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Image area. Remote images are not fetched; a labelled placeholder is painted.
pub fn paint_image_area(painter: &egui::Painter, rect: Rect, image: &ImageSource, colors: &ThemeColors) {
    let top_corners = CornerRadius {
        nw: CORNER,
        ne: CORNER,
        sw: 0,
        se: 0,
    };
    painter.rect_filled(rect, top_corners, colors.image_placeholder);

    let label = match image {
        ImageSource::Uri(_) => "🖼",
        ImageSource::Placeholder => "No image",
    };
    painter.text(rect.center(), Align2::CENTER_CENTER, label, FontId::proportional(22.0), colors.text_dim);
}

fn paint_stock_badge(painter: &egui::Painter, image_rect: Rect, card: &ProductCardView, colors: &ThemeColors) {
    let galley = painter.layout_no_wrap(
        card.stock.label().to_string(),
        FontId::proportional(11.0),
        colors.badge_text,
    );
    let size = galley.size() + Vec2::new(12.0, 6.0);
    let badge = Rect::from_min_size(
        egui::pos2(image_rect.right() - size.x - 8.0, image_rect.top() + 8.0),
        size,
    );
    painter.rect_filled(badge, BADGE_CORNER, stock_badge_color(card.stock, colors));
    painter.galley(badge.min + Vec2::new(6.0, 3.0), galley, Color32::WHITE);
}
