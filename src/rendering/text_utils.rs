//! Text measurement and truncation against real font metrics.

use eframe::egui;

const ELLIPSIS: &str = "…";

/// Measures `text` in `font_id` without wrapping.
pub fn text_width(text: &str, font_id: &egui::FontId, painter: &egui::Painter) -> f32 {
    painter
        .layout_no_wrap(text.to_string(), font_id.clone(), egui::Color32::WHITE)
        .size()
        .x
}

/// Truncates text to fit within `available_width`, appending an ellipsis
/// when cut. Returns an empty string if not even the ellipsis fits.
pub fn truncate_text_to_fit(
    text: &str,
    available_width: f32,
    font_id: &egui::FontId,
    painter: &egui::Painter,
) -> String {
    if available_width <= 0.0 {
        return String::new();
    }
    if text_width(text, font_id, painter) <= available_width {
        return text.to_string();
    }

    let ellipsis_width = text_width(ELLIPSIS, font_id, painter);
    if ellipsis_width >= available_width {
        return String::new();
    }
    let available_for_text = available_width - ellipsis_width;

    // Binary search for the longest prefix that fits
    let chars: Vec<char> = text.chars().collect();
    let mut low = 0;
    let mut high = chars.len();
    while low < high {
        let mid = (low + high).div_ceil(2);
        let prefix: String = chars[..mid].iter().collect();
        if text_width(&prefix, font_id, painter) <= available_for_text {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    let mut result: String = chars[..low].iter().collect::<String>().trim_end().to_string();
    result.push_str(ELLIPSIS);
    result
}
