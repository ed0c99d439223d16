//! Text formatting for product views.
//!
//! Everything here is deterministic: the same input always yields the same
//! text, so re-rendering a card never changes what is displayed.

/// Formats a price with a currency sign and exactly two decimals.
///
/// # Examples
/// ```
/// # use rcatalog::format_price;
/// assert_eq!(format_price(129.0), "$129.00");
/// assert_eq!(format_price(49.5), "$49.50");
/// ```
pub fn format_price(price: f64) -> String {
    let price = if price.is_finite() { price.max(0.0) } else { 0.0 };
    format!("${:.2}", price)
}

/// Formats a rating with exactly one decimal.
///
/// # Examples
/// ```
/// # use rcatalog::format_rating;
/// assert_eq!(format_rating(4.0), "4.0");
/// assert_eq!(format_rating(4.56), "4.6");
/// ```
pub fn format_rating(rating: f64) -> String {
    let rating = if rating.is_finite() { rating } else { 0.0 };
    format!("{:.1}", rating)
}

/// Uppercases the first character, leaving the rest untouched.
///
/// # Examples
/// ```
/// # use rcatalog::capitalize_first;
/// assert_eq!(capitalize_first("batteryLife"), "BatteryLife");
/// assert_eq!(capitalize_first(""), "");
/// ```
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// How many characters of an average glyph width fit into `width`.
pub fn chars_per_line(width: f32, glyph_width: f32) -> usize {
    if !width.is_finite() || width <= 0.0 || glyph_width <= 0.0 {
        return 1;
    }
    ((width / glyph_width).floor() as usize).max(1)
}

/// Greedy word wrap into at most `max_lines` lines of `max_chars` characters.
///
/// Words longer than a line are split. When text is cut, the last line ends
/// with an ellipsis.
pub fn wrap_lines(text: &str, max_chars: usize, max_lines: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    if max_lines == 0 {
        return Vec::new();
    }

    let mut pieces: Vec<String> = Vec::new();
    for word in text.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();
        for chunk in chars.chunks(max_chars) {
            pieces.push(chunk.iter().collect());
        }
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    let mut truncated = false;

    for piece in &pieces {
        let len = piece.chars().count();
        let needed = if current_len == 0 { len } else { current_len + 1 + len };
        if needed <= max_chars {
            if current_len > 0 {
                current.push(' ');
            }
            current.push_str(piece);
            current_len = needed;
            continue;
        }

        lines.push(std::mem::take(&mut current));
        if lines.len() == max_lines {
            truncated = true;
            break;
        }
        current.push_str(piece);
        current_len = len;
    }

    if !truncated {
        if current_len > 0 {
            lines.push(current);
        }
        return lines;
    }

    if let Some(last) = lines.last_mut() {
        let mut chars: Vec<char> = last.chars().collect();
        while chars.len() + 1 > max_chars {
            chars.pop();
        }
        while chars.last().is_some_and(|c| c.is_whitespace()) {
            chars.pop();
        }
        chars.push('…');
        *last = chars.into_iter().collect();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_always_two_decimals() {
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(1349.5), "$1349.50");
        assert_eq!(format_price(-3.0), "$0.00");
        assert_eq!(format_price(f64::NAN), "$0.00");
    }

    #[test]
    fn test_rating_one_decimal() {
        assert_eq!(format_rating(5.0), "5.0");
        assert_eq!(format_rating(3.94), "3.9");
    }

    #[test]
    fn test_wrap_fits_without_truncation() {
        assert_eq!(wrap_lines("Smart Fitness Watch", 30, 2), vec!["Smart Fitness Watch"]);
        assert_eq!(wrap_lines("Smart Fitness Watch", 13, 2), vec!["Smart Fitness", "Watch"]);
        assert!(wrap_lines("   ", 10, 2).is_empty());
    }

    #[test]
    fn test_wrap_truncates_with_ellipsis() {
        let lines = wrap_lines("Wireless Noise-Cancelling Over-Ear Headphones Deluxe", 16, 2);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with('…'));
        assert!(lines.iter().all(|l| l.chars().count() <= 16));
    }

    #[test]
    fn test_wrap_splits_long_words() {
        let lines = wrap_lines("abcdefghij", 4, 3);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);

        let lines = wrap_lines("abcdefghijkl", 4, 2);
        assert_eq!(lines, vec!["abcd", "efg…"]);
    }

    #[test]
    fn test_chars_per_line() {
        assert_eq!(chars_per_line(85.0, 8.5), 10);
        assert_eq!(chars_per_line(0.0, 8.5), 1);
        assert_eq!(chars_per_line(f32::NAN, 8.5), 1);
    }
}
