//! CSS color validation.
//!
//! Accepts hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`), CSS named colors,
//! `rgb()`/`rgba()` with channels 0-255 and alpha 0-1, and
//! `hsl()`/`hsla()` with hue 0-360, saturation and lightness 0-100%.

mod parse;

#[cfg(test)]
mod tests;

use parse::{hsl_in_range, is_named, rgb_in_range, HEX_RE};

pub use parse::NAMED_COLORS;

/// Check that a string is a recognized CSS color.
pub fn validate_color(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return false;
    }
    if s.starts_with('#') {
        return HEX_RE.is_match(s);
    }

    let lower = s.to_ascii_lowercase();
    if lower.starts_with("rgb") {
        return rgb_in_range(&lower);
    }
    if lower.starts_with("hsl") {
        return hsl_in_range(&lower);
    }
    is_named(&lower)
}
