//! Value predicates, one per property kind.
//!
//! Every predicate takes a raw kwargs value. Anything other than a JSON
//! string fails, except [`is_valid_numeric`] which also takes numbers.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use crate::colors::validate_color;

static LENGTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?(\d+(\.\d+)?|\.\d+)(px|em|rem|%|vh|vw)$").unwrap());

pub const BORDER_STYLES: &[&str] = &[
    "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset",
];

pub const FONT_WEIGHT_KEYWORDS: &[&str] = &["normal", "bold", "bolder", "lighter"];

pub const TEXT_ALIGNMENTS: &[&str] = &["left", "center", "right", "justify", "start", "end"];

pub fn is_valid_color(value: &Value) -> bool {
    value.as_str().is_some_and(validate_color)
}

pub fn is_valid_length(value: &Value) -> bool {
    value.as_str().is_some_and(length_str)
}

/// One to four lengths separated by whitespace, as in `padding: 10px 20px`.
pub fn is_valid_spacing(value: &Value) -> bool {
    let Some(s) = value.as_str() else {
        return false;
    };
    let parts: Vec<&str> = s.split_whitespace().collect();
    (1..=4).contains(&parts.len()) && parts.iter().all(|p| length_str(p))
}

pub fn is_valid_border_style(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|s| BORDER_STYLES.contains(&s.trim().to_ascii_lowercase().as_str()))
}

/// Keywords or `100`..`900` in steps of 100. Bare numbers are rejected.
pub fn is_valid_font_weight(value: &Value) -> bool {
    let Some(s) = value.as_str() else {
        return false;
    };
    let s = s.trim();
    if FONT_WEIGHT_KEYWORDS.contains(&s.to_ascii_lowercase().as_str()) {
        return true;
    }
    s.parse::<u16>()
        .map(|w| (100..=900).contains(&w) && w % 100 == 0)
        .unwrap_or(false)
}

pub fn is_valid_text_align(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|s| TEXT_ALIGNMENTS.contains(&s.trim().to_ascii_lowercase().as_str()))
}

pub fn is_valid_numeric(value: &Value) -> bool {
    match value {
        Value::Number(_) => true,
        Value::String(s) => s.trim().parse::<f64>().is_ok_and(f64::is_finite),
        _ => false,
    }
}

fn length_str(s: &str) -> bool {
    s == "0" || LENGTH_RE.is_match(s)
}
