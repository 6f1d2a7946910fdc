//! Property kinds, aliases and reserved host parameters.

use serde_json::Value;

use super::predicates;

/// What a styling value is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    Color,
    Length,
    Spacing,
    BorderStyle,
    FontWeight,
    TextAlign,
    Numeric,
}

/// Shorthand names accepted in place of the canonical property name.
pub const ALIASES: &[(&str, &str)] = &[
    ("bg_color", "background_color"),
    ("bg", "background_color"),
    ("text_color", "color"),
    ("font_color", "color"),
];

/// Arguments owned by the host widget. They are forwarded untouched and
/// never reported as unknown styling properties.
pub const HOST_PARAMETERS: &[&str] = &[
    "key",
    "label",
    "help",
    "value",
    "disabled",
    "on_click",
    "on_change",
    "args",
    "kwargs",
    "type",
    "icon",
    "options",
    "index",
    "default",
    "format",
    "format_func",
    "placeholder",
    "min_value",
    "max_value",
    "step",
    "max_chars",
    "label_visibility",
    "use_container_width",
    "data",
    "file_name",
    "mime",
    "expanded",
    "delta",
    "body",
    "unsafe_allow_html",
    "height",
    "width",
];

/// Canonical name for `name`, following [`ALIASES`].
pub fn resolve_alias(name: &str) -> &str {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(name)
}

pub fn is_host_parameter(name: &str) -> bool {
    HOST_PARAMETERS.contains(&name)
}

impl PropertyKind {
    /// Kind of a canonical property name, if it has one.
    pub fn for_property(name: &str) -> Option<Self> {
        let kind = match name {
            "color" | "background_color" | "border_color" | "outline_color" | "tag_color" => {
                Self::Color
            }
            "width" | "height" | "min_width" | "max_width" | "min_height" | "max_height"
            | "font_size" | "border_radius" | "border_width" | "letter_spacing" => Self::Length,
            "padding" | "margin" => Self::Spacing,
            "border_style" => Self::BorderStyle,
            "font_weight" => Self::FontWeight,
            "text_align" => Self::TextAlign,
            "opacity" | "z_index" | "flex_grow" | "flex_shrink" => Self::Numeric,
            _ => return None,
        };
        Some(kind)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Length => "length",
            Self::Spacing => "spacing",
            Self::BorderStyle => "border style",
            Self::FontWeight => "font weight",
            Self::TextAlign => "text align",
            Self::Numeric => "numeric",
        }
    }

    /// Accepted formats, most common first.
    pub fn formats(self) -> &'static [&'static str] {
        match self {
            Self::Color => &[
                "#hex (#fff, #ffffff)",
                "rgb(r, g, b)",
                "rgba(r, g, b, a)",
                "hsl(h, s%, l%)",
                "named colors (red, blue, ...)",
            ],
            Self::Length => &[
                "pixels (10px)",
                "em units (1.5em)",
                "rem units (2rem)",
                "percentage (50%)",
                "viewport units (100vh, 50vw)",
            ],
            Self::Spacing => &[
                "one length (10px)",
                "vertical horizontal (10px 20px)",
                "top horizontal bottom (5px 10px 15px)",
                "top right bottom left (1px 2px 3px 4px)",
            ],
            Self::BorderStyle => &[
                "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge",
                "inset", "outset",
            ],
            Self::FontWeight => &[
                "normal",
                "bold",
                "bolder",
                "lighter",
                "100 to 900 in steps of 100",
            ],
            Self::TextAlign => &["left", "center", "right", "justify", "start", "end"],
            Self::Numeric => &["a number (0.5, 10)"],
        }
    }

    pub fn accepts(self, value: &Value) -> bool {
        match self {
            Self::Color => predicates::is_valid_color(value),
            Self::Length => predicates::is_valid_length(value),
            Self::Spacing => predicates::is_valid_spacing(value),
            Self::BorderStyle => predicates::is_valid_border_style(value),
            Self::FontWeight => predicates::is_valid_font_weight(value),
            Self::TextAlign => predicates::is_valid_text_align(value),
            Self::Numeric => predicates::is_valid_numeric(value),
        }
    }
}
