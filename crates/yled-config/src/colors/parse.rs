//! Internal color matching helpers.
//!
//! Regexes recognize the shape of each functional notation; range checks on
//! the captured components happen in the `*_in_range` helpers.

use regex::Regex;
use std::sync::LazyLock;

/// `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
pub(crate) static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap()
});

/// `rgb(r, g, b)` with integer channels.
pub(crate) static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$").unwrap()
});

/// `rgba(r, g, b, a)` with integer channels and a decimal alpha.
pub(crate) static RGBA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d*\.?\d+)\s*\)$",
    )
    .unwrap()
});

/// `hsl(h, s%, l%)`.
pub(crate) static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^hsl\(\s*(\d*\.?\d+)\s*,\s*(\d*\.?\d+)%\s*,\s*(\d*\.?\d+)%\s*\)$").unwrap()
});

/// `hsla(h, s%, l%, a)`.
pub(crate) static HSLA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^hsla\(\s*(\d*\.?\d+)\s*,\s*(\d*\.?\d+)%\s*,\s*(\d*\.?\d+)%\s*,\s*(\d*\.?\d+)\s*\)$",
    )
    .unwrap()
});

/// CSS named colors, plus `transparent` and `currentcolor`.
pub const NAMED_COLORS: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "currentcolor", "cyan",
    "darkblue", "darkcyan", "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki",
    "darkmagenta", "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon",
    "darkseagreen", "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise",
    "darkviolet", "deeppink", "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick",
    "floralwhite", "forestgreen", "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod",
    "gray", "green", "greenyellow", "grey", "honeydew", "hotpink", "indianred", "indigo",
    "ivory", "khaki", "lavender", "lavenderblush", "lawngreen", "lemonchiffon", "lightblue",
    "lightcoral", "lightcyan", "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey",
    "lightpink", "lightsalmon", "lightseagreen", "lightskyblue", "lightslategray",
    "lightslategrey", "lightsteelblue", "lightyellow", "lime", "limegreen", "linen", "magenta",
    "maroon", "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple",
    "mediumseagreen", "mediumslateblue", "mediumspringgreen", "mediumturquoise",
    "mediumvioletred", "midnightblue", "mintcream", "mistyrose", "moccasin", "navajowhite",
    "navy", "oldlace", "olive", "olivedrab", "orange", "orangered", "orchid", "palegoldenrod",
    "palegreen", "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru", "pink",
    "plum", "powderblue", "purple", "rebeccapurple", "red", "rosybrown", "royalblue",
    "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell", "sienna", "silver", "skyblue",
    "slateblue", "slategray", "slategrey", "snow", "springgreen", "steelblue", "tan", "teal",
    "thistle", "tomato", "transparent", "turquoise", "violet", "wheat", "white", "whitesmoke",
    "yellow", "yellowgreen",
];

fn channel_in_range(s: &str) -> bool {
    s.parse::<u16>().map(|c| c <= 255).unwrap_or(false)
}

fn fraction_in_range(s: &str, max: f64) -> bool {
    s.parse::<f64>()
        .map(|v| v.is_finite() && (0.0..=max).contains(&v))
        .unwrap_or(false)
}

pub(super) fn is_named(s: &str) -> bool {
    NAMED_COLORS.contains(&s)
}

pub(super) fn rgb_in_range(s: &str) -> bool {
    if let Some(caps) = RGB_RE.captures(s) {
        return (1..=3).all(|i| channel_in_range(&caps[i]));
    }
    if let Some(caps) = RGBA_RE.captures(s) {
        return (1..=3).all(|i| channel_in_range(&caps[i])) && fraction_in_range(&caps[4], 1.0);
    }
    false
}

pub(super) fn hsl_in_range(s: &str) -> bool {
    let components = |caps: &regex::Captures<'_>| {
        fraction_in_range(&caps[1], 360.0)
            && fraction_in_range(&caps[2], 100.0)
            && fraction_in_range(&caps[3], 100.0)
    };
    if let Some(caps) = HSL_RE.captures(s) {
        return components(&caps);
    }
    if let Some(caps) = HSLA_RE.captures(s) {
        return components(&caps) && fraction_in_range(&caps[4], 1.0);
    }
    false
}
