//! Tests for color validation.

use super::*;

#[test]
fn accepts_hex_forms() {
    for c in ["#FF0000", "#fff", "#000000", "#abc", "#abcd", "#00d4ff80"] {
        assert!(validate_color(c), "'{c}' should be valid");
    }
}

#[test]
fn rejects_bad_hex() {
    for c in ["#gggggg", "#ff", "#fffff", "#fffffff", "#", "ff0000"] {
        assert!(!validate_color(c), "'{c}' should be invalid");
    }
}

#[test]
fn accepts_named_colors_case_insensitively() {
    for c in ["red", "blue", "transparent", "rebeccapurple", "RED", "CurrentColor"] {
        assert!(validate_color(c), "'{c}' should be valid");
    }
    assert!(!validate_color("invalidcolor"));
    assert!(!validate_color("not-a-color"));
}

#[test]
fn accepts_rgb_and_rgba() {
    for c in [
        "rgb(255,0,0)",
        "rgb(255, 0, 0)",
        "rgba(255,0,0,0.5)",
        "rgba( 100 , 180 , 255 , 1 )",
        "RGBA(0, 0, 0, .25)",
    ] {
        assert!(validate_color(c), "'{c}' should be valid");
    }
}

#[test]
fn rejects_rgb_out_of_range_or_malformed() {
    for c in [
        "rgb(300, 0, 0)",
        "rgba(255, 0, 0, 2)",
        "rgb(10,20)",
        "rgb(255,0,0,0.5)",
        "rgba(255,0,0)",
        "rgb(-1,0,0)",
    ] {
        assert!(!validate_color(c), "'{c}' should be invalid");
    }
}

#[test]
fn accepts_hsl_and_hsla() {
    for c in [
        "hsl(0,100%,50%)",
        "hsl(0, 100%, 50%)",
        "hsla(0, 100%, 50%, 0.5)",
        "hsl(360, 0%, 0%)",
        "hsl(120.5, 50.5%, 20%)",
    ] {
        assert!(validate_color(c), "'{c}' should be valid");
    }
}

#[test]
fn rejects_hsl_out_of_range() {
    for c in [
        "hsl(361, 100%, 50%)",
        "hsl(0, 101%, 50%)",
        "hsl(0, 100, 50%)",
        "hsla(0, 100%, 50%, 1.5)",
    ] {
        assert!(!validate_color(c), "'{c}' should be invalid");
    }
}

#[test]
fn rejects_empty_and_whitespace() {
    assert!(!validate_color(""));
    assert!(!validate_color("   "));
}

#[test]
fn named_color_list_is_lowercase() {
    assert!(NAMED_COLORS
        .iter()
        .all(|c| c.chars().all(|ch| ch.is_ascii_lowercase())));
}
