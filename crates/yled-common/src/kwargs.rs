//! Keyword-argument maps handed over by host wrappers.
//!
//! Kwargs keep the caller's insertion order (`serde_json` is built with
//! `preserve_order`), which decides the winner when two styling arguments
//! write the same CSS property of the same selector.

use serde_json::Value;

use crate::{Result, YledError};

/// Insertion-ordered argument name → value map.
pub type Kwargs = serde_json::Map<String, Value>;

/// Convert a JSON object into kwargs.
pub fn kwargs_from(value: Value) -> Result<Kwargs> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(YledError::Kwargs(format!(
            "expected a JSON object, got {}",
            type_name(&other)
        ))),
    }
}

/// Render a caller-supplied value as CSS text.
///
/// Strings are used verbatim; numbers and booleans use their JSON form.
/// `null` means "not provided" and renders as nothing.
pub fn css_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kwargs_from_object_keeps_order() {
        let kwargs = kwargs_from(json!({"z": 1, "a": 2, "m": 3})).unwrap();
        let keys: Vec<&str> = kwargs.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn kwargs_from_rejects_non_objects() {
        let err = kwargs_from(json!([1, 2])).unwrap_err();
        assert!(err.to_string().contains("an array"));
        assert!(kwargs_from(json!("text")).is_err());
    }

    #[test]
    fn css_text_renders_strings_verbatim() {
        assert_eq!(css_text(&json!("#ff0000")), Some("#ff0000".into()));
        assert_eq!(css_text(&json!("10px 20px")), Some("10px 20px".into()));
    }

    #[test]
    fn css_text_renders_scalars() {
        assert_eq!(css_text(&json!(16)), Some("16".into()));
        assert_eq!(css_text(&json!(0.5)), Some("0.5".into()));
        assert_eq!(css_text(&json!(true)), Some("true".into()));
    }

    #[test]
    fn css_text_null_is_absent() {
        assert_eq!(css_text(&Value::Null), None);
    }
}
