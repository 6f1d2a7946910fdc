//! The style table: which kwargs of which element type turn into CSS.
//!
//! The registry is populated once and never mutated. The bundled table is
//! shared process-wide through [`StyleRegistry::bundled`]; custom tables are
//! owned values that callers pass by reference.

mod loader;
mod types;

use std::path::Path;

use indexmap::IndexMap;
use yled_common::{ConfigError, StyleError};

pub use loader::BUNDLED_STYLES;
pub use types::{CssValue, Declarations, ElementStyles, PropertyMapping};

/// Immutable element type → styling property table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleRegistry {
    elements: IndexMap<String, ElementStyles>,
}

impl StyleRegistry {
    /// The table bundled with the crate, parsed on first access.
    ///
    /// # Panics
    ///
    /// Panics on first access if the bundled resource is not a valid table.
    pub fn bundled() -> &'static StyleRegistry {
        loader::bundled()
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        loader::parse(json)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        loader::load_from_path(path)
    }

    /// Styling properties of `element`.
    ///
    /// An unknown element type is a hard error. A known element without a
    /// given property is not; callers check [`ElementStyles::property`].
    pub fn lookup(&self, element: &str) -> Result<&ElementStyles, StyleError> {
        self.elements
            .get(element)
            .ok_or_else(|| StyleError::unknown_element(element))
    }

    pub fn contains(&self, element: &str) -> bool {
        self.elements.contains_key(element)
    }

    pub fn element_types(&self) -> impl Iterator<Item = &str> {
        self.elements.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"{
        "button": {
            "background_color": {
                ".stButton > button": { "background-color": null },
                ".stButton > button:hover": { "background-color": null }
            },
            "border_color": {
                ".stButton > button": { "border-color": null, "border-style": "solid" }
            },
            "ghost": {}
        },
        "text": {
            "color": { ".stText": { "color": null } }
        }
    }"##;

    #[test]
    fn bundled_table_parses() {
        let registry = StyleRegistry::bundled();
        assert!(!registry.is_empty());
        assert!(registry.contains("button"));
        assert!(registry.contains("text"));
    }

    #[test]
    fn bundled_button_background_targets_only_background_color() {
        let button = StyleRegistry::bundled().lookup("button").unwrap();
        let mapping = button.property("background_color").unwrap();
        assert!(!mapping.is_empty());
        for (_, decls) in mapping.selectors() {
            assert_eq!(decls.len(), 1);
            assert_eq!(decls.get("background-color"), Some(&CssValue::Inherited));
        }
    }

    #[test]
    fn bundled_text_has_no_background() {
        let text = StyleRegistry::bundled().lookup("text").unwrap();
        assert!(text.is_styling_property("color"));
        assert!(text.is_styling_property("font_size"));
        assert!(!text.is_styling_property("background_color"));
    }

    #[test]
    fn resolve_follows_aliases_only_to_existing_properties() {
        let registry = StyleRegistry::from_json(SAMPLE).unwrap();
        let button = registry.lookup("button").unwrap();
        assert_eq!(button.resolve("bg_color"), button.property("background_color"));
        assert!(button.resolve("bg").is_some());
        assert!(!button.is_styling_property("bg_color"));

        let text = registry.lookup("text").unwrap();
        assert!(text.resolve("bg_color").is_none());
        assert!(text.resolve("font_color").is_some());
    }

    #[test]
    fn lookup_unknown_element_is_error() {
        let registry = StyleRegistry::from_json(SAMPLE).unwrap();
        let err = registry.lookup("nonexistent").unwrap_err();
        assert!(matches!(err, StyleError::UnknownElementType { .. }));
        assert!(err.to_string().contains("'nonexistent'"));
    }

    #[test]
    fn lookup_known_element_unknown_property_is_none() {
        let registry = StyleRegistry::from_json(SAMPLE).unwrap();
        let button = registry.lookup("button").unwrap();
        assert!(button.property("font_size").is_none());
    }

    #[test]
    fn null_becomes_inherited_and_string_becomes_fixed() {
        let registry = StyleRegistry::from_json(SAMPLE).unwrap();
        let mapping = registry
            .lookup("button")
            .unwrap()
            .property("border_color")
            .unwrap();
        let decls = mapping.declarations(".stButton > button").unwrap();
        assert_eq!(decls.get("border-color"), Some(&CssValue::Inherited));
        assert_eq!(
            decls.get("border-style"),
            Some(&CssValue::Fixed("solid".into()))
        );
    }

    #[test]
    fn css_value_resolve() {
        assert_eq!(CssValue::Inherited.resolve("red"), "red");
        assert_eq!(CssValue::Fixed("solid".into()).resolve("red"), "solid");
        assert!(CssValue::Inherited.is_inherited());
    }

    #[test]
    fn document_order_is_preserved() {
        let registry = StyleRegistry::from_json(SAMPLE).unwrap();
        let elements: Vec<&str> = registry.element_types().collect();
        assert_eq!(elements, vec!["button", "text"]);

        let button = registry.lookup("button").unwrap();
        let props: Vec<&str> = button.property_names().collect();
        assert_eq!(props, vec!["background_color", "border_color", "ghost"]);

        let selectors: Vec<&str> = button
            .property("background_color")
            .unwrap()
            .selectors()
            .map(|(sel, _)| sel)
            .collect();
        assert_eq!(
            selectors,
            vec![".stButton > button", ".stButton > button:hover"]
        );
    }

    #[test]
    fn property_with_no_selectors_is_still_a_styling_property() {
        let registry = StyleRegistry::from_json(SAMPLE).unwrap();
        let button = registry.lookup("button").unwrap();
        assert!(button.is_styling_property("ghost"));
        assert!(button.property("ghost").unwrap().is_empty());
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let err = StyleRegistry::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn non_string_literal_is_parse_error() {
        let err = StyleRegistry::from_json(r#"{"b": {"p": {".s": {"width": 10}}}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn load_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("styles.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let registry = StyleRegistry::load_from_path(&path).unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn load_from_missing_path_is_file_not_found() {
        let err = StyleRegistry::load_from_path(Path::new("/tmp/nonexistent_yled_styles.json"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }
}
