//! Style table type definitions.
//!
//! The table nests four levels deep:
//! `element type → styling property → selector → CSS property → value rule`.
//! Every level keeps document order, so compiled rules come out in the order
//! the table author wrote them.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::validation::resolve_alias;

/// Value rule for one CSS property.
///
/// In the JSON table a string is a fixed literal and `null` means "use the
/// value the caller passed for the styling property".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<String>")]
pub enum CssValue {
    /// Always emit this literal, whatever the caller passed.
    Fixed(String),
    /// Substitute the caller's value.
    Inherited,
}

impl CssValue {
    /// Resolve against the caller's rendered value.
    pub fn resolve<'a>(&'a self, supplied: &'a str) -> &'a str {
        match self {
            CssValue::Fixed(literal) => literal,
            CssValue::Inherited => supplied,
        }
    }

    pub fn is_inherited(&self) -> bool {
        matches!(self, CssValue::Inherited)
    }
}

impl From<Option<String>> for CssValue {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(literal) => CssValue::Fixed(literal),
            None => CssValue::Inherited,
        }
    }
}

/// CSS declarations for one selector: CSS property → value rule.
pub type Declarations = IndexMap<String, CssValue>;

/// Selectors targeted by one styling property.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct PropertyMapping {
    selectors: IndexMap<String, Declarations>,
}

impl PropertyMapping {
    /// Iterate `(selector, declarations)` in table order.
    pub fn selectors(&self) -> impl Iterator<Item = (&str, &Declarations)> {
        self.selectors.iter().map(|(sel, decls)| (sel.as_str(), decls))
    }

    pub fn declarations(&self, selector: &str) -> Option<&Declarations> {
        self.selectors.get(selector)
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }
}

/// Styling properties recognized for one element type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ElementStyles {
    properties: IndexMap<String, PropertyMapping>,
}

impl ElementStyles {
    pub fn property(&self, name: &str) -> Option<&PropertyMapping> {
        self.properties.get(name)
    }

    /// Mapping for `name`, or for the canonical name when `name` is an alias
    /// such as `bg_color`.
    pub fn resolve(&self, name: &str) -> Option<&PropertyMapping> {
        self.property(name).or_else(|| self.property(resolve_alias(name)))
    }

    pub fn is_styling_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
