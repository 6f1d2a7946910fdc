//! Compiled CSS rules and their serialization.

use indexmap::IndexMap;
use yled_config::PropertyMapping;

/// Selector → CSS property → final value.
///
/// Selectors and properties keep first-insertion order. Writing a property
/// that is already set replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledRuleSet {
    rules: IndexMap<String, IndexMap<String, String>>,
}

impl CompiledRuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, selector: &str, property: &str, value: impl Into<String>) {
        self.rules
            .entry(selector.to_string())
            .or_default()
            .insert(property.to_string(), value.into());
    }

    /// Rules of one styling property, with inherited values resolved to
    /// `supplied`.
    pub fn from_mapping(mapping: &PropertyMapping, supplied: &str) -> Self {
        let mut rules = Self::new();
        for (selector, declarations) in mapping.selectors() {
            for (property, rule) in declarations {
                rules.insert(selector, property, rule.resolve(supplied));
            }
        }
        rules
    }

    /// Union with `other`; `other` wins on collisions.
    pub fn merge(&mut self, other: CompiledRuleSet) {
        for (selector, declarations) in other.rules {
            let target = self.rules.entry(selector).or_default();
            for (property, value) in declarations {
                target.insert(property, value);
            }
        }
    }

    pub fn get(&self, selector: &str, property: &str) -> Option<&str> {
        self.rules
            .get(selector)
            .and_then(|decls| decls.get(property))
            .map(String::as_str)
    }

    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Number of selectors.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Serialize as CSS with every selector prefixed by `prefix`.
    ///
    /// ```text
    /// <prefix><selector> {
    ///   <property>: <value> !important;
    /// }
    /// ```
    ///
    /// Blocks are separated by a single newline. An empty set yields an
    /// empty string.
    pub fn to_css(&self, prefix: &str) -> String {
        let blocks: Vec<String> = self
            .rules
            .iter()
            .map(|(selector, declarations)| {
                let mut block = format!("{prefix}{selector} {{\n");
                for (property, value) in declarations {
                    block.push_str(&format!("  {property}: {value} !important;\n"));
                }
                block.push('}');
                block
            })
            .collect();
        blocks.join("\n")
    }
}
