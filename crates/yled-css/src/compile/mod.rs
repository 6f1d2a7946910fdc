//! Kwargs partitioning and rule compilation.
//!
//! Kwargs are walked in insertion order. A key that names a styling
//! property of the element, directly or through an alias such as
//! `bg_color`, is removed and its value substituted into the property's
//! selectors; every other key passes through untouched. When two styling
//! arguments write the same CSS property of the same selector, the later one
//! wins.

mod rules;


use serde_json::Value;
use tracing::debug;
use yled_common::{css_text, Kwargs, ScopeKey, StyleError};
use yled_config::StyleRegistry;

pub use rules::CompiledRuleSet;

#[derive(Debug, Clone, Copy)]
pub struct RuleCompiler<'r> {
    registry: &'r StyleRegistry,
}

impl<'r> RuleCompiler<'r> {
    pub fn new(registry: &'r StyleRegistry) -> Self {
        Self { registry }
    }

    pub fn bundled() -> RuleCompiler<'static> {
        RuleCompiler::new(StyleRegistry::bundled())
    }

    pub fn registry(&self) -> &'r StyleRegistry {
        self.registry
    }

    /// Split `kwargs` into compiled rules and the remaining arguments.
    ///
    /// A styling argument set to `null` is consumed without producing rules.
    pub fn compile_rules(
        &self,
        element: &str,
        kwargs: Kwargs,
    ) -> Result<(CompiledRuleSet, Kwargs), StyleError> {
        let styles = self.registry.lookup(element)?;
        let mut rules = CompiledRuleSet::new();
        let mut passthrough = Kwargs::new();

        for (name, value) in kwargs {
            match styles.resolve(&name) {
                Some(mapping) => {
                    if let Some(text) = css_text(&value) {
                        rules.merge(CompiledRuleSet::from_mapping(mapping, &text));
                    }
                }
                None => {
                    passthrough.insert(name, value);
                }
            }
        }

        debug!(element, selectors = rules.len(), "Compiled style rules");
        Ok((rules, passthrough))
    }

    /// Compile `kwargs` and serialize the rules.
    ///
    /// With a scope key every selector is prefixed with `.scope-<key> `;
    /// without one the rules are global. Returns `(css, filtered_kwargs)`,
    /// where `css` is empty when no styling argument produced a rule.
    ///
    /// A scope key that is not [CSS safe](ScopeKey::is_css_safe) is rejected.
    pub fn partition_and_compile(
        &self,
        element: &str,
        kwargs: Kwargs,
        scope_key: Option<&ScopeKey>,
    ) -> Result<(String, Kwargs), StyleError> {
        if let Some(key) = scope_key.filter(|key| !key.is_css_safe()) {
            return Err(StyleError::InvalidScopeKey {
                key: key.to_string(),
            });
        }
        let (rules, kwargs) = self.compile_rules(element, kwargs)?;
        let prefix = scope_key.map(ScopeKey::selector_prefix).unwrap_or_default();
        Ok((rules.to_css(&prefix), kwargs))
    }

    /// Compile a single styling property.
    pub fn compile_property(
        &self,
        element: &str,
        property: &str,
        value: &Value,
    ) -> Result<CompiledRuleSet, StyleError> {
        let mut kwargs = Kwargs::new();
        kwargs.insert(property.to_string(), value.clone());
        let (rules, _) = self.compile_rules(element, kwargs)?;
        Ok(rules)
    }
}
