//! Host-facing styling entry points.
//!
//! [`StyleApplier::apply`] is what a widget wrapper calls before rendering:
//! it validates the styling arguments, makes sure the widget has a `key`,
//! and compiles rules scoped to that key. [`StyleApplier::apply_global`]
//! styles every instance of an element type instead, one property at a time.

use serde_json::Value;
use tracing::debug;
use yled_common::{css_text, Kwargs, ScopeKey, StyleError};
use yled_config::{StyleRegistry, StyleValidator, StylerSettings, ValidationReport};

use crate::compile::RuleCompiler;

/// Kwarg holding the widget's scope key.
pub const KEY_PARAM: &str = "key";

/// A widget ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledElement {
    /// Arguments to forward to the host widget, `key` included.
    pub kwargs: Kwargs,
    pub key: ScopeKey,
    /// Scoped CSS, empty when nothing was styled.
    pub css: String,
}

impl StyledElement {
    /// `<style>` block to inject next to the widget, if there is any CSS.
    pub fn style_block(&self) -> Option<String> {
        (!self.css.is_empty()).then(|| format!("<style>{}</style>", self.css))
    }
}

/// Unscoped CSS produced for one property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalRule {
    pub property: String,
    pub css: String,
}

impl GlobalRule {
    pub fn style_block(&self) -> String {
        format!("<style>{}</style>", self.css)
    }
}

pub struct StyleApplier<'r> {
    compiler: RuleCompiler<'r>,
    settings: StylerSettings,
}

impl<'r> StyleApplier<'r> {
    pub fn new(registry: &'r StyleRegistry, settings: StylerSettings) -> Self {
        Self {
            compiler: RuleCompiler::new(registry),
            settings,
        }
    }

    /// Applier over the bundled style table.
    pub fn bundled(settings: StylerSettings) -> StyleApplier<'static> {
        StyleApplier::new(StyleRegistry::bundled(), settings)
    }

    pub fn settings(&self) -> &StylerSettings {
        &self.settings
    }

    pub fn registry(&self) -> &'r StyleRegistry {
        self.compiler.registry()
    }

    /// Style one widget.
    ///
    /// The caller's `key` is used as the scope key when present; otherwise a
    /// key is generated and inserted into the returned kwargs so the host
    /// renders the widget under the same scope as the CSS. A caller key that
    /// cannot sit in a class selector is rejected.
    pub fn apply(&self, element: &str, kwargs: Kwargs) -> Result<StyledElement, StyleError> {
        self.registry().lookup(element)?;
        let mut kwargs = self.validate(element, kwargs)?.kwargs;

        let key = match kwargs.get(KEY_PARAM).and_then(css_text) {
            Some(key) => ScopeKey::new(key),
            None => {
                let key = ScopeKey::generate();
                kwargs.insert(KEY_PARAM.to_string(), Value::String(key.to_string()));
                key
            }
        };

        let (css, kwargs) = self
            .compiler
            .partition_and_compile(element, kwargs, Some(&key))?;
        Ok(StyledElement { kwargs, key, css })
    }

    /// Style every instance of `element`.
    ///
    /// Each styling argument is compiled on its own and unscoped. An argument
    /// that produces no CSS is an error naming the property, with a hint
    /// when swapping `-` and `_` might fix the name. `null` values are
    /// skipped.
    pub fn apply_global(
        &self,
        element: &str,
        kwargs: Kwargs,
    ) -> Result<Vec<GlobalRule>, StyleError> {
        self.registry().lookup(element)?;
        let kwargs = self.validate(element, kwargs)?.kwargs;

        let mut rules = Vec::with_capacity(kwargs.len());
        for (property, value) in kwargs {
            if value.is_null() {
                continue;
            }
            let compiled = self.compiler.compile_property(element, &property, &value)?;
            if compiled.is_empty() {
                return Err(StyleError::UnknownStyleProperty {
                    element: element.to_string(),
                    hint: separator_hint(&property),
                    property,
                });
            }
            debug!(element, property = %property, "Compiled global style");
            rules.push(GlobalRule {
                css: compiled.to_css(""),
                property,
            });
        }
        Ok(rules)
    }

    /// Set one property globally.
    ///
    /// Returns `None` when the value was dropped by permissive validation or
    /// is `null`.
    pub fn set(
        &self,
        element: &str,
        property: &str,
        value: Value,
    ) -> Result<Option<GlobalRule>, StyleError> {
        let mut kwargs = Kwargs::new();
        kwargs.insert(property.to_string(), value);
        Ok(self.apply_global(element, kwargs)?.pop())
    }

    fn validate(&self, element: &str, kwargs: Kwargs) -> Result<ValidationReport, StyleError> {
        let report = StyleValidator::validate(
            self.registry(),
            element,
            kwargs,
            &self.settings.validation(),
        )?;
        Ok(report)
    }
}

/// Swap `-` and `_` in `property`, if it has either.
fn separator_hint(property: &str) -> Option<String> {
    if !property.contains(['-', '_']) {
        return None;
    }
    Some(
        property
            .chars()
            .map(|c| match c {
                '-' => '_',
                '_' => '-',
                other => other,
            })
            .collect(),
    )
}
