use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix for generated scope keys.
pub const GENERATED_KEY_PREFIX: &str = "yled-";

/// Generate a fresh scope key, e.g. `yled-7f9c2b1e-...`.
pub fn new_scope_key() -> String {
    format!("{GENERATED_KEY_PREFIX}{}", uuid::Uuid::new_v4())
}

/// Identifier scoping a set of CSS rules to one rendered element.
///
/// Uniqueness only has to keep sibling elements from sharing rules; it is
/// not a security boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScopeKey(String);

impl ScopeKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn generate() -> Self {
        Self(new_scope_key())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Selector prefix prepended to every scoped rule: `.scope-<key> `.
    pub fn selector_prefix(&self) -> String {
        format!(".scope-{} ", self.0)
    }

    /// Whether the key can sit in a class selector without escaping.
    pub fn is_css_safe(&self) -> bool {
        !self.0.is_empty()
            && self
                .0
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }

    pub fn is_generated(&self) -> bool {
        self.0.starts_with(GENERATED_KEY_PREFIX)
    }
}

impl Default for ScopeKey {
    fn default() -> Self {
        Self::generate()
    }
}

impl fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ScopeKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ScopeKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}
