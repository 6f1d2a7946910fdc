//! Styling value validation.
//!
//! Each styling argument is resolved through [`ALIASES`] and checked against
//! the predicate for its [`PropertyKind`]. Strict mode collects every failure
//! into one [`ValidationError`]; permissive mode drops the invalid argument
//! and records a [`ValidationWarning`]. Arguments that are not styling
//! properties of the element, or have no kind, always pass.

mod kinds;
mod predicates;


use std::fmt;

use serde_json::Value;
use tracing::warn;
use yled_common::{Kwargs, ValidationError};

use crate::registry::StyleRegistry;
use crate::settings::ValidationSettings;

pub use kinds::{is_host_parameter, resolve_alias, PropertyKind, ALIASES, HOST_PARAMETERS};
pub use predicates::{
    is_valid_border_style, is_valid_color, is_valid_font_weight, is_valid_length,
    is_valid_numeric, is_valid_spacing, is_valid_text_align, BORDER_STYLES,
    FONT_WEIGHT_KEYWORDS, TEXT_ALIGNMENTS,
};

/// Result of checking one property value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(String),
    /// The name has no known kind; the value is not checked.
    Unknown,
}

impl ValidationOutcome {
    /// Whether the value may be forwarded. `Unknown` never blocks.
    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Invalid(msg) => Some(msg),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    /// Dropped in permissive mode.
    InvalidValue { property: String, message: String },
    UnknownProperty { property: String },
}

impl ValidationWarning {
    pub fn property(&self) -> &str {
        match self {
            Self::InvalidValue { property, .. } | Self::UnknownProperty { property } => property,
        }
    }
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { message, .. } => write!(f, "{message}; argument dropped"),
            Self::UnknownProperty { property } => write!(
                f,
                "unknown styling property '{property}' passed through without validation"
            ),
        }
    }
}

/// Filtered kwargs plus every non-fatal finding.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationReport {
    pub kwargs: Kwargs,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

pub struct StyleValidator;

impl StyleValidator {
    /// Validate all kwargs of one element.
    ///
    /// Only styling properties of `element` (directly or through an alias)
    /// are checked. Every other argument belongs to the host widget and is
    /// forwarded as is, with a warning unless it is a known host parameter.
    /// An element missing from `registry` has no styling properties here;
    /// compilation reports it.
    pub fn validate(
        registry: &StyleRegistry,
        element: &str,
        kwargs: Kwargs,
        settings: &ValidationSettings,
    ) -> Result<ValidationReport, ValidationError> {
        if settings.bypass {
            return Ok(ValidationReport {
                kwargs,
                warnings: Vec::new(),
            });
        }

        let styles = registry.lookup(element).ok();
        let mut failures: Vec<String> = Vec::new();
        let mut warnings: Vec<ValidationWarning> = Vec::new();
        let mut filtered = Kwargs::new();

        for (name, value) in kwargs {
            let styling = styles.is_some_and(|s| s.resolve(&name).is_some());
            if !styling {
                if !is_host_parameter(&name) {
                    warnings.push(ValidationWarning::UnknownProperty {
                        property: name.clone(),
                    });
                }
                filtered.insert(name, value);
                continue;
            }

            match Self::validate_property(&name, &value, settings.strict) {
                ValidationOutcome::Valid | ValidationOutcome::Unknown => {
                    filtered.insert(name, value);
                }
                ValidationOutcome::Invalid(message) if settings.strict => failures.push(message),
                ValidationOutcome::Invalid(message) => {
                    warnings.push(ValidationWarning::InvalidValue {
                        property: name,
                        message,
                    });
                }
            }
        }

        if !failures.is_empty() {
            return Err(ValidationError::new(element, failures));
        }

        if settings.show_warnings {
            for w in &warnings {
                warn!(element, "{w}");
            }
        }

        Ok(ValidationReport {
            kwargs: filtered,
            warnings,
        })
    }

    /// Check a single value.
    ///
    /// `null` is always valid. In strict mode the failure message lists the
    /// expected formats; permissive messages only name the value.
    pub fn validate_property(name: &str, value: &Value, strict: bool) -> ValidationOutcome {
        if value.is_null() {
            return ValidationOutcome::Valid;
        }
        let Some(kind) = PropertyKind::for_property(resolve_alias(name)) else {
            return ValidationOutcome::Unknown;
        };
        if kind.accepts(value) {
            return ValidationOutcome::Valid;
        }

        let shown = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        let mut message = format!("Invalid {} value '{shown}' for '{name}'", kind.label());
        if strict {
            message.push_str(&format!(". Expected formats: {}", kind.formats().join(", ")));
        }
        ValidationOutcome::Invalid(message)
    }

    /// Accepted formats for `name`, or nothing when it has no known kind.
    pub fn suggest_corrections(name: &str) -> Vec<&'static str> {
        PropertyKind::for_property(resolve_alias(name))
            .map(|kind| kind.formats().to_vec())
            .unwrap_or_default()
    }
}
