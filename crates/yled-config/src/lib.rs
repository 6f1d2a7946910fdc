//! yled configuration: the bundled style table, value validation and
//! process-wide settings.
//!
//! The style table maps `element type → styling property → selector →
//! CSS property → value rule` and is loaded once from
//! `resources/component_styles.json`. The validator checks styling values
//! per property kind before they are compiled into CSS.
//!
//! # Quick Start
//!
//! ```rust
//! use yled_config::{StyleRegistry, StylerSettings, StyleValidator};
//! use serde_json::json;
//!
//! let registry = StyleRegistry::bundled();
//! assert!(registry.lookup("button").is_ok());
//!
//! let settings = StylerSettings::default();
//! let kwargs = json!({"background_color": "#ff0000", "label": "Go"});
//! let report = StyleValidator::validate(
//!     registry,
//!     "button",
//!     kwargs.as_object().unwrap().clone(),
//!     &settings.validation(),
//! )
//! .unwrap();
//! assert!(report.kwargs.contains_key("background_color"));
//! ```

pub mod colors;
pub mod registry;
pub mod settings;
pub mod validation;

pub use registry::{CssValue, ElementStyles, PropertyMapping, StyleRegistry};
pub use settings::{EnvReader, RealEnv, StylerSettings, ValidationSettings};
pub use validation::{
    PropertyKind, StyleValidator, ValidationOutcome, ValidationReport, ValidationWarning,
};
