//! Style table parsing and loading.
//!
//! The bundled table is embedded at compile time and parsed on first use.
//! Custom tables can be parsed from a string or loaded from disk.

use std::path::Path;
use std::sync::LazyLock;

use indexmap::IndexMap;
use tracing::info;
use yled_common::ConfigError;

use super::types::ElementStyles;
use super::StyleRegistry;

/// The style table shipped with the crate.
pub const BUNDLED_STYLES: &str = include_str!("../../resources/component_styles.json");

static BUNDLED: LazyLock<StyleRegistry> = LazyLock::new(|| {
    StyleRegistry::from_json(BUNDLED_STYLES)
        .unwrap_or_else(|e| panic!("bundled style table is invalid: {e}"))
});

pub(super) fn bundled() -> &'static StyleRegistry {
    &BUNDLED
}

/// Parse a style table from JSON text.
pub(super) fn parse(json: &str) -> Result<StyleRegistry, ConfigError> {
    let elements: IndexMap<String, ElementStyles> = serde_json::from_str(json)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse style table: {e}")))?;
    Ok(StyleRegistry { elements })
}

/// Load a style table from a JSON file.
pub(super) fn load_from_path(path: &Path) -> Result<StyleRegistry, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!("failed to read style table {}: {e}", path.display()))
    })?;

    let registry = parse(&content)?;
    info!(
        "loaded style table from {} ({} element types)",
        path.display(),
        registry.len()
    );
    Ok(registry)
}
