//! Subcommand handlers. Each returns the text to print on stdout.

use serde_json::Value;
use yled_common::{kwargs_from, Kwargs, Result, StyleError, YledError};
use yled_config::{StyleRegistry, StyleValidator, StylerSettings};
use yled_css::StyleApplier;

pub fn compile(
    registry: &StyleRegistry,
    settings: StylerSettings,
    element: &str,
    kwargs: &str,
    key: Option<String>,
    global: bool,
) -> Result<String> {
    let mut kwargs = parse_kwargs(kwargs)?;
    let applier = StyleApplier::new(registry, settings);

    if global {
        let rules = applier.apply_global(element, kwargs)?;
        let blocks: Vec<String> = rules.iter().map(|r| r.style_block()).collect();
        return Ok(blocks.join("\n"));
    }

    if let Some(key) = key {
        kwargs.insert("key".to_string(), Value::String(key));
    }
    let styled = applier.apply(element, kwargs)?;

    let mut out = String::new();
    if let Some(block) = styled.style_block() {
        out.push_str(&block);
        out.push('\n');
    }
    out.push_str(&to_json(&styled.kwargs)?);
    Ok(out)
}

pub fn set(
    registry: &StyleRegistry,
    settings: StylerSettings,
    element: &str,
    property: &str,
    value: &str,
) -> Result<String> {
    let applier = StyleApplier::new(registry, settings);
    let rule = applier.set(element, property, Value::String(value.to_string()))?;
    Ok(rule.map(|r| r.style_block()).unwrap_or_default())
}

pub fn validate(
    registry: &StyleRegistry,
    settings: StylerSettings,
    element: &str,
    kwargs: &str,
) -> Result<String> {
    let kwargs = parse_kwargs(kwargs)?;
    let report = StyleValidator::validate(registry, element, kwargs, &settings.validation())
        .map_err(StyleError::from)?;

    let mut lines: Vec<String> = report
        .warnings
        .iter()
        .map(|w| format!("warning: {w}"))
        .collect();
    lines.push(to_json(&report.kwargs)?);
    Ok(lines.join("\n"))
}

pub fn elements(registry: &StyleRegistry, element: Option<&str>) -> Result<String> {
    let names: Vec<&str> = match element {
        Some(element) => registry.lookup(element)?.property_names().collect(),
        None => registry.element_types().collect(),
    };
    Ok(names.join("\n"))
}

fn parse_kwargs(text: &str) -> Result<Kwargs> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| YledError::Kwargs(e.to_string()))?;
    kwargs_from(value)
}

fn to_json(kwargs: &Kwargs) -> Result<String> {
    serde_json::to_string(kwargs).map_err(|e| YledError::Kwargs(e.to_string()))
}
