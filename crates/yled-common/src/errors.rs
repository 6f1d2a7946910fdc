use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("style table not found: {0}")]
    FileNotFound(PathBuf),

    #[error("style table parse error: {0}")]
    ParseError(String),
}

/// Aggregate failure raised by strict validation.
///
/// Carries one message per failing property, each naming the property and
/// the formats it accepts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("style validation failed for '{element}':{}", bullet_list(.failures))]
pub struct ValidationError {
    pub element: String,
    pub failures: Vec<String>,
}

impl ValidationError {
    pub fn new(element: impl Into<String>, failures: Vec<String>) -> Self {
        Self {
            element: element.into(),
            failures,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("element type '{element}' not found. Are you sure this element exists?")]
    UnknownElementType { element: String },

    #[error(
        "no styling property '{property}' found for element type '{element}'.{}",
        did_you_mean(.hint)
    )]
    UnknownStyleProperty {
        element: String,
        property: String,
        hint: Option<String>,
    },

    #[error("scope key '{key}' can only contain ASCII letters, digits, '-' and '_'")]
    InvalidScopeKey { key: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl StyleError {
    pub fn unknown_element(element: impl Into<String>) -> Self {
        Self::UnknownElementType {
            element: element.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum YledError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Style(#[from] StyleError),

    #[error("invalid kwargs: {0}")]
    Kwargs(String),
}

fn bullet_list(items: &[String]) -> String {
    items.iter().map(|item| format!("\n  - {item}")).collect()
}

fn did_you_mean(hint: &Option<String>) -> String {
    match hint {
        Some(h) => format!(" Did you mean '{h}'?"),
        None => String::new(),
    }
}
