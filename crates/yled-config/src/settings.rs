//! Process-wide styler settings.
//!
//! Settings are read from the environment once, at startup, and then passed
//! explicitly to the validator and the applier.

use std::collections::HashMap;

/// Skip validation entirely when set to `true` or `1`.
pub const BYPASS_ENV_VAR: &str = "ST_STYLED_BYPASS_VALIDATION";
/// Raise on invalid values instead of dropping them when set to `true` or `1`.
pub const STRICT_ENV_VAR: &str = "ST_STYLED_STRICT_VALIDATION";
/// Set to `false` or `0` to silence validation warnings.
pub const SHOW_WARNINGS_ENV_VAR: &str = "ST_STYLED_SHOW_WARNINGS";

pub const DEFAULT_STRICT_MODE: bool = false;
pub const DEFAULT_SHOW_WARNINGS: bool = true;

/// Abstraction over environment variables.
pub trait EnvReader {
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads the real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealEnv;

impl EnvReader for RealEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvReader for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Validation policy and output settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylerSettings {
    pub bypass_validation: bool,
    pub strict: bool,
    pub show_warnings: bool,
}

impl Default for StylerSettings {
    fn default() -> Self {
        Self {
            bypass_validation: false,
            strict: DEFAULT_STRICT_MODE,
            show_warnings: DEFAULT_SHOW_WARNINGS,
        }
    }
}

/// The validator's view of [`StylerSettings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationSettings {
    pub bypass: bool,
    pub strict: bool,
    pub show_warnings: bool,
}

impl StylerSettings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_reader(&RealEnv)
    }

    /// Read settings through an arbitrary [`EnvReader`].
    pub fn from_reader(env: &dyn EnvReader) -> Self {
        let flag = |name: &str| env.var(name).map(|v| is_truthy(&v));
        Self {
            bypass_validation: flag(BYPASS_ENV_VAR).unwrap_or(false),
            strict: flag(STRICT_ENV_VAR).unwrap_or(DEFAULT_STRICT_MODE),
            show_warnings: env
                .var(SHOW_WARNINGS_ENV_VAR)
                .map(|v| !is_falsy(&v))
                .unwrap_or(DEFAULT_SHOW_WARNINGS),
        }
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_bypass(mut self, bypass: bool) -> Self {
        self.bypass_validation = bypass;
        self
    }

    pub fn with_warnings(mut self, show: bool) -> Self {
        self.show_warnings = show;
        self
    }

    pub fn validation(&self) -> ValidationSettings {
        ValidationSettings {
            bypass: self.bypass_validation,
            strict: self.strict,
            show_warnings: self.show_warnings,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    let v = value.trim();
    v == "1" || v.eq_ignore_ascii_case("true")
}

fn is_falsy(value: &str) -> bool {
    let v = value.trim();
    v == "0" || v.eq_ignore_ascii_case("false")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_are_permissive_with_warnings() {
        let settings = StylerSettings::default();
        assert!(!settings.bypass_validation);
        assert!(!settings.strict);
        assert!(settings.show_warnings);
        assert_eq!(BYPASS_ENV_VAR, "ST_STYLED_BYPASS_VALIDATION");
    }

    #[test]
    fn empty_env_gives_defaults() {
        let settings = StylerSettings::from_reader(&env(&[]));
        assert_eq!(settings, StylerSettings::default());
    }

    #[test]
    fn bypass_detection() {
        for on in ["true", "1", "TRUE", " True "] {
            let s = StylerSettings::from_reader(&env(&[(BYPASS_ENV_VAR, on)]));
            assert!(s.bypass_validation, "'{on}' should enable bypass");
        }
        for off in ["false", "0", "yes", ""] {
            let s = StylerSettings::from_reader(&env(&[(BYPASS_ENV_VAR, off)]));
            assert!(!s.bypass_validation, "'{off}' should not enable bypass");
        }
    }

    #[test]
    fn strict_mode_detection() {
        let s = StylerSettings::from_reader(&env(&[(STRICT_ENV_VAR, "true")]));
        assert!(s.strict);

        let s = StylerSettings::from_reader(&env(&[(STRICT_ENV_VAR, "false")]));
        assert!(!s.strict);
    }

    #[test]
    fn warnings_can_be_silenced() {
        let s = StylerSettings::from_reader(&env(&[(SHOW_WARNINGS_ENV_VAR, "0")]));
        assert!(!s.show_warnings);

        let s = StylerSettings::from_reader(&env(&[(SHOW_WARNINGS_ENV_VAR, "anything")]));
        assert!(s.show_warnings);
    }

    #[test]
    fn builders_and_validation_view() {
        let settings = StylerSettings::default()
            .with_strict(true)
            .with_bypass(true)
            .with_warnings(false);
        let v = settings.validation();
        assert!(v.strict);
        assert!(v.bypass);
        assert!(!v.show_warnings);
    }
}
