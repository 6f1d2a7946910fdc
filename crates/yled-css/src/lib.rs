//! Scoped CSS generation for styled widgets.
//!
//! [`RuleCompiler`] splits a widget's kwargs into styling arguments and
//! pass-through arguments and turns the styling ones into CSS rules.
//! [`StyleApplier`] wraps the full flow a host wrapper needs: validate,
//! pick a scope key, compile, and hand back the filtered kwargs with a
//! ready-to-inject `<style>` block.

pub mod apply;
pub mod compile;

pub use apply::{GlobalRule, StyleApplier, StyledElement};
pub use compile::{CompiledRuleSet, RuleCompiler};
