//! Rule registry and built-in rules
//!
//! A [`Rule`] is a named boolean predicate over a scalar value and a
//! cross-field [`Context`]. A [`RuleFactory`] binds the textual
//! arguments of a parsed clause to produce a concrete rule. The
//! [`Registry`] maps rule names to factories and is the extension
//! point for caller-defined rules.

mod builtin;
mod registry;

pub use registry::*;

use std::collections::HashMap;

use crate::Value;

/// Snapshot of every sibling field's value, keyed by field name.
///
/// Built once per form validation pass and shared by all rule
/// evaluations in that pass, so cross-field rules always see a
/// consistent picture.
pub type Context = HashMap<String, Value>;

/// A bound validation rule.
///
/// Returns true when the value passes. Rules are never invoked on
/// empty values; the empty/required policy is handled before rules
/// run.
pub type Rule = Box<dyn Fn(&str, &Context) -> bool + Send + Sync>;

/// Constructor binding parsed textual arguments to a [`Rule`].
///
/// Rejecting bad arguments here makes misconfiguration a build-time
/// failure instead of a silent validation-time pass.
pub type RuleFactory =
    Box<dyn Fn(&[String]) -> Result<Rule, crate::error::ConfigError> + Send + Sync>;
