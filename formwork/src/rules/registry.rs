//! Rule name registry

use std::collections::HashMap;

use crate::error::ConfigError;

use super::Rule;
use super::RuleFactory;

/// Mapping from rule name to rule factory.
///
/// The validator factory is agnostic to which names exist; everything
/// it can evaluate comes from here. A registry is loaded once at
/// startup, then shared read-only (typically behind an `Arc`) across
/// all validations.
///
/// # Example
///
/// ```
/// use formwork::rules::Registry;
///
/// let mut registry = Registry::new();
/// registry.register_fn("even-length", |_args| {
///     Ok(Box::new(|value, _cx| value.len() % 2 == 0))
/// });
/// assert!(registry.contains("even-length"));
/// ```
#[derive(Default)]
pub struct Registry {
    factories: HashMap<String, RuleFactory>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a boxed rule factory under `name`, replacing any
    /// previous registration.
    pub fn register(&mut self, name: impl Into<String>, factory: RuleFactory) {
        self.factories.insert(name.into(), factory);
    }

    /// Registers a rule factory from a plain closure.
    pub fn register_fn<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(&[String]) -> Result<Rule, ConfigError> + Send + Sync + 'static,
    {
        self.register(name, Box::new(factory));
    }

    /// Looks up the factory for `name`.
    pub fn get(&self, name: &str) -> Option<&RuleFactory> {
        self.factories.get(name)
    }

    /// Whether a rule with `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Iterates over registered rule names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether the registry has no rules.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("Registry").field("rules", &names).finish()
    }
}
