//! Validator factory

use std::sync::Arc;

use crate::Value;
use crate::dsl::RuleDescriptor;
use crate::dsl::parse;
use crate::error::ConfigError;
use crate::rules::Context;
use crate::rules::Registry;
use crate::rules::Rule;

/// Error name reported for an empty required value, and the rule name
/// whose presence in a legacy spec implies the required flag.
pub const REQUIRED: &str = "required";

/// A composed validator for one field configuration.
///
/// Holds the ordered `(name, rule)` pairs resolved at build time plus
/// the required flag. Evaluation never fails; it returns the ordered
/// names of the rules the value violated, empty meaning pass.
pub struct Validator {
    rules: Vec<(String, Rule)>,
    required: bool,
}

impl Validator {
    /// Evaluates the value against every bound rule.
    ///
    /// Empty values short-circuit: an optional empty value passes
    /// outright, a required empty value reports exactly `["required"]`
    /// and no other rule runs. Non-empty scalars run every rule in
    /// order (no stop at first failure, callers want the complete set
    /// of violations). Multi-valued input is evaluated per element,
    /// errors concatenated in element order.
    pub fn run(&self, value: &Value, context: &Context) -> Vec<String> {
        if value.is_empty() {
            if self.required {
                return vec![REQUIRED.to_string()];
            }
            return Vec::new();
        }
        match value {
            Value::Text(s) => self.check(s, context),
            Value::Many(items) => items
                .iter()
                .flat_map(|item| self.check(item, context))
                .collect(),
        }
    }

    /// Whether an empty value is a violation.
    pub fn required(&self) -> bool {
        self.required
    }

    /// Bound rule names, in evaluation order.
    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|(name, _)| name.as_str())
    }

    fn check(&self, value: &str, context: &Context) -> Vec<String> {
        self.rules
            .iter()
            .filter(|(_, rule)| !rule(value, context))
            .map(|(name, _)| name.clone())
            .collect()
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("rules", &self.rule_names().collect::<Vec<_>>())
            .field("required", &self.required)
            .finish()
    }
}

/// Builds [`Validator`]s from rule descriptors or spec strings.
///
/// Construction is fail-fast: an unknown rule name or a rejected
/// argument aborts the build with a [`ConfigError`] instead of
/// silently dropping the rule.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use formwork::rules::Registry;
/// use formwork::validator::ValidatorFactory;
/// use formwork::Value;
///
/// let factory = ValidatorFactory::new(Arc::new(Registry::defaults()));
/// let validator = factory.compile("min:2|email", false).unwrap();
/// let errors = validator.run(&Value::from("a"), &Default::default());
/// assert_eq!(errors, vec!["min", "email"]);
/// ```
#[derive(Debug, Clone)]
pub struct ValidatorFactory {
    registry: Arc<Registry>,
}

impl ValidatorFactory {
    /// Creates a factory over a shared rule registry.
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// The registry this factory resolves rule names against.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Resolves descriptors into a bound validator.
    ///
    /// Descriptor order is preserved and becomes evaluation order.
    pub fn build(
        &self,
        descriptors: &[RuleDescriptor],
        required: bool,
    ) -> Result<Validator, ConfigError> {
        let mut rules = Vec::with_capacity(descriptors.len());
        for descriptor in descriptors {
            let factory = self
                .registry
                .get(&descriptor.name)
                .ok_or_else(|| ConfigError::unknown_rule(&descriptor.name))?;
            rules.push((descriptor.name.clone(), factory(&descriptor.args)?));
        }
        Ok(Validator { rules, required })
    }

    /// Parses a spec string and builds its validator.
    ///
    /// A clause literally named `required` implies the required flag
    /// and is removed from the rule list: legacy specs signalled
    /// requiredness inline rather than through the field flag, and
    /// both spellings must keep behaving identically.
    pub fn compile(&self, spec: &str, required: bool) -> Result<Validator, ConfigError> {
        let descriptors = parse(spec);
        let implied = descriptors.iter().any(|d| d.name == REQUIRED);
        let descriptors: Vec<RuleDescriptor> = descriptors
            .into_iter()
            .filter(|d| d.name != REQUIRED)
            .collect();
        if implied {
            log::debug!("spec '{spec}' carries a literal required clause");
        }
        self.build(&descriptors, required || implied)
    }
}
