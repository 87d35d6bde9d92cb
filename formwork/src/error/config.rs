//! Configuration errors raised while building validators

/// Error type for validator construction.
///
/// These are integrator mistakes in the rule configuration, surfaced
/// fail-fast when a validator is built, never deferred to validation
/// time. Validation failures themselves are data (failed rule names on
/// a field), not errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A rule spec referenced a name missing from the registry.
    #[error("no rule named '{name}' is registered")]
    UnknownRule { name: String },

    /// A registered rule rejected the arguments bound to it.
    #[error("invalid arguments for rule '{rule}': {reason}")]
    InvalidArgs { rule: String, reason: String },
}

impl ConfigError {
    /// Creates a new unknown-rule error.
    pub fn unknown_rule(name: impl Into<String>) -> Self {
        Self::UnknownRule { name: name.into() }
    }

    /// Creates a new invalid-arguments error.
    pub fn invalid_args(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgs {
            rule: rule.into(),
            reason: reason.into(),
        }
    }
}
