//! In-memory validator cache

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::ConfigError;
use crate::rules::Registry;

use super::Validator;
use super::ValidatorFactory;

/// Memo of compiled validators, keyed by spec string and required
/// flag.
///
/// Compiling a validator parses the spec and re-binds every rule, so
/// components that validate repeatedly (the reducer, any live form)
/// own one of these instead of calling the factory directly. Not part
/// of the core contract; the factory stays usable on its own.
#[derive(Debug)]
pub struct ValidatorCache {
    factory: ValidatorFactory,
    built: HashMap<(String, bool), Arc<Validator>>,
}

impl ValidatorCache {
    /// Creates a cache over an existing factory.
    pub fn new(factory: ValidatorFactory) -> Self {
        Self {
            factory,
            built: HashMap::new(),
        }
    }

    /// Creates a cache with a fresh factory over `registry`.
    pub fn with_registry(registry: Arc<Registry>) -> Self {
        Self::new(ValidatorFactory::new(registry))
    }

    /// Returns the validator for `(spec, required)`, compiling it on
    /// first use.
    pub fn validator(
        &mut self,
        spec: &str,
        required: bool,
    ) -> Result<Arc<Validator>, ConfigError> {
        let key = (spec.to_string(), required);
        if let Some(validator) = self.built.get(&key) {
            return Ok(Arc::clone(validator));
        }
        let validator = Arc::new(self.factory.compile(spec, required)?);
        log::debug!("compiled validator for spec '{spec}' (required: {required})");
        self.built.insert(key, Arc::clone(&validator));
        Ok(validator)
    }

    /// Number of cached validators.
    pub fn len(&self) -> usize {
        self.built.len()
    }

    /// Whether nothing has been compiled yet.
    pub fn is_empty(&self) -> bool {
        self.built.is_empty()
    }

    /// Drops all cached validators, e.g. after swapping rule specs
    /// wholesale.
    pub fn clear(&mut self) {
        self.built.clear();
    }
}
