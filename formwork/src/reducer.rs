//! Pure action reducer over form state
//!
//! The engine supplies the state transition function; the dispatch
//! loop around it (event wiring, rendering, submission side effects)
//! belongs to the host application, which is expected to process one
//! action to completion before accepting the next.

use std::sync::Arc;

use crate::error::ConfigError;
use crate::form::ChangeSet;
use crate::form::Form;
use crate::form::Insertable;
use crate::rules::Registry;
use crate::validator::ValidatorCache;

/// An action dispatched against a form.
#[derive(Debug, Clone)]
pub enum Action {
    /// Insert a new field (or update an existing one by name).
    Add(Insertable<String>),
    /// Apply a changeset and revalidate what it dirtied.
    Update(ChangeSet<String>),
    /// Remove the named field.
    Remove(String),
    /// Force-validate the whole form for submission.
    Submit,
}

/// Form state carried between dispatches.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    /// The current form snapshot.
    pub form: Form<String>,
    /// Whether the last [`Action::Submit`] passed a full forced
    /// validation. Reset by any other action.
    pub accepted: bool,
}

impl FormState {
    /// Creates state around an existing form.
    pub fn new(form: Form<String>) -> Self {
        Self {
            form,
            accepted: false,
        }
    }
}

/// Applies actions to form state, reusing compiled validators across
/// dispatches.
///
/// `reduce` is pure over its inputs: it returns a new state and
/// leaves the old one untouched. The only thing that mutates is the
/// internal validator memo.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use formwork::form::{ChangeSet, Insertable};
/// use formwork::reducer::{Action, FormState, Reducer};
/// use formwork::rules::Registry;
///
/// let mut reducer = Reducer::new(Arc::new(Registry::defaults()));
/// let state = FormState::default();
/// let state = reducer
///     .reduce(&state, Action::Add(Insertable::new("email", "email".to_string()).unwrap()))
///     .unwrap();
/// let state = reducer
///     .reduce(&state, Action::Update(ChangeSet::new("email").value("a@b.com")))
///     .unwrap();
/// assert!(state.form.get("email").unwrap().is_valid());
/// ```
#[derive(Debug)]
pub struct Reducer {
    cache: ValidatorCache,
}

impl Reducer {
    /// Creates a reducer validating against `registry`.
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            cache: ValidatorCache::with_registry(registry),
        }
    }

    /// Applies one action and returns the next state.
    ///
    /// `Update` revalidates only what it dirtied; `Submit`
    /// force-validates every field and marks the state accepted when
    /// the whole form comes out valid.
    pub fn reduce(&mut self, state: &FormState, action: Action) -> Result<FormState, ConfigError> {
        match action {
            Action::Add(insertable) => {
                log::debug!("add field '{}'", insertable.name());
                Ok(FormState::new(state.form.insert(insertable)))
            }
            Action::Update(change) => {
                log::debug!("update field '{}'", change.name());
                let form = state.form.update(&change);
                let cache = &mut self.cache;
                let form =
                    form.validate(|spec, required| cache.validator(spec, required), false)?;
                Ok(FormState::new(form))
            }
            Action::Remove(name) => {
                log::debug!("remove field '{name}'");
                Ok(FormState::new(state.form.remove(&name)))
            }
            Action::Submit => {
                let cache = &mut self.cache;
                let form = state
                    .form
                    .validate(|spec, required| cache.validator(spec, required), true)?;
                let accepted = form.is_valid();
                log::info!("submit validated form: accepted = {accepted}");
                Ok(FormState { form, accepted })
            }
        }
    }
}
