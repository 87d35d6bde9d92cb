//! Form collection

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::Value;
use crate::error::ConfigError;
use crate::error::FieldError;
use crate::rules::Context;
use crate::validator::Validator;

use super::Field;

/// Description of a field to insert: name and validation spec are
/// mandatory, value defaults to empty and required to false.
///
/// Construction fails when the name is empty, which is how an input
/// adapter reports an element without a name attribute; the caller is
/// expected to skip such elements.
///
/// # Example
///
/// ```
/// use formwork::form::Insertable;
///
/// let field = Insertable::new("email", "email".to_string())
///     .unwrap()
///     .required(true);
/// assert_eq!(field.name(), "email");
/// ```
#[derive(Debug, Clone)]
pub struct Insertable<T> {
    name: String,
    value: Value,
    validation: T,
    required: bool,
}

impl<T> Insertable<T> {
    /// Creates an insertable with default value and requiredness.
    pub fn new(name: impl Into<String>, validation: T) -> Result<Self, FieldError> {
        let name = name.into();
        if name.is_empty() {
            return Err(FieldError::MissingName);
        }
        Ok(Self {
            name,
            value: Value::default(),
            validation,
            required: false,
        })
    }

    /// Sets the initial value.
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets the required flag.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// The field name this insertable will create or replace.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn into_change_set(self) -> ChangeSet<T> {
        ChangeSet {
            name: self.name,
            value: Some(self.value),
            validation: Some(self.validation),
            required: Some(self.required),
        }
    }
}

/// A partial update for one named field. Attributes left unset keep
/// the field's previous ones.
#[derive(Debug, Clone)]
pub struct ChangeSet<T> {
    name: String,
    value: Option<Value>,
    validation: Option<T>,
    required: Option<bool>,
}

impl<T> ChangeSet<T> {
    /// Creates an empty changeset for the named field.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            validation: None,
            required: None,
        }
    }

    /// Changes the value.
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Changes the validation spec.
    pub fn validation(mut self, validation: T) -> Self {
        self.validation = Some(validation);
        self
    }

    /// Changes the required flag.
    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// The name of the field this changeset targets.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An ordered, name-unique collection of fields.
///
/// Insertion order is preserved and determines iteration order. All
/// operations take `&self` and return a new form; existing snapshots
/// are never invalidated.
///
/// # Example
///
/// ```
/// use formwork::form::{Form, Insertable, ChangeSet};
///
/// let form = Form::new()
///     .insert(Insertable::new("email", "email".to_string()).unwrap());
/// let form = form.update(&ChangeSet::new("email").value("a@b.com"));
/// assert!(form.get("email").unwrap().is_dirty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Form<T> {
    fields: Vec<Field<T>>,
}

impl<T> Default for Form<T> {
    fn default() -> Self {
        Self { fields: Vec::new() }
    }
}

impl<T: Clone> Form<T> {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Creates a form from a sequence of insertables, in order.
    pub fn from_fields(fields: impl IntoIterator<Item = Insertable<T>>) -> Self {
        fields
            .into_iter()
            .fold(Self::new(), |form, field| form.insert(field))
    }

    /// Inserts a field, or updates it in place when the name already
    /// exists (names stay unique; a duplicate insert behaves like
    /// [`update`](Self::update) with every attribute present).
    pub fn insert(&self, insertable: Insertable<T>) -> Self {
        if self.has(insertable.name()) {
            return self.update(&insertable.into_change_set());
        }
        let mut fields = self.fields.clone();
        fields.push(Field::unverified(
            insertable.name,
            insertable.value,
            insertable.validation,
            insertable.required,
        ));
        Self { fields }
    }

    /// Applies a changeset to the matching field, which comes out
    /// dirty; every other field passes through unchanged. A changeset
    /// for an unknown name is a no-op.
    pub fn update(&self, change: &ChangeSet<T>) -> Self {
        let fields = self
            .fields
            .iter()
            .map(|field| {
                if field.name() == change.name {
                    merge(change, field)
                } else {
                    field.clone()
                }
            })
            .collect();
        Self { fields }
    }

    /// Removes the named field. Removing an unknown name is a no-op.
    pub fn remove(&self, name: &str) -> Self {
        let fields = self
            .fields
            .iter()
            .filter(|field| field.name() != name)
            .cloned()
            .collect();
        Self { fields }
    }

    /// Looks up a field by name.
    pub fn get(&self, name: &str) -> Option<&Field<T>> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Whether a field with `name` exists.
    pub fn has(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field.name() == name)
    }

    /// All fields, in insertion order.
    pub fn fields(&self) -> &[Field<T>] {
        &self.fields
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the form has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether every field is valid. An empty form is vacuously
    /// valid; a dirty or unverified field makes the form not valid
    /// until the next validation pass.
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(Field::is_valid)
    }

    /// Failed rule names per field. Every field contributes an entry;
    /// non-invalid fields map to an empty list so callers can
    /// unconditionally clear error display for passing fields.
    pub fn errors(&self) -> HashMap<String, Vec<String>> {
        self.fields
            .iter()
            .map(|field| (field.name().to_string(), field.errors().to_vec()))
            .collect()
    }

    /// Builds the cross-field validation context: every field's
    /// current value keyed by name.
    pub fn context(&self) -> Context {
        self.fields
            .iter()
            .map(|field| (field.name().to_string(), field.value().clone()))
            .collect()
    }

    /// Revalidates the form.
    ///
    /// The context is built once and shared by every field validation
    /// in this call. Dirty fields (and, with `force`, all fields) are
    /// re-evaluated through the validator the factory yields for
    /// their spec and requiredness; everything else passes through
    /// untouched. A factory failure (unknown rule, bad args) aborts
    /// the whole pass.
    pub fn validate<F>(&self, mut factory: F, force: bool) -> Result<Self, ConfigError>
    where
        F: FnMut(&T, bool) -> Result<Arc<Validator>, ConfigError>,
    {
        let context = self.context();
        let mut fields = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            if field.is_dirty() || force {
                let validator = factory(field.validation(), field.required())?;
                let errors = validator.run(field.value(), &context);
                let next = if errors.is_empty() {
                    field.clone().validated()
                } else {
                    field.clone().invalidated(errors)
                };
                fields.push(next);
            } else {
                fields.push(field.clone());
            }
        }
        Ok(Self { fields })
    }
}

fn merge<T: Clone>(change: &ChangeSet<T>, field: &Field<T>) -> Field<T> {
    Field::dirty(
        field.name(),
        change
            .value
            .clone()
            .unwrap_or_else(|| field.value().clone()),
        change
            .validation
            .clone()
            .unwrap_or_else(|| field.validation().clone()),
        change.required.unwrap_or(field.required()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Registry;
    use crate::validator::ValidatorFactory;

    fn ins(name: &str, validation: &str) -> Insertable<String> {
        Insertable::new(name, validation.to_string()).unwrap()
    }

    fn always_pass(
        _validation: &String,
        required: bool,
    ) -> Result<Arc<Validator>, ConfigError> {
        let factory = ValidatorFactory::new(Arc::new(Registry::new()));
        Ok(Arc::new(factory.build(&[], required)?))
    }

    #[test]
    fn test_insert_and_get() {
        let form = Form::new().insert(ins("name", "min:2").value("val"));
        assert!(form.has("name"));
        let field = form.get("name").unwrap();
        assert_eq!(field.value(), &Value::from("val"));
        assert_eq!(field.validation(), "min:2");
        assert!(!field.required());
        assert!(field.is_unverified());
        assert!(!field.is_dirty());
    }

    #[test]
    fn test_insert_duplicate_updates_in_place() {
        let form = Form::new()
            .insert(ins("name", "").value("first"))
            .insert(ins("other", ""))
            .insert(ins("name", "min:2").value("second"));
        assert_eq!(form.len(), 2);
        let field = form.get("name").unwrap();
        assert_eq!(field.value(), &Value::from("second"));
        assert_eq!(field.validation(), "min:2");
        assert!(field.is_dirty());
        // order preserved: the updated field did not move
        assert_eq!(form.fields()[0].name(), "name");
    }

    #[test]
    fn test_missing_name_is_rejected() {
        assert_eq!(
            Insertable::new("", String::new()).unwrap_err(),
            FieldError::MissingName
        );
    }

    #[test]
    fn test_update_dirties_and_merges() {
        let form = Form::new().insert(ins("name", "min:2").required(true));
        let updated = form.update(&ChangeSet::new("name").value("x"));
        let field = updated.get("name").unwrap();
        assert!(field.is_dirty());
        assert_eq!(field.value(), &Value::from("x"));
        // untouched attributes survive the merge
        assert_eq!(field.validation(), "min:2");
        assert!(field.required());
        // the original snapshot is unchanged
        assert!(form.get("name").unwrap().is_unverified());
        assert!(!form.get("name").unwrap().is_dirty());
    }

    #[test]
    fn test_update_unknown_name_is_noop() {
        let form = Form::new().insert(ins("name", ""));
        let updated = form.update(&ChangeSet::new("other").value("x"));
        assert_eq!(updated, form);
    }

    #[test]
    fn test_remove_and_reinsert() {
        let form = Form::new().insert(ins("name", ""));
        let removed = form.remove("name");
        assert!(!removed.has("name"));
        assert!(removed.get("name").is_none());
        assert!(removed.remove("name").is_empty());

        let restored = removed.insert(ins("name", ""));
        assert!(restored.has("name"));
    }

    #[test]
    fn test_empty_form_is_vacuously_valid() {
        assert!(Form::<String>::new().is_valid());
    }

    #[test]
    fn test_dirty_field_is_not_valid() {
        let form = Form::new()
            .insert(ins("name", ""))
            .update(&ChangeSet::new("name").value("x"));
        assert!(!form.is_valid());
    }

    #[test]
    fn test_validate_ignores_unverified_without_force() {
        let form = Form::new().insert(ins("name", ""));
        let validated = form.validate(always_pass, false).unwrap();
        assert!(!validated.is_valid());
        assert!(validated.get("name").unwrap().is_unverified());
    }

    #[test]
    fn test_validate_picks_up_dirty_fields() {
        let form = Form::new()
            .insert(ins("name", ""))
            .update(&ChangeSet::new("name").value("u"));
        let validated = form.validate(always_pass, false).unwrap();
        assert!(validated.get("name").unwrap().is_valid());
    }

    #[test]
    fn test_force_validates_everything() {
        let form = Form::new()
            .insert(ins("a", "").value("x"))
            .insert(ins("b", "").value("y"));
        let validated = form.validate(always_pass, true).unwrap();
        assert!(validated.is_valid());
    }

    #[test]
    fn test_validate_reports_required_on_empty() {
        let form = Form::new().insert(ins("name", "").required(true));
        let validated = form.validate(always_pass, true).unwrap();
        let field = validated.get("name").unwrap();
        assert!(field.is_invalid());
        assert_eq!(field.errors(), ["required".to_string()]);
    }

    #[test]
    fn test_errors_map_covers_every_field() {
        let form = Form::new()
            .insert(ins("ok", "").value("x"))
            .insert(ins("missing", "").required(true));
        let validated = form.validate(always_pass, true).unwrap();
        let errors = validated.errors();
        assert_eq!(errors.len(), 2);
        assert!(errors["ok"].is_empty());
        assert_eq!(errors["missing"], vec!["required".to_string()]);
    }

    #[test]
    fn test_context_snapshots_all_values() {
        let form = Form::new()
            .insert(ins("a", "").value("1"))
            .insert(ins("b", "").value(vec!["x".to_string()]));
        let context = form.context();
        assert_eq!(context["a"], Value::from("1"));
        assert_eq!(context["b"], Value::Many(vec!["x".to_string()]));
    }

    #[test]
    fn test_validate_propagates_config_error() {
        let form = Form::new().insert(ins("name", "nope").value("x"));
        let factory = ValidatorFactory::new(Arc::new(Registry::new()));
        let result = form.validate(
            |spec: &String, required| Ok(Arc::new(factory.compile(spec, required)?)),
            true,
        );
        assert_eq!(result.unwrap_err(), ConfigError::unknown_rule("nope"));
    }
}
