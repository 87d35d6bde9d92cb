//! Field state machine

use serde::Serialize;

use crate::Value;

/// Validation lifecycle tag of a [`Field`].
///
/// `Unverified → Dirty → {Valid, Invalid}`, with `Valid`/`Invalid`
/// going back to `Dirty` on further edits. There is no terminal
/// state; the machine cycles for the lifetime of the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Status {
    /// Value present but never validated; may carry a cached or
    /// default value.
    Unverified,
    /// Value or attributes changed since the last validation pass;
    /// will be reselected on the next validate call.
    Dirty,
    /// Value passed every configured rule.
    Valid,
    /// Value failed at least one rule.
    Invalid {
        /// Ordered names of the failed rules. Non-empty by caller
        /// convention.
        errors: Vec<String>,
    },
}

/// One form field: identity, value, validation spec and lifecycle
/// tag.
///
/// The validation spec type is generic so the field does not depend
/// on any particular rule language; in practice `T` is the raw
/// rule-spec string. The name is immutable once the field exists: it
/// is the join key between the field, its input element, and its
/// entry in the validation context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field<T> {
    name: String,
    value: Value,
    validation: T,
    required: bool,
    status: Status,
}

impl<T> Field<T> {
    /// Creates an unverified field.
    pub fn unverified(
        name: impl Into<String>,
        value: impl Into<Value>,
        validation: T,
        required: bool,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            validation,
            required,
            status: Status::Unverified,
        }
    }

    /// Creates a dirty field.
    pub fn dirty(
        name: impl Into<String>,
        value: impl Into<Value>,
        validation: T,
        required: bool,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            validation,
            required,
            status: Status::Dirty,
        }
    }

    /// Transition to `Valid`, dropping any previous errors.
    pub fn validated(self) -> Self {
        Self {
            status: Status::Valid,
            ..self
        }
    }

    /// Transition to `Invalid` carrying `errors`.
    ///
    /// Passing an empty error list is a caller bug: the type does not
    /// forbid it, but such a field reads as invalid-for-no-reason.
    pub fn invalidated(self, errors: Vec<String>) -> Self {
        Self {
            status: Status::Invalid { errors },
            ..self
        }
    }

    /// Transition to `Dirty`, preserving all other attributes.
    pub fn soiled(self) -> Self {
        Self {
            status: Status::Dirty,
            ..self
        }
    }

    /// Field name, the identity key within a form.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current raw value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Opaque validation spec.
    pub fn validation(&self) -> &T {
        &self.validation
    }

    /// Whether an empty value counts as a violation.
    pub fn required(&self) -> bool {
        self.required
    }

    /// Lifecycle tag, for exhaustive matching.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Failed rule names; empty unless the field is invalid.
    pub fn errors(&self) -> &[String] {
        match &self.status {
            Status::Invalid { errors } => errors,
            _ => &[],
        }
    }

    /// Whether the field passed its last validation.
    pub fn is_valid(&self) -> bool {
        matches!(self.status, Status::Valid)
    }

    /// Whether the field failed its last validation.
    pub fn is_invalid(&self) -> bool {
        matches!(self.status, Status::Invalid { .. })
    }

    /// Whether the field has not been validated yet. Dirty fields
    /// count: dirty is unverified plus a pending change.
    pub fn is_unverified(&self) -> bool {
        matches!(self.status, Status::Unverified | Status::Dirty)
    }

    /// Whether the field changed since its last validation and must
    /// be revalidated on the next pass.
    pub fn is_dirty(&self) -> bool {
        matches!(self.status, Status::Dirty)
    }
}
