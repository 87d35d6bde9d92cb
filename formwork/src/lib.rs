//! Rule-driven validation engine for key/value form data
//!
//! A compact rule-spec language (`"required|min:2|email"`) is parsed
//! into descriptors, resolved against an extensible rule registry into
//! composed validators, and applied to the fields of an immutable
//! [`Form`](form::Form) with dirty tracking and cross-field context.
//!
//! ```
//! use std::sync::Arc;
//! use formwork::form::{ChangeSet, Form, Insertable};
//! use formwork::rules::Registry;
//! use formwork::validator::ValidatorFactory;
//!
//! let factory = ValidatorFactory::new(Arc::new(Registry::defaults()));
//! let form = Form::new()
//!     .insert(Insertable::new("email", "email".to_string()).unwrap().required(true))
//!     .update(&ChangeSet::new("email").value("not-an-email"));
//!
//! let form = form
//!     .validate(|spec, required| Ok(Arc::new(factory.compile(spec, required)?)), false)
//!     .unwrap();
//! assert_eq!(form.errors()["email"], vec!["email".to_string()]);
//! ```

pub mod dsl;
pub mod error;
pub mod form;
pub mod reducer;
pub mod rules;
pub mod validator;

mod value;

pub use value::*;
