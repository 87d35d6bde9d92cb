//! Field and form state
//!
//! A [`Field`] is one form entry's value plus its validation
//! lifecycle tag; a [`Form`] is an ordered, name-unique collection of
//! fields with CRUD and bulk-validate operations. Everything here is
//! persistent: operations return new values and never mutate in
//! place, so old snapshots stay valid.

mod field;
#[allow(clippy::module_inception)]
mod form;

pub use field::*;
pub use form::*;
