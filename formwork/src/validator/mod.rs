//! Validator construction and evaluation
//!
//! A [`ValidatorFactory`] resolves parsed rule descriptors against a
//! [`Registry`](crate::rules::Registry) into a [`Validator`]: one
//! evaluation object per field configuration, applying every bound
//! rule in declaration order and collecting the names of the ones
//! that fail. [`ValidatorCache`] memoises compiled validators per
//! spec string.

mod cache;
mod factory;

pub use cache::*;
pub use factory::*;
