//! Rule-spec language
//!
//! A compact, attribute-friendly syntax for declaring per-field
//! validation rules: `rule1[:arg1[,arg2,...]][|rule2[:...]]...`.
//! The parser only extracts structure; names are resolved against a
//! [`Registry`](crate::rules::Registry) when a validator is built.

mod parser;

pub use parser::*;
