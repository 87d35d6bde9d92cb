//! FieldError for field construction

/// Error type for building fields from external input descriptions.
///
/// Recoverable by the caller: an input adapter that hits this should
/// skip the offending element rather than abort.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The input description carried no name, so the field has no
    /// identity to join on.
    #[error("field has no name")]
    MissingName,
}
