//! Value enum for form field values

use serde::Deserialize;
use serde::Serialize;

/// A raw form field value.
///
/// Fields carry either a single scalar string (text inputs, selects,
/// single checkboxes reported as their value-or-empty) or an ordered
/// list of strings (multi-selects, checkbox groups).
///
/// # Example
///
/// ```
/// use formwork::Value;
///
/// let name = Value::from("Contoso");
/// let tags = Value::from(vec!["red".to_string(), "blue".to_string()]);
/// assert!(!name.is_empty());
/// assert!(Value::default().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Scalar string value.
    Text(String),
    /// Multi-valued input, one entry per selected element.
    Many(Vec<String>),
}

impl Value {
    /// Returns true for the empty string and for an empty list.
    ///
    /// A list containing empty strings is not empty: each element is
    /// still evaluated against the field's rules.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Text(s) => s.is_empty(),
            Value::Many(items) => items.is_empty(),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Text(String::new())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::Many(items)
    }
}

impl From<&[&str]> for Value {
    fn from(items: &[&str]) -> Self {
        Value::Many(items.iter().map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emptiness() {
        assert!(Value::from("").is_empty());
        assert!(Value::Many(vec![]).is_empty());
        assert!(!Value::from("x").is_empty());
        assert!(!Value::Many(vec![String::new()]).is_empty());
    }

    #[test]
    fn test_serde_untagged() {
        let scalar: Value = serde_json::from_str("\"hi\"").unwrap();
        assert_eq!(scalar, Value::from("hi"));
        let multi: Value = serde_json::from_str("[\"a\",\"b\"]").unwrap();
        assert_eq!(
            multi,
            Value::Many(vec!["a".to_string(), "b".to_string()])
        );
    }
}
