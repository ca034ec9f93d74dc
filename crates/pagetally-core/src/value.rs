use serde::{Deserialize, Serialize};

///
/// Value
///
/// Scalar cell value materialized by query execution.
/// Drivers differ in how they surface aggregates (integer, unsigned, or
/// textual digits), so count extraction goes through [`Value::as_u64`].
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Interpret this value as a non-negative integer.
    ///
    /// Accepts `Uint`, non-negative `Int`, and `Text` holding plain digits.
    /// Everything else returns `None`.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Uint(n) => Some(*n),
            Self::Int(n) => u64::try_from(*n).ok(),
            Self::Text(s) => s.parse::<u64>().ok(),
            Self::Null | Self::Bool(_) | Self::Float(_) => None,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Uint(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_u64_accepts_unsigned_and_non_negative_signed() {
        assert_eq!(Value::Uint(500).as_u64(), Some(500));
        assert_eq!(Value::Int(250).as_u64(), Some(250));
        assert_eq!(Value::Int(0).as_u64(), Some(0));
    }

    #[test]
    fn as_u64_accepts_textual_digits() {
        assert_eq!(Value::Text("42".to_string()).as_u64(), Some(42));
        assert_eq!(Value::Text("zero".to_string()).as_u64(), None);
    }

    #[test]
    fn as_u64_rejects_negative_null_and_non_numeric() {
        assert_eq!(Value::Int(-1).as_u64(), None);
        assert_eq!(Value::Null.as_u64(), None);
        assert_eq!(Value::Bool(true).as_u64(), None);
        assert_eq!(Value::Float(2.0).as_u64(), None);
    }
}
