//! Dynamic Value type for column values

use chrono::NaiveDateTime;

use crate::error::{Error, Result};

/// A dynamic column value.
///
/// One variant per semantic type the generator understands, plus `Null`.
/// Values travel in both directions: bound into queries through
/// [`crate::BoundParam`] and extracted from [`crate::Row`]s via
/// [`FromValue`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL NULL value
    Null,
    /// Integer value
    Int(i64),
    /// Double-precision value
    Double(f64),
    /// String/text value
    Text(String),
    /// Boolean value
    Bool(bool),
    /// Date or datetime value
    DateTime(NaiveDateTime),
    /// Binary data
    Bytes(Vec<u8>),
}

impl Value {
    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Int(_) => "int",
            Value::Double(_) => "double",
            Value::Text(_) => "text",
            Value::Bool(_) => "bool",
            Value::DateTime(_) => "datetime",
            Value::Bytes(_) => "bytes",
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::DateTime(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

// Absent optionals bind as SQL NULL
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

/// Trait for types that can be extracted from a database value.
///
/// Implementations accept only the matching variant (widening the integer
/// carrier where lossless); anything else is a `TypeConversion` error.
pub trait FromValue: Sized {
    /// Convert a database value to this type.
    fn from_value(value: Value) -> Result<Self>;
}

impl FromValue for i64 {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Int(v) => Ok(v),
            _ => Err(Error::TypeConversion {
                expected: "int",
                actual: value.type_name().to_string(),
            }),
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Double(v) => Ok(v),
            Value::Int(v) => Ok(v as f64),
            _ => Err(Error::TypeConversion {
                expected: "double",
                actual: value.type_name().to_string(),
            }),
        }
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Text(v) => Ok(v),
            _ => Err(Error::TypeConversion {
                expected: "text",
                actual: value.type_name().to_string(),
            }),
        }
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            Value::Int(v) => Ok(v != 0),
            _ => Err(Error::TypeConversion {
                expected: "bool",
                actual: value.type_name().to_string(),
            }),
        }
    }
}

impl FromValue for NaiveDateTime {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::DateTime(v) => Ok(v),
            _ => Err(Error::TypeConversion {
                expected: "datetime",
                actual: value.type_name().to_string(),
            }),
        }
    }
}

impl FromValue for Vec<u8> {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(v) => Ok(v),
            _ => Err(Error::TypeConversion {
                expected: "bytes",
                actual: value.type_name().to_string(),
            }),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            other => Ok(Some(T::from_value(other)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_from_value() {
        assert_eq!(Option::<i64>::from_value(Value::Null).unwrap(), None);
        assert_eq!(
            Option::<i64>::from_value(Value::Int(42)).unwrap(),
            Some(42)
        );
    }

    #[test]
    fn test_null_binds_from_absent_option() {
        let v: Value = Option::<String>::None.into();
        assert!(v.is_null());

        let v: Value = Some("hi".to_string()).into();
        assert_eq!(v, Value::Text("hi".to_string()));
    }

    #[test]
    fn test_int_widens_to_double_and_bool() {
        assert_eq!(f64::from_value(Value::Int(3)).unwrap(), 3.0);
        assert!(bool::from_value(Value::Int(1)).unwrap());
        assert!(!bool::from_value(Value::Int(0)).unwrap());
    }

    #[test]
    fn test_mismatch_is_type_conversion() {
        let err = String::from_value(Value::Int(1)).unwrap_err();
        match err {
            Error::TypeConversion { expected, actual } => {
                assert_eq!(expected, "text");
                assert_eq!(actual, "int");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_bytes_round_trip() {
        let v = Value::from(vec![0u8, 1, 2]);
        assert_eq!(Vec::<u8>::from_value(v).unwrap(), vec![0, 1, 2]);
    }
}
