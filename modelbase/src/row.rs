//! Result-set row representation

use crate::error::{Error, Result};
use crate::value::{FromValue, Value};

/// One result-set row, preserving column order.
///
/// Executor implementations build rows from their driver's result set;
/// generated `fill_model` code reads them back by column name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: Vec<(String, Value)>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from `(column, value)` pairs
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Value)>,
        S: Into<String>,
    {
        Self {
            columns: pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }

    /// Append a column value
    pub fn push(&mut self, name: impl Into<String>, value: Value) {
        self.columns.push((name.into(), value));
    }

    /// Get a value from the row by column name as a dynamic Value.
    ///
    /// Returns an error if the column doesn't exist.
    pub fn get_value(&self, column: &str) -> Result<Value> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.clone())
            .ok_or_else(|| Error::ColumnNotFound(column.to_string()))
    }

    /// Get a typed value from the row by column name.
    pub fn get<T: FromValue>(&self, column: &str) -> Result<T> {
        T::from_value(self.get_value(column)?)
    }

    /// Number of columns in the row
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the row has no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_get() {
        let row = Row::from_pairs([
            ("id", Value::Int(7)),
            ("name", Value::Text("Ada".to_string())),
            ("email", Value::Null),
        ]);

        assert_eq!(row.get::<i64>("id").unwrap(), 7);
        assert_eq!(row.get::<Option<String>>("email").unwrap(), None);
        assert_eq!(
            row.get::<Option<String>>("name").unwrap(),
            Some("Ada".to_string())
        );
    }

    #[test]
    fn test_missing_column() {
        let row = Row::from_pairs([("id", Value::Int(1))]);
        let err = row.get_value("nope").unwrap_err();
        assert!(matches!(err, Error::ColumnNotFound(name) if name == "nope"));
    }
}
