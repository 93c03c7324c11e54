//! Column metadata consumed by the generator

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{CodegenError, Result};

/// Key role of a column within its table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyRole {
    /// Not part of any key
    None,
    /// Single-column primary key
    Primary,
}

/// Metadata for one table column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name, unique within its table
    pub name: String,

    /// Raw type text (e.g., "varchar(255)")
    pub raw_type: String,

    /// Whether the column is nullable
    pub nullable: bool,

    /// Key role of the column
    pub key_role: KeyRole,

    /// Default value expression (if any)
    pub default_value: Option<String>,

    /// Whether this column is auto-increment
    pub auto_increment: bool,
}

/// One table's ordered column set.
///
/// Column order is schema order; it only matters for deterministic output.
/// A `Table` is read once per generation run and held immutably until the
/// artifact is produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    /// Table name
    pub name: String,

    /// Columns in schema order
    pub columns: Vec<ColumnDescriptor>,
}

impl Table {
    /// Build a table, rejecting duplicate column names
    pub fn new(name: impl Into<String>, columns: Vec<ColumnDescriptor>) -> Result<Self> {
        let name = name.into();
        {
            let mut seen = HashSet::new();
            for column in &columns {
                if !seen.insert(column.name.as_str()) {
                    return Err(CodegenError::ValidationError(format!(
                        "duplicate column `{}` in table `{}`",
                        column.name, name
                    )));
                }
            }
        }
        Ok(Self { name, columns })
    }

    /// The single primary-key column.
    ///
    /// Zero primary columns and more than one are both errors; neither is
    /// ever resolved silently.
    pub fn primary_key(&self) -> Result<&ColumnDescriptor> {
        let mut primaries = self
            .columns
            .iter()
            .filter(|c| c.key_role == KeyRole::Primary);
        match (primaries.next(), primaries.next()) {
            (Some(pk), None) => Ok(pk),
            (None, _) => Err(CodegenError::MissingPrimaryKey {
                table: self.name.clone(),
            }),
            (Some(_), Some(_)) => Err(CodegenError::CompositePrimaryKey {
                table: self.name.clone(),
            }),
        }
    }

    /// Get a column by name
    pub fn get_column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str, key_role: KeyRole) -> ColumnDescriptor {
        ColumnDescriptor {
            name: name.to_string(),
            raw_type: "int".to_string(),
            nullable: false,
            key_role,
            default_value: None,
            auto_increment: false,
        }
    }

    #[test]
    fn test_duplicate_columns_rejected() {
        let err = Table::new(
            "t",
            vec![column("a", KeyRole::None), column("a", KeyRole::None)],
        )
        .unwrap_err();
        assert!(matches!(err, CodegenError::ValidationError(_)));
    }

    #[test]
    fn test_primary_key_exactly_one() {
        let table = Table::new(
            "t",
            vec![column("id", KeyRole::Primary), column("x", KeyRole::None)],
        )
        .unwrap();
        assert_eq!(table.primary_key().unwrap().name, "id");
    }

    #[test]
    fn test_primary_key_missing() {
        let table = Table::new("t", vec![column("x", KeyRole::None)]).unwrap();
        assert!(matches!(
            table.primary_key().unwrap_err(),
            CodegenError::MissingPrimaryKey { table } if table == "t"
        ));
    }

    #[test]
    fn test_primary_key_composite_rejected() {
        let table = Table::new(
            "t",
            vec![column("a", KeyRole::Primary), column("b", KeyRole::Primary)],
        )
        .unwrap();
        assert!(matches!(
            table.primary_key().unwrap_err(),
            CodegenError::CompositePrimaryKey { .. }
        ));
    }
}
