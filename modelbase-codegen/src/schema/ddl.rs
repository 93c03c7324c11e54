//! DDL-backed schema provider using sqlparser

use std::path::Path;

use sqlparser::ast::{
    ColumnOption, Expr, Ident, IndexColumn, ObjectName, PrimaryKeyConstraint, Statement,
    TableConstraint,
};
use sqlparser::dialect::MySqlDialect;
use sqlparser::parser::Parser;

use super::metadata::{ColumnDescriptor, KeyRole};
use super::provider::SchemaProvider;
use crate::error::{CodegenError, Result};

/// Schema provider backed by `CREATE TABLE` DDL text.
///
/// Parses the whole schema up front and serves per-table column sets from
/// the parsed statements, so repeated `get_columns` calls return the same
/// order.
pub struct DdlSchemaProvider {
    tables: Vec<(String, Vec<ColumnDescriptor>)>,
}

impl DdlSchemaProvider {
    /// Parse a SQL schema string
    pub fn from_sql(sql: &str) -> Result<Self> {
        let dialect = MySqlDialect {};
        let statements = Parser::parse_sql(&dialect, sql)?;

        let mut tables = Vec::new();
        for stmt in statements {
            if let Statement::CreateTable(create) = stmt {
                let name = extract_table_name(&create.name);
                let columns = extract_columns(&create);
                tables.push((name, columns));
            }
        }

        Ok(Self { tables })
    }

    /// Parse a SQL schema file
    pub fn from_file(path: &Path) -> Result<Self> {
        let sql = std::fs::read_to_string(path)?;
        Self::from_sql(&sql)
    }

    /// Names of the tables found in the DDL, in source order
    pub fn table_names(&self) -> Vec<&str> {
        self.tables.iter().map(|(name, _)| name.as_str()).collect()
    }
}

impl SchemaProvider for DdlSchemaProvider {
    /// DDL text carries no schema scoping; `schema_name` is accepted for
    /// interface parity and ignored here.
    fn get_columns(
        &self,
        table_name: &str,
        _schema_name: &str,
    ) -> Result<Vec<ColumnDescriptor>> {
        self.tables
            .iter()
            .find(|(name, _)| name == table_name)
            .map(|(_, columns)| columns.clone())
            .ok_or_else(|| CodegenError::TableNotFound(table_name.to_string()))
    }
}

/// Extract column descriptors from a CREATE TABLE statement
fn extract_columns(create: &sqlparser::ast::CreateTable) -> Vec<ColumnDescriptor> {
    let mut columns: Vec<ColumnDescriptor> =
        create.columns.iter().map(extract_column).collect();

    // Table-level PRIMARY KEY constraint marks every listed column.
    // A multi-column key therefore yields several Primary columns; the
    // generator rejects that later rather than the provider guessing.
    for constraint in &create.constraints {
        if let TableConstraint::PrimaryKey(PrimaryKeyConstraint {
            columns: pk_cols, ..
        }) = constraint
        {
            for pk_col in pk_cols {
                let col_name = extract_ident_from_index_column(pk_col);
                if let Some(col) = columns.iter_mut().find(|c| c.name == col_name) {
                    col.key_role = KeyRole::Primary;
                    col.nullable = false;
                }
            }
        }
    }

    columns
}

/// Extract one column descriptor from a column definition
fn extract_column(col_def: &sqlparser::ast::ColumnDef) -> ColumnDescriptor {
    let name = extract_ident(&col_def.name);
    let raw_type = format!("{}", col_def.data_type);

    let mut nullable = true; // Default to nullable, as INFORMATION_SCHEMA does
    let mut default_value = None;
    let mut auto_increment = false;
    let mut key_role = KeyRole::None;

    for option in &col_def.options {
        match &option.option {
            ColumnOption::NotNull => {
                nullable = false;
            }
            ColumnOption::Null => {
                nullable = true;
            }
            ColumnOption::Default(expr) => {
                default_value = Some(format!("{}", expr));
            }
            ColumnOption::PrimaryKey(_) => {
                key_role = KeyRole::Primary;
                nullable = false;
            }
            ColumnOption::DialectSpecific(tokens) => {
                let token_str = tokens
                    .iter()
                    .map(|t| t.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
                    .to_uppercase();
                if token_str.contains("AUTO_INCREMENT") {
                    auto_increment = true;
                }
            }
            _ => {}
        }
    }

    ColumnDescriptor {
        name,
        raw_type,
        nullable,
        key_role,
        default_value,
        auto_increment,
    }
}

/// Extract a simple string from an ObjectName
fn extract_table_name(name: &ObjectName) -> String {
    name.0
        .last()
        .and_then(|part| part.as_ident())
        .map(|ident| ident.value.clone())
        .unwrap_or_default()
}

/// Extract a string from an Ident
fn extract_ident(ident: &Ident) -> String {
    ident.value.clone()
}

/// Extract a column name string from an IndexColumn
fn extract_ident_from_index_column(ic: &IndexColumn) -> String {
    match &ic.column.expr {
        Expr::Identifier(ident) => ident.value.clone(),
        other => format!("{}", other),
    }
}
