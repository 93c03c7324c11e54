//! Schema-provider seam

use crate::error::Result;
use crate::schema::ColumnDescriptor;

/// Supplies the ordered column descriptors for a named table.
///
/// Implementations must return columns in a stable order across calls so
/// generated output stays deterministic. Live INFORMATION_SCHEMA
/// introspection is one possible implementation; the in-repo one parses
/// `CREATE TABLE` DDL.
pub trait SchemaProvider {
    /// Ordered column descriptors for `table_name` within `schema_name`.
    fn get_columns(&self, table_name: &str, schema_name: &str)
        -> Result<Vec<ColumnDescriptor>>;
}
