//! Query-execution seam consumed by generated models

use crate::error::Result;
use crate::param::BoundParam;
use crate::row::Row;

/// Interface to the query-execution layer.
///
/// Generated finders and persistence methods run all their SQL through this
/// trait; implement it over your driver to wire models to a real database.
/// Statements use named `:placeholder` parameters matching the
/// [`BoundParam::name`]s handed alongside.
///
/// `execute_write` returns the driver's failure sentinel: `None` means the
/// statement succeeded, `Some(code)` carries a driver error code. Generated
/// INSERTs additionally treat `Some(-1)` as success while generated UPDATEs
/// do not.
// TODO: confirm with the upstream driver owners whether the -1 insert
// sentinel is deliberate (no generated-id case) or a quirk to retire.
pub trait QueryExecutor {
    /// Run a single-row lookup.
    fn get_one(&self, query: &str, params: &[BoundParam]) -> Result<Option<Row>>;

    /// Run a multi-row lookup, preserving result order.
    fn get_all(&self, query: &str, params: &[BoundParam]) -> Result<Vec<Row>>;

    /// Run an INSERT/UPDATE/DELETE statement and return its result sentinel.
    fn execute_write(&self, query: &str, params: &[BoundParam]) -> Result<Option<i64>>;
}
