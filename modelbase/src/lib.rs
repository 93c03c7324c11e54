//! modelbase: runtime support for generated table models
//!
//! Models emitted by `modelbase-codegen` compile against this crate. It
//! provides the pieces generated code needs at runtime:
//!
//! - [`Value`]: the dynamic column value, one variant per supported semantic
//!   type, plus `Null`
//! - [`Row`]: a result-set row queried by column name
//! - [`BoundParam`] / [`ParamKind`]: named bind parameters and their
//!   marshaling kinds
//! - [`QueryExecutor`]: the seam to the query-execution layer; implement it
//!   over your driver of choice and hand it to the generated finders and
//!   persistence methods
//!
//! Generated models track persistence state through plain `exists`/`changed`
//! flags with no synchronization; instances are single-threaded only.

pub mod error;
pub mod executor;
pub mod param;
pub mod row;
pub mod value;

pub use error::{Error, Result};
pub use executor::QueryExecutor;
pub use param::{BoundParam, ParamKind};
pub use row::Row;
pub use value::{FromValue, Value};
