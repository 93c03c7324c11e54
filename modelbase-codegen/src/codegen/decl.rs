//! Structured declaration model for generated output
//!
//! Generators produce an ordered list of typed declarations instead of
//! source text; the printer renders the list into one target language.
//! Tests assert on this structure directly.

use super::typemap::MarshalKind;

/// The complete declaration sequence for one generated model
#[derive(Debug, Clone)]
pub struct ModelUnit {
    /// Name of the emitted type
    pub type_name: String,
    /// Backing table name
    pub table_name: String,
    /// Declarations in emission order: per-field blocks in schema order,
    /// then the persistence block
    pub decls: Vec<Declaration>,
}

/// One generated declaration
#[derive(Debug, Clone)]
pub enum Declaration {
    /// Private backing field, always `Option<rust_type>`
    BackingField { field: String, rust_type: String },

    /// Always-present getter
    Getter {
        method: String,
        field: String,
        rust_type: String,
        /// Copy types are returned by value, others by reference
        copy: bool,
    },

    /// Setter; absent for auto-increment columns
    Setter {
        method: String,
        field: String,
        param: String,
        rust_type: String,
        column: String,
        /// Non-nullable columns reject absent values before any mutation
        guard: bool,
    },

    /// Single-row lookup on the primary-key column
    UniqueFinder(FinderDecl),

    /// Multi-row lookup on a non-key column
    MultiFinder(FinderDecl),

    /// Row-to-instance materializer
    FillModel { assigns: Vec<FieldAssign> },

    /// Parameterized INSERT over all columns in schema order
    Create { sql: String, binds: Vec<BindDecl> },

    /// Parameterized UPDATE over non-key columns, keyed on the primary key
    Commit { sql: String, binds: Vec<BindDecl> },

    /// Primary-key-aware persistence dispatch
    Save,
}

/// Data shared by both finder variants
#[derive(Debug, Clone)]
pub struct FinderDecl {
    pub method: String,
    pub column: String,
    pub param: String,
    pub rust_type: String,
    pub kind: MarshalKind,
    /// Same null-constraint check as the column's setter
    pub guard: bool,
    pub sql: String,
}

/// One `column -> field` assignment inside fill_model
#[derive(Debug, Clone)]
pub struct FieldAssign {
    pub field: String,
    pub column: String,
}

/// One bind site inside create/commit
#[derive(Debug, Clone)]
pub struct BindDecl {
    /// Placeholder name (the column name)
    pub name: String,
    /// Backing field the value comes from
    pub field: String,
    pub kind: MarshalKind,
    /// Non-Copy backing types are cloned at the bind site
    pub needs_clone: bool,
}
