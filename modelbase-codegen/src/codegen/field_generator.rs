//! Field generator: per-column accessor, mutator, and finder declarations

use super::decl::{Declaration, FinderDecl};
use super::naming;
use super::typemap;
use crate::error::{CodegenError, Result};
use crate::schema::{ColumnDescriptor, KeyRole};

/// Produce the declaration block for one column.
///
/// Always a backing field and a getter; a setter unless the column is
/// auto-increment (those stay immutable through the generated API); and one
/// finder, unique for the primary-key column, multi-result otherwise.
pub fn field_declarations(
    table_name: &str,
    column: &ColumnDescriptor,
) -> Result<Vec<Declaration>> {
    let ty = typemap::parse_raw_type(&column.raw_type)?;
    let kind = ty.semantic.marshal_kind().ok_or_else(|| {
        CodegenError::UnsupportedMarshalType(ty.semantic.name().to_string())
    })?;
    let rust_type = ty.semantic.rust_type().to_string();
    let field = naming::to_field_name(&column.name);

    let mut decls = vec![
        Declaration::BackingField {
            field: field.clone(),
            rust_type: rust_type.clone(),
        },
        Declaration::Getter {
            method: naming::getter_name(&column.name),
            field: field.clone(),
            rust_type: rust_type.clone(),
            copy: ty.semantic.is_copy(),
        },
    ];

    if !column.auto_increment {
        decls.push(Declaration::Setter {
            method: naming::setter_name(&column.name),
            field: field.clone(),
            param: naming::param_name(&column.name),
            rust_type: rust_type.clone(),
            column: column.name.clone(),
            guard: !column.nullable,
        });
    }

    let finder = FinderDecl {
        method: String::new(),
        column: column.name.clone(),
        param: naming::param_name(&column.name),
        rust_type,
        kind,
        guard: !column.nullable,
        sql: format!(
            "SELECT * FROM {} WHERE `{}` = :val",
            table_name, column.name
        ),
    };

    match column.key_role {
        KeyRole::Primary => decls.push(Declaration::UniqueFinder(FinderDecl {
            method: naming::unique_finder_name(&column.name),
            ..finder
        })),
        KeyRole::None => decls.push(Declaration::MultiFinder(FinderDecl {
            method: naming::multi_finder_name(&column.name),
            ..finder
        })),
    }

    Ok(decls)
}
