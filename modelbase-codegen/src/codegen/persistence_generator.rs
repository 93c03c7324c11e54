//! Persistence generator: fill_model/create/commit/save declarations

use super::decl::{BindDecl, Declaration, FieldAssign};
use super::naming;
use super::typemap;
use crate::error::{CodegenError, Result};
use crate::schema::Table;

/// Produce the persistence block for a table.
///
/// Requires exactly one primary-key column; zero or several aborts the run
/// before any artifact work happens.
pub fn persistence_declarations(table: &Table) -> Result<Vec<Declaration>> {
    let pk = table.primary_key()?;

    let assigns = table
        .columns
        .iter()
        .map(|c| FieldAssign {
            field: naming::to_field_name(&c.name),
            column: c.name.clone(),
        })
        .collect();

    // Every column binds once, in schema order, for both statements.
    let binds = bind_decls(table)?;

    let column_list = table
        .columns
        .iter()
        .map(|c| format!("`{}`", c.name))
        .collect::<Vec<_>>()
        .join(",");
    let placeholders = table
        .columns
        .iter()
        .map(|c| format!(":{}", c.name))
        .collect::<Vec<_>>()
        .join(",");
    let insert_sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table.name, column_list, placeholders
    );

    let set_clause = table
        .columns
        .iter()
        .filter(|c| c.name != pk.name)
        .map(|c| format!("`{name}`=:{name}", name = c.name))
        .collect::<Vec<_>>()
        .join(",");
    let update_sql = format!(
        "UPDATE {} SET {} WHERE `{pk}`=:{pk}",
        table.name,
        set_clause,
        pk = pk.name
    );

    Ok(vec![
        Declaration::FillModel { assigns },
        Declaration::Create {
            sql: insert_sql,
            binds: binds.clone(),
        },
        Declaration::Commit {
            sql: update_sql,
            binds,
        },
        Declaration::Save,
    ])
}

fn bind_decls(table: &Table) -> Result<Vec<BindDecl>> {
    table
        .columns
        .iter()
        .map(|column| {
            let ty = typemap::parse_raw_type(&column.raw_type)?;
            let kind = ty.semantic.marshal_kind().ok_or_else(|| {
                CodegenError::UnsupportedMarshalType(ty.semantic.name().to_string())
            })?;
            Ok(BindDecl {
                name: column.name.clone(),
                field: naming::to_field_name(&column.name),
                kind,
                needs_clone: !ty.semantic.is_copy(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::typemap::MarshalKind;
    use crate::schema::{ColumnDescriptor, KeyRole};

    fn contact_table() -> Table {
        Table::new(
            "contact",
            vec![
                ColumnDescriptor {
                    name: "id".to_string(),
                    raw_type: "int".to_string(),
                    nullable: false,
                    key_role: KeyRole::Primary,
                    default_value: None,
                    auto_increment: true,
                },
                ColumnDescriptor {
                    name: "name".to_string(),
                    raw_type: "varchar(100)".to_string(),
                    nullable: false,
                    key_role: KeyRole::None,
                    default_value: None,
                    auto_increment: false,
                },
                ColumnDescriptor {
                    name: "email".to_string(),
                    raw_type: "varchar(255)".to_string(),
                    nullable: true,
                    key_role: KeyRole::None,
                    default_value: None,
                    auto_increment: false,
                },
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_insert_statement() {
        let decls = persistence_declarations(&contact_table()).unwrap();
        match &decls[1] {
            Declaration::Create { sql, binds } => {
                assert_eq!(
                    sql,
                    "INSERT INTO contact (`id`,`name`,`email`) VALUES (:id,:name,:email)"
                );
                assert_eq!(binds.len(), 3);
                assert_eq!(binds[0].kind, MarshalKind::Int);
                assert!(!binds[0].needs_clone);
                assert!(binds[1].needs_clone);
            }
            other => panic!("expected create, got {other:?}"),
        }
    }

    #[test]
    fn test_update_statement() {
        let decls = persistence_declarations(&contact_table()).unwrap();
        match &decls[2] {
            Declaration::Commit { sql, binds } => {
                assert_eq!(
                    sql,
                    "UPDATE contact SET `name`=:name,`email`=:email WHERE `id`=:id"
                );
                // every column binds exactly once
                assert_eq!(binds.len(), 3);
                let names: Vec<_> = binds.iter().map(|b| b.name.as_str()).collect();
                assert_eq!(names, ["id", "name", "email"]);
            }
            other => panic!("expected commit, got {other:?}"),
        }
    }

    #[test]
    fn test_block_order() {
        let decls = persistence_declarations(&contact_table()).unwrap();
        assert!(matches!(decls[0], Declaration::FillModel { .. }));
        assert!(matches!(decls[3], Declaration::Save));
    }

    #[test]
    fn test_missing_primary_key_aborts() {
        let mut table = contact_table();
        table.columns[0].key_role = KeyRole::None;
        let err = persistence_declarations(&table).unwrap_err();
        assert!(matches!(err, CodegenError::MissingPrimaryKey { .. }));
    }

    #[test]
    fn test_two_primary_columns_abort() {
        let mut table = contact_table();
        table.columns[1].key_role = KeyRole::Primary;
        let err = persistence_declarations(&table).unwrap_err();
        assert!(matches!(err, CodegenError::CompositePrimaryKey { .. }));
    }
}
