//! Printer: renders a declaration sequence to Rust source text
//!
//! The only printer currently implemented targets Rust; the declaration
//! model it consumes is language-neutral.

use super::decl::{BindDecl, Declaration, FinderDecl, ModelUnit};

/// Render the complete unit to source text.
///
/// The caller gets the whole artifact as one string; nothing is written
/// anywhere from here.
pub fn render_unit(unit: &ModelUnit) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "// Generated by modelbase-codegen for table `{}`. Do not edit.\n\n",
        unit.table_name
    ));
    out.push_str(&render_imports(unit));
    out.push('\n');

    out.push_str(&format!(
        "/// Model backed by the `{}` table.\n",
        unit.table_name
    ));
    out.push_str("///\n");
    out.push_str("/// Persistence state is tracked through plain exists/changed flags;\n");
    out.push_str("/// instances are single-threaded only.\n");
    out.push_str("#[derive(Debug, Clone, Default)]\n");
    out.push_str(&format!("pub struct {} {{\n", unit.type_name));
    for decl in &unit.decls {
        if let Declaration::BackingField { field, rust_type } = decl {
            out.push_str(&format!("    {}: Option<{}>,\n", field, rust_type));
        }
    }
    out.push_str("    exists_in_db: bool,\n");
    out.push_str("    changed: bool,\n");
    out.push_str("}\n\n");

    out.push_str(&format!("impl {} {{\n", unit.type_name));
    out.push_str("    pub fn new() -> Self {\n        Self::default()\n    }\n");
    for decl in &unit.decls {
        if let Some(method) = render_method(decl) {
            out.push('\n');
            out.push_str(&method);
        }
    }
    out.push_str("}\n");

    out
}

/// Import line; `Error` only when some declaration carries a null guard
fn render_imports(unit: &ModelUnit) -> String {
    let needs_error = unit.decls.iter().any(|d| match d {
        Declaration::Setter { guard, .. } => *guard,
        Declaration::UniqueFinder(f) | Declaration::MultiFinder(f) => f.guard,
        _ => false,
    });
    if needs_error {
        "use modelbase::{BoundParam, Error, ParamKind, QueryExecutor, Result, Row, Value};\n"
            .to_string()
    } else {
        "use modelbase::{BoundParam, ParamKind, QueryExecutor, Result, Row, Value};\n"
            .to_string()
    }
}

fn render_method(decl: &Declaration) -> Option<String> {
    match decl {
        Declaration::BackingField { .. } => None,
        Declaration::Getter {
            method,
            field,
            rust_type,
            copy,
        } => Some(render_getter(method, field, rust_type, *copy)),
        Declaration::Setter {
            method,
            field,
            param,
            rust_type,
            column,
            guard,
        } => Some(render_setter(method, field, param, rust_type, column, *guard)),
        Declaration::UniqueFinder(f) => Some(render_unique_finder(f)),
        Declaration::MultiFinder(f) => Some(render_multi_finder(f)),
        Declaration::FillModel { assigns } => Some(render_fill_model(assigns)),
        Declaration::Create { sql, binds } => Some(render_create(sql, binds)),
        Declaration::Commit { sql, binds } => Some(render_commit(sql, binds)),
        Declaration::Save => Some(render_save()),
    }
}

fn render_getter(method: &str, field: &str, rust_type: &str, copy: bool) -> String {
    if copy {
        format!(
            "    pub fn {method}(&self) -> Option<{rust_type}> {{\n        self.{field}\n    }}\n"
        )
    } else {
        format!(
            "    pub fn {method}(&self) -> Option<&{rust_type}> {{\n        self.{field}.as_ref()\n    }}\n"
        )
    }
}

/// Null-constraint check shared by setters and finders
fn render_guard(param: &str, column: &str) -> String {
    format!(
        "        if {param}.is_none() {{\n            return Err(Error::NullConstraintViolation {{\n                column: \"{column}\".to_string(),\n            }});\n        }}\n"
    )
}

fn render_setter(
    method: &str,
    field: &str,
    param: &str,
    rust_type: &str,
    column: &str,
    guard: bool,
) -> String {
    if guard {
        format!(
            "    pub fn {method}(&mut self, {param}: Option<{rust_type}>) -> Result<()> {{\n{guard_code}        self.{field} = {param};\n        self.changed = true;\n        Ok(())\n    }}\n",
            guard_code = render_guard(param, column),
        )
    } else {
        format!(
            "    pub fn {method}(&mut self, {param}: Option<{rust_type}>) {{\n        self.{field} = {param};\n        self.changed = true;\n    }}\n"
        )
    }
}

fn render_finder_params(f: &FinderDecl) -> String {
    format!(
        "        let params = [BoundParam::new(\"val\", Value::from({param}), {kind})];\n",
        param = f.param,
        kind = f.kind.as_code(),
    )
}

fn render_unique_finder(f: &FinderDecl) -> String {
    let guard_code = if f.guard {
        render_guard(&f.param, &f.column)
    } else {
        String::new()
    };
    format!(
        "    /// Find one record by `{column}`\n    pub fn {method}(executor: &dyn QueryExecutor, {param}: Option<{rust_type}>) -> Result<Option<Self>> {{\n{guard_code}{params}        let row = executor.get_one(\"{sql}\", &params)?;\n        match row {{\n            Some(row) => Ok(Some(Self::fill_model(&row)?)),\n            None => Ok(None),\n        }}\n    }}\n",
        column = f.column,
        method = f.method,
        param = f.param,
        rust_type = f.rust_type,
        params = render_finder_params(f),
        sql = f.sql,
    )
}

fn render_multi_finder(f: &FinderDecl) -> String {
    let guard_code = if f.guard {
        render_guard(&f.param, &f.column)
    } else {
        String::new()
    };
    format!(
        "    /// Find all records matching `{column}`\n    pub fn {method}(executor: &dyn QueryExecutor, {param}: Option<{rust_type}>) -> Result<Vec<Self>> {{\n{guard_code}{params}        let rows = executor.get_all(\"{sql}\", &params)?;\n        let mut items = Vec::with_capacity(rows.len());\n        for row in &rows {{\n            items.push(Self::fill_model(row)?);\n        }}\n        Ok(items)\n    }}\n",
        column = f.column,
        method = f.method,
        param = f.param,
        rust_type = f.rust_type,
        params = render_finder_params(f),
        sql = f.sql,
    )
}

fn render_fill_model(assigns: &[super::decl::FieldAssign]) -> String {
    let mut body = String::new();
    for assign in assigns {
        body.push_str(&format!(
            "        item.{} = row.get(\"{}\")?;\n",
            assign.field, assign.column
        ));
    }
    format!(
        "    /// Materialize an instance from a result row\n    pub fn fill_model(row: &Row) -> Result<Self> {{\n        let mut item = Self::new();\n{body}        item.changed = false;\n        item.exists_in_db = true;\n        Ok(item)\n    }}\n"
    )
}

fn render_bind_list(binds: &[BindDecl]) -> String {
    let mut out = String::from("        let params = [\n");
    for bind in binds {
        let value = if bind.needs_clone {
            format!("Value::from(self.{}.clone())", bind.field)
        } else {
            format!("Value::from(self.{})", bind.field)
        };
        out.push_str(&format!(
            "            BoundParam::new(\"{}\", {}, {}),\n",
            bind.name,
            value,
            bind.kind.as_code()
        ));
    }
    out.push_str("        ];\n");
    out
}

fn render_create(sql: &str, binds: &[BindDecl]) -> String {
    format!(
        "    /// Insert this instance as a new row\n    pub fn create(&mut self, executor: &dyn QueryExecutor) -> Result<bool> {{\n{bind_list}        let result = executor.execute_write(\n            \"{sql}\",\n            &params,\n        )?;\n        self.exists_in_db = matches!(result, None | Some(-1));\n        Ok(self.exists_in_db)\n    }}\n",
        bind_list = render_bind_list(binds),
    )
}

fn render_commit(sql: &str, binds: &[BindDecl]) -> String {
    format!(
        "    /// Update the existing row keyed by the primary key\n    pub fn commit(&mut self, executor: &dyn QueryExecutor) -> Result<bool> {{\n{bind_list}        let result = executor.execute_write(\n            \"{sql}\",\n            &params,\n        )?;\n        Ok(result.is_none())\n    }}\n",
        bind_list = render_bind_list(binds),
    )
}

fn render_save() -> String {
    "    /// Persist pending state; false when there is nothing to do\n    pub fn save(&mut self, executor: &dyn QueryExecutor) -> Result<bool> {\n        if self.exists_in_db && !self.changed {\n            return Ok(false);\n        }\n        let res = if self.exists_in_db {\n            self.commit(executor)?\n        } else {\n            self.create(executor)?\n        };\n        if res {\n            self.changed = false;\n        }\n        Ok(res)\n    }\n"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::decl::FieldAssign;
    use crate::codegen::typemap::MarshalKind;

    fn small_unit() -> ModelUnit {
        ModelUnit {
            type_name: "NoteBase".to_string(),
            table_name: "note".to_string(),
            decls: vec![
                Declaration::BackingField {
                    field: "id".to_string(),
                    rust_type: "i64".to_string(),
                },
                Declaration::Getter {
                    method: "get_id".to_string(),
                    field: "id".to_string(),
                    rust_type: "i64".to_string(),
                    copy: true,
                },
                Declaration::UniqueFinder(FinderDecl {
                    method: "find_by_id".to_string(),
                    column: "id".to_string(),
                    param: "id_value".to_string(),
                    rust_type: "i64".to_string(),
                    kind: MarshalKind::Int,
                    guard: true,
                    sql: "SELECT * FROM note WHERE `id` = :val".to_string(),
                }),
                Declaration::FillModel {
                    assigns: vec![FieldAssign {
                        field: "id".to_string(),
                        column: "id".to_string(),
                    }],
                },
                Declaration::Save,
            ],
        }
    }

    #[test]
    fn test_struct_and_flags() {
        let source = render_unit(&small_unit());
        assert!(source.contains("pub struct NoteBase {"));
        assert!(source.contains("    id: Option<i64>,"));
        assert!(source.contains("    exists_in_db: bool,"));
        assert!(source.contains("    changed: bool,"));
    }

    #[test]
    fn test_error_import_follows_guards() {
        let source = render_unit(&small_unit());
        assert!(source.contains("use modelbase::{BoundParam, Error, ParamKind"));

        let mut unguarded = small_unit();
        unguarded.decls.retain(|d| !matches!(d, Declaration::UniqueFinder(_)));
        let source = render_unit(&unguarded);
        assert!(source.contains("use modelbase::{BoundParam, ParamKind"));
    }

    #[test]
    fn test_finder_binds_with_marshal_kind() {
        let source = render_unit(&small_unit());
        assert!(source.contains(
            "let params = [BoundParam::new(\"val\", Value::from(id_value), ParamKind::Int)];"
        ));
        assert!(source.contains("executor.get_one(\"SELECT * FROM note WHERE `id` = :val\""));
    }

    #[test]
    fn test_copy_getter_returns_by_value() {
        let source = render_unit(&small_unit());
        assert!(source.contains("pub fn get_id(&self) -> Option<i64> {"));
    }

    #[test]
    fn test_methods_follow_declaration_order() {
        let source = render_unit(&small_unit());
        let getter = source.find("pub fn get_id").unwrap();
        let finder = source.find("pub fn find_by_id").unwrap();
        let fill = source.find("pub fn fill_model").unwrap();
        let save = source.find("pub fn save").unwrap();
        assert!(getter < finder && finder < fill && fill < save);
    }
}
