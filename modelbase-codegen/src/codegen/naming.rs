//! Naming utilities for code generation

use heck::{ToPascalCase, ToSnakeCase};

/// Generated type name for a table, e.g. "contact" -> "ContactBase"
pub fn to_type_name(table_name: &str) -> String {
    format!("{}Base", table_name.to_pascal_case())
}

/// Default artifact file name for a table, e.g. "contact" -> "contact_base.rs"
pub fn to_artifact_name(table_name: &str) -> String {
    format!("{}_base.rs", table_name.to_snake_case())
}

/// Backing-field name for a column
pub fn to_field_name(column_name: &str) -> String {
    escape_field_name(column_name)
}

/// Getter name, e.g. "firstName" -> "get_first_name"
pub fn getter_name(column_name: &str) -> String {
    format!("get_{}", column_name.to_snake_case())
}

/// Setter name
pub fn setter_name(column_name: &str) -> String {
    format!("set_{}", column_name.to_snake_case())
}

/// Setter/finder parameter name, e.g. "name" -> "name_value"
pub fn param_name(column_name: &str) -> String {
    format!("{}_value", column_name.to_snake_case())
}

/// Unique-lookup finder name for a primary-key column
pub fn unique_finder_name(column_name: &str) -> String {
    format!("find_by_{}", column_name.to_snake_case())
}

/// Multi-lookup finder name for a non-key column
pub fn multi_finder_name(column_name: &str) -> String {
    format!("find_all_by_{}", column_name.to_snake_case())
}

/// Check if a name is a Rust reserved keyword
pub fn is_rust_keyword(name: &str) -> bool {
    matches!(
        name,
        "as" | "async"
            | "await"
            | "break"
            | "const"
            | "continue"
            | "crate"
            | "dyn"
            | "else"
            | "enum"
            | "extern"
            | "false"
            | "fn"
            | "for"
            | "if"
            | "impl"
            | "in"
            | "let"
            | "loop"
            | "match"
            | "mod"
            | "move"
            | "mut"
            | "pub"
            | "ref"
            | "return"
            | "self"
            | "Self"
            | "static"
            | "struct"
            | "super"
            | "trait"
            | "true"
            | "type"
            | "unsafe"
            | "use"
            | "where"
            | "while"
            | "abstract"
            | "become"
            | "box"
            | "do"
            | "final"
            | "macro"
            | "override"
            | "priv"
            | "try"
            | "typeof"
            | "unsized"
            | "virtual"
            | "yield"
    )
}

/// Escape a field name if it's a Rust keyword
pub fn escape_field_name(name: &str) -> String {
    let snake = name.to_snake_case();
    if is_rust_keyword(&snake) {
        format!("r#{}", snake)
    } else {
        snake
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_type_name() {
        assert_eq!(to_type_name("contact"), "ContactBase");
        assert_eq!(to_type_name("user_settings"), "UserSettingsBase");
    }

    #[test]
    fn test_to_artifact_name() {
        assert_eq!(to_artifact_name("contact"), "contact_base.rs");
        assert_eq!(to_artifact_name("OrderItems"), "order_items_base.rs");
    }

    #[test]
    fn test_accessor_names() {
        assert_eq!(getter_name("email"), "get_email");
        assert_eq!(setter_name("firstName"), "set_first_name");
        assert_eq!(param_name("email"), "email_value");
    }

    #[test]
    fn test_finder_names() {
        assert_eq!(unique_finder_name("id"), "find_by_id");
        assert_eq!(multi_finder_name("email"), "find_all_by_email");
    }

    #[test]
    fn test_escape_field_name() {
        assert_eq!(escape_field_name("type"), "r#type");
        assert_eq!(escape_field_name("name"), "name");
    }
}
