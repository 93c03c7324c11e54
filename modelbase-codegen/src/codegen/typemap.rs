//! Column-type mapping: raw type strings to semantic types and marshaling kinds

use crate::error::{CodegenError, Result};

/// Semantic value category a raw column type maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticType {
    Integer,
    Double,
    String,
    Boolean,
    Date,
    Bytes,
}

impl SemanticType {
    /// Name for error messages
    pub fn name(self) -> &'static str {
        match self {
            SemanticType::Integer => "integer",
            SemanticType::Double => "double",
            SemanticType::String => "string",
            SemanticType::Boolean => "boolean",
            SemanticType::Date => "date",
            SemanticType::Bytes => "bytes",
        }
    }

    /// Marshaling kind used when binding a value of this type.
    ///
    /// `None` only if a semantic type is ever added without extending the
    /// bind table; callers surface that as `UnsupportedMarshalType`.
    pub fn marshal_kind(self) -> Option<MarshalKind> {
        match self {
            SemanticType::Integer => Some(MarshalKind::Int),
            SemanticType::Double | SemanticType::String | SemanticType::Date => {
                Some(MarshalKind::Str)
            }
            SemanticType::Bytes => Some(MarshalKind::Lob),
            SemanticType::Boolean => Some(MarshalKind::Bool),
        }
    }

    /// Rust type of the generated backing field (inside `Option<…>`)
    pub fn rust_type(self) -> &'static str {
        match self {
            SemanticType::Integer => "i64",
            SemanticType::Double => "f64",
            SemanticType::String => "String",
            SemanticType::Boolean => "bool",
            SemanticType::Date => "chrono::NaiveDateTime",
            SemanticType::Bytes => "Vec<u8>",
        }
    }

    /// Whether the backing Rust type implements Copy.
    ///
    /// Decides getter shape (by value vs. by reference) and whether bind
    /// sites need a clone.
    pub fn is_copy(self) -> bool {
        !matches!(self, SemanticType::String | SemanticType::Bytes)
    }
}

/// Bind-parameter category, rendered into generated code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarshalKind {
    Int,
    Str,
    Bool,
    Lob,
}

impl MarshalKind {
    /// Path of the runtime kind in emitted code
    pub fn as_code(self) -> &'static str {
        match self {
            MarshalKind::Int => "ParamKind::Int",
            MarshalKind::Str => "ParamKind::Str",
            MarshalKind::Bool => "ParamKind::Bool",
            MarshalKind::Lob => "ParamKind::Lob",
        }
    }
}

/// Parsed raw column type: semantic category plus declared size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub semantic: SemanticType,
    /// Declared size, -1 when the raw type carries none. Carried through
    /// for length validation; generation does not consume it yet.
    pub size: i64,
}

/// Parse a raw column type of the form `<word>` or `<word>(<digits>)`.
///
/// The base word is matched case-insensitively against a fixed table; an
/// unknown word fails the whole run with `UnsupportedColumnType`.
pub fn parse_raw_type(raw: &str) -> Result<TypeDescriptor> {
    let trimmed = raw.trim();
    let (word, size) = match trimmed.split_once('(') {
        Some((word, rest)) => (word, parse_size(rest)),
        None => (trimmed, -1),
    };

    let semantic = semantic_for(&word.trim().to_ascii_lowercase())
        .ok_or_else(|| CodegenError::UnsupportedColumnType(raw.to_string()))?;

    Ok(TypeDescriptor { semantic, size })
}

/// Digits up to the closing paren, -1 for anything else
fn parse_size(rest: &str) -> i64 {
    let digits = rest.trim_end().trim_end_matches(')');
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        digits.parse().unwrap_or(-1)
    } else {
        -1
    }
}

fn semantic_for(base: &str) -> Option<SemanticType> {
    match base {
        "int" | "tinyint" | "mediumint" | "longint" => Some(SemanticType::Integer),
        "decimal" => Some(SemanticType::Double),
        "varchar" | "text" | "tinytext" | "mediumtext" | "longtext" => {
            Some(SemanticType::String)
        }
        "bit" => Some(SemanticType::Boolean),
        "date" | "datetime" => Some(SemanticType::Date),
        "blob" | "tinyblob" | "mediumblob" | "longblob" => Some(SemanticType::Bytes),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_family() {
        for raw in ["int", "INT", "tinyint", "mediumint", "longint", "INT(11)"] {
            assert_eq!(
                parse_raw_type(raw).unwrap().semantic,
                SemanticType::Integer,
                "raw type {raw}"
            );
        }
    }

    #[test]
    fn test_text_family() {
        for raw in ["varchar(255)", "text", "tinytext", "mediumtext", "longtext"] {
            assert_eq!(parse_raw_type(raw).unwrap().semantic, SemanticType::String);
        }
    }

    #[test]
    fn test_remaining_families() {
        assert_eq!(parse_raw_type("decimal").unwrap().semantic, SemanticType::Double);
        assert_eq!(parse_raw_type("bit").unwrap().semantic, SemanticType::Boolean);
        assert_eq!(parse_raw_type("date").unwrap().semantic, SemanticType::Date);
        assert_eq!(parse_raw_type("DATETIME").unwrap().semantic, SemanticType::Date);
        for raw in ["blob", "tinyblob", "mediumblob", "longblob"] {
            assert_eq!(parse_raw_type(raw).unwrap().semantic, SemanticType::Bytes);
        }
    }

    #[test]
    fn test_size_parsing() {
        assert_eq!(parse_raw_type("varchar(255)").unwrap().size, 255);
        assert_eq!(parse_raw_type("INT(11)").unwrap().size, 11);
        assert_eq!(parse_raw_type("text").unwrap().size, -1);
        assert_eq!(parse_raw_type("bit").unwrap().size, -1);
    }

    #[test]
    fn test_unknown_type_rejected() {
        let err = parse_raw_type("geometry").unwrap_err();
        assert!(matches!(
            err,
            CodegenError::UnsupportedColumnType(raw) if raw == "geometry"
        ));
    }

    #[test]
    fn test_marshal_kinds() {
        assert_eq!(SemanticType::Integer.marshal_kind(), Some(MarshalKind::Int));
        assert_eq!(SemanticType::Double.marshal_kind(), Some(MarshalKind::Str));
        assert_eq!(SemanticType::String.marshal_kind(), Some(MarshalKind::Str));
        assert_eq!(SemanticType::Date.marshal_kind(), Some(MarshalKind::Str));
        assert_eq!(SemanticType::Bytes.marshal_kind(), Some(MarshalKind::Lob));
        assert_eq!(SemanticType::Boolean.marshal_kind(), Some(MarshalKind::Bool));
    }

    #[test]
    fn test_rust_types() {
        assert_eq!(SemanticType::Integer.rust_type(), "i64");
        assert_eq!(SemanticType::Date.rust_type(), "chrono::NaiveDateTime");
        assert!(SemanticType::Date.is_copy());
        assert!(!SemanticType::Bytes.is_copy());
    }
}
