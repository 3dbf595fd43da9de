//! Field types: scalars, arrays, maps and references to defined types
//!
//! Types are written in schema files as short expressions:
//!
//! | Expression | Type |
//! |------------|------|
//! | `int32` | [`ScalarType::Int32`] |
//! | `string[]` | array of strings |
//! | `byte[][]` | array of byte arrays |
//! | `map[string, Point]` | map from string to the `Point` definition |
//! | `Point` | reference to a defined type |

use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scalar kinds with a fixed wire encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Bool,
    Byte,
    UInt16,
    Int16,
    UInt32,
    Int32,
    UInt64,
    Int64,
    Float32,
    Float64,
    /// Length-prefixed UTF-8 text
    String,
    /// 16-byte identifier
    Guid,
    /// 64-bit timestamp
    Date,
}

impl ScalarType {
    /// Every scalar kind, in declaration order
    pub const ALL: [ScalarType; 13] = [
        ScalarType::Bool,
        ScalarType::Byte,
        ScalarType::UInt16,
        ScalarType::Int16,
        ScalarType::UInt32,
        ScalarType::Int32,
        ScalarType::UInt64,
        ScalarType::Int64,
        ScalarType::Float32,
        ScalarType::Float64,
        ScalarType::String,
        ScalarType::Guid,
        ScalarType::Date,
    ];

    /// Look up a scalar by its schema keyword.
    ///
    /// `uint8` is accepted as an alias for `byte`.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let scalar = match keyword {
            "bool" => ScalarType::Bool,
            "byte" | "uint8" => ScalarType::Byte,
            "uint16" => ScalarType::UInt16,
            "int16" => ScalarType::Int16,
            "uint32" => ScalarType::UInt32,
            "int32" => ScalarType::Int32,
            "uint64" => ScalarType::UInt64,
            "int64" => ScalarType::Int64,
            "float32" => ScalarType::Float32,
            "float64" => ScalarType::Float64,
            "string" => ScalarType::String,
            "guid" => ScalarType::Guid,
            "date" => ScalarType::Date,
            _ => return None,
        };
        Some(scalar)
    }

    /// The canonical schema keyword
    pub fn keyword(self) -> &'static str {
        match self {
            ScalarType::Bool => "bool",
            ScalarType::Byte => "byte",
            ScalarType::UInt16 => "uint16",
            ScalarType::Int16 => "int16",
            ScalarType::UInt32 => "uint32",
            ScalarType::Int32 => "int32",
            ScalarType::UInt64 => "uint64",
            ScalarType::Int64 => "int64",
            ScalarType::Float32 => "float32",
            ScalarType::Float64 => "float64",
            ScalarType::String => "string",
            ScalarType::Guid => "guid",
            ScalarType::Date => "date",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// The type of a field.
///
/// Byte, float32 and float64 arrays are ordinary [`TypeBase::Array`] values;
/// generators recognize them as bulk-transfer special cases.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeBase {
    Scalar(ScalarType),
    Array(Box<TypeBase>),
    Map(Box<TypeBase>, Box<TypeBase>),
    /// Reference to an enum, struct or message by name
    Defined(String),
}

impl TypeBase {
    /// Build an array type
    pub fn array(element: TypeBase) -> Self {
        TypeBase::Array(Box::new(element))
    }

    /// Build a map type
    pub fn map(key: TypeBase, value: TypeBase) -> Self {
        TypeBase::Map(Box::new(key), Box::new(value))
    }

    /// Build a reference to a defined type
    pub fn defined(name: impl Into<String>) -> Self {
        TypeBase::Defined(name.into())
    }

    /// Returns the scalar element kind when this is an array of scalars
    pub fn array_scalar(&self) -> Option<ScalarType> {
        match self {
            TypeBase::Array(element) => match element.as_ref() {
                TypeBase::Scalar(scalar) => Some(*scalar),
                _ => None,
            },
            _ => None,
        }
    }

    /// Visit every defined-type name referenced by this type, depth first
    pub fn defined_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_defined_names(&mut names);
        names
    }

    fn collect_defined_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            TypeBase::Scalar(_) => {}
            TypeBase::Array(element) => element.collect_defined_names(names),
            TypeBase::Map(key, value) => {
                key.collect_defined_names(names);
                value.collect_defined_names(names);
            }
            TypeBase::Defined(name) => names.push(name),
        }
    }
}

impl fmt::Display for TypeBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeBase::Scalar(scalar) => write!(f, "{scalar}"),
            TypeBase::Array(element) => write!(f, "{element}[]"),
            TypeBase::Map(key, value) => write!(f, "map[{key}, {value}]"),
            TypeBase::Defined(name) => f.write_str(name),
        }
    }
}

impl FromStr for TypeBase {
    type Err = SchemaError;

    fn from_str(expr: &str) -> Result<Self, Self::Err> {
        parse_type(expr.trim(), expr)
    }
}

impl TryFrom<String> for TypeBase {
    type Error = SchemaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeBase> for String {
    fn from(value: TypeBase) -> Self {
        value.to_string()
    }
}

fn invalid(original: &str, reason: impl Into<String>) -> SchemaError {
    SchemaError::InvalidType {
        expr: original.to_string(),
        reason: reason.into(),
    }
}

fn parse_type(expr: &str, original: &str) -> Result<TypeBase, SchemaError> {
    if expr.is_empty() {
        return Err(invalid(original, "empty type"));
    }

    if let Some(element) = expr.strip_suffix("[]") {
        return Ok(TypeBase::array(parse_type(element.trim_end(), original)?));
    }

    if let Some(rest) = expr.strip_prefix("map[") {
        let inner = rest
            .strip_suffix(']')
            .ok_or_else(|| invalid(original, "missing `]` after map arguments"))?;
        let (key, value) = split_map_arguments(inner)
            .ok_or_else(|| invalid(original, "map needs exactly two type arguments"))?;
        return Ok(TypeBase::map(
            parse_type(key.trim(), original)?,
            parse_type(value.trim(), original)?,
        ));
    }

    if let Some(scalar) = ScalarType::from_keyword(expr) {
        return Ok(TypeBase::Scalar(scalar));
    }

    if is_identifier(expr) {
        Ok(TypeBase::defined(expr))
    } else {
        Err(invalid(original, format!("`{expr}` is not a type name")))
    }
}

/// Split `K, V` at the single top-level comma
fn split_map_arguments(inner: &str) -> Option<(&str, &str)> {
    let mut depth = 0usize;
    let mut split_at = None;

    for (index, c) in inner.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.checked_sub(1)?,
            ',' if depth == 0 => {
                if split_at.is_some() {
                    return None;
                }
                split_at = Some(index);
            }
            _ => {}
        }
    }

    let index = split_at?;
    Some((&inner[..index], &inner[index + 1..]))
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
