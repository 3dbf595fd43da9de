//! Mapping from schema types to Rust type names and primitive codec calls

use crate::error::{GenError, GenResult};
use crate::naming;
use std::collections::HashSet;
use wiregen_schema::{Definition, Kind, ScalarType, Schema, TypeBase};

/// Bytes taken by a message with no fields: length prefix plus terminator
const EMPTY_MESSAGE_SIZE: usize = 5;

/// Bytes taken by a `u32` count or enum value
const U32_SIZE: usize = 4;

/// Resolves schema types against one schema for one runtime path
#[derive(Debug, Clone, Copy)]
pub struct TypeMapper<'a> {
    schema: &'a Schema,
    runtime: &'a str,
}

impl<'a> TypeMapper<'a> {
    /// `runtime` is the path generated code uses to reach the runtime crate
    pub fn new(schema: &'a Schema, runtime: &'a str) -> Self {
        Self { schema, runtime }
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    pub fn runtime(&self) -> &'a str {
        self.runtime
    }

    /// Look up the definition a defined type refers to
    pub fn resolve(&self, name: &str) -> GenResult<&'a Definition> {
        self.schema
            .get(name)
            .ok_or_else(|| GenError::UnresolvedType {
                name: name.to_string(),
            })
    }

    /// Rust type name for a field of type `ty`.
    ///
    /// Aggregates map to their data shape, enums to their newtype.
    pub fn target_name(&self, ty: &TypeBase) -> GenResult<String> {
        match ty {
            TypeBase::Scalar(scalar) => Ok(self.scalar_name(*scalar)),
            TypeBase::Array(element) => {
                Ok(format!("::std::vec::Vec<{}>", self.target_name(element)?))
            }
            TypeBase::Map(key, value) => Ok(format!(
                "::std::collections::HashMap<{}, {}>",
                self.target_name(key)?,
                self.target_name(value)?
            )),
            TypeBase::Defined(name) => {
                let definition = self.resolve(name)?;
                Ok(naming::type_name(&definition.name))
            }
        }
    }

    /// Rust type name for a scalar
    pub fn scalar_name(&self, scalar: ScalarType) -> String {
        match scalar {
            ScalarType::Bool => "bool".to_string(),
            ScalarType::Byte => "u8".to_string(),
            ScalarType::UInt16 => "u16".to_string(),
            ScalarType::Int16 => "i16".to_string(),
            ScalarType::UInt32 => "u32".to_string(),
            ScalarType::Int32 => "i32".to_string(),
            ScalarType::UInt64 => "u64".to_string(),
            ScalarType::Int64 => "i64".to_string(),
            ScalarType::Float32 => "f32".to_string(),
            ScalarType::Float64 => "f64".to_string(),
            ScalarType::String => "::std::string::String".to_string(),
            ScalarType::Guid => format!("{}::Guid", self.runtime),
            ScalarType::Date => format!("{}::Date", self.runtime),
        }
    }

    /// Whether a message field of type `ty` has to be stored as
    /// `Option<Box<T>>`.
    ///
    /// That is the case when the field's type leads back to `owner` through
    /// aggregate fields alone. A `Vec` or `HashMap` on the way already
    /// provides the indirection.
    pub fn boxes_field(&self, owner: &Definition, ty: &TypeBase) -> bool {
        owner.kind == Kind::Message && self.leads_to(ty, &owner.name, true)
    }

    /// Whether a value of type `ty` holds a `target` inline, following only
    /// struct fields. A struct for which this holds has no finite value.
    pub fn nests_by_value(&self, ty: &TypeBase, target: &str) -> bool {
        self.leads_to(ty, target, false)
    }

    fn leads_to(&self, ty: &TypeBase, target: &str, through_messages: bool) -> bool {
        let TypeBase::Defined(start) = ty else {
            return false;
        };
        let mut visited = HashSet::new();
        let mut pending = vec![start.as_str()];
        while let Some(name) = pending.pop() {
            if name == target {
                return true;
            }
            if !visited.insert(name) {
                continue;
            }
            let Some(definition) = self.schema.get(name) else {
                continue;
            };
            let follow = match definition.kind {
                Kind::Struct => true,
                Kind::Message => through_messages,
                Kind::Enum => false,
            };
            if follow {
                pending.extend(definition.fields.iter().filter_map(|field| match &field.ty {
                    TypeBase::Defined(next) => Some(next.as_str()),
                    _ => None,
                }));
            }
        }
        false
    }

    /// Fewest bytes any value of type `ty` occupies on the wire.
    ///
    /// Zero only for structs without (non-empty) fields.
    pub fn min_wire_size(&self, ty: &TypeBase) -> usize {
        self.min_wire_size_within(ty, &mut HashSet::new())
    }

    fn min_wire_size_within(&self, ty: &TypeBase, visiting: &mut HashSet<&'a str>) -> usize {
        match ty {
            TypeBase::Scalar(scalar) => scalar_wire_size(*scalar),
            TypeBase::Array(_) | TypeBase::Map(..) => U32_SIZE,
            TypeBase::Defined(name) => {
                let Some(definition) = self.schema.get(name) else {
                    return 0;
                };
                match definition.kind {
                    Kind::Enum => U32_SIZE,
                    Kind::Message => EMPTY_MESSAGE_SIZE,
                    Kind::Struct => {
                        // self-nesting structs are rejected before codegen
                        if !visiting.insert(definition.name.as_str()) {
                            return 0;
                        }
                        let size = definition
                            .fields
                            .iter()
                            .map(|field| self.min_wire_size_within(&field.ty, visiting))
                            .sum();
                        visiting.remove(definition.name.as_str());
                        size
                    }
                }
            }
        }
    }

    /// Check that `ty` can key a `HashMap`: it must be `Eq + Hash`
    pub fn check_map_key(&self, ty: &TypeBase) -> GenResult<()> {
        let hashable = match ty {
            TypeBase::Scalar(ScalarType::Float32 | ScalarType::Float64) => false,
            TypeBase::Scalar(_) => true,
            TypeBase::Defined(name) => self.resolve(name)?.kind == Kind::Enum,
            TypeBase::Array(_) | TypeBase::Map(..) => false,
        };
        if hashable {
            Ok(())
        } else {
            Err(GenError::UnsupportedMapKey { ty: ty.to_string() })
        }
    }
}

/// Reader method for a scalar
pub fn read_method(scalar: ScalarType) -> &'static str {
    match scalar {
        ScalarType::Bool => "read_bool",
        ScalarType::Byte => "read_byte",
        ScalarType::UInt16 => "read_u16",
        ScalarType::Int16 => "read_i16",
        ScalarType::UInt32 => "read_u32",
        ScalarType::Int32 => "read_i32",
        ScalarType::UInt64 => "read_u64",
        ScalarType::Int64 => "read_i64",
        ScalarType::Float32 => "read_f32",
        ScalarType::Float64 => "read_f64",
        ScalarType::String => "read_string",
        ScalarType::Guid => "read_guid",
        ScalarType::Date => "read_date",
    }
}

/// Writer method for a scalar
pub fn write_method(scalar: ScalarType) -> &'static str {
    match scalar {
        ScalarType::Bool => "write_bool",
        ScalarType::Byte => "write_byte",
        ScalarType::UInt16 => "write_u16",
        ScalarType::Int16 => "write_i16",
        ScalarType::UInt32 => "write_u32",
        ScalarType::Int32 => "write_i32",
        ScalarType::UInt64 => "write_u64",
        ScalarType::Int64 => "write_i64",
        ScalarType::Float32 => "write_f32",
        ScalarType::Float64 => "write_f64",
        ScalarType::String => "write_string",
        ScalarType::Guid => "write_guid",
        ScalarType::Date => "write_date",
    }
}

/// Encoded size of a scalar; strings count only their length prefix
pub fn scalar_wire_size(scalar: ScalarType) -> usize {
    match scalar {
        ScalarType::Bool | ScalarType::Byte => 1,
        ScalarType::UInt16 | ScalarType::Int16 => 2,
        ScalarType::UInt32 | ScalarType::Int32 | ScalarType::Float32 => 4,
        ScalarType::UInt64 | ScalarType::Int64 | ScalarType::Float64 | ScalarType::Date => 8,
        ScalarType::String => U32_SIZE,
        ScalarType::Guid => 16,
    }
}

/// Whether the writer takes the scalar by reference rather than by value
pub fn writes_by_reference(scalar: ScalarType) -> bool {
    matches!(scalar, ScalarType::String | ScalarType::Guid)
}
