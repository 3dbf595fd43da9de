//! Recursive field codecs, including arrays and maps at any nesting depth.
//!
//! Nested containers use temporaries suffixed with their depth (`e0`, `k1`,
//! `length2`, ...) so an inner loop never shadows the binding of an outer one.
//!
//! Arrays of `byte`, `float32` and `float64` take bulk writer paths. Only
//! `byte` arrays have a bulk reader; float arrays decode element by element.
//!
//! Decoded counts are checked against the unread input using the element's
//! minimum wire size, so a corrupt count fails before the loop starts. Empty
//! structs occupy no bytes and cannot be bounded that way: an array of them
//! decodes in time proportional to its count.

use crate::error::GenResult;
use crate::source::CodeWriter;
use crate::type_mapper::{self, TypeMapper};
use wiregen_schema::{Kind, ScalarType, TypeBase};

/// The value being encoded, as seen by generated code
#[derive(Debug, Clone)]
pub struct Operand {
    expr: String,
    /// `expr` is already a reference (a loop or `if let` binding)
    by_ref: bool,
}

impl Operand {
    /// A place expression such as `self.count`
    pub fn place(expr: impl Into<String>) -> Self {
        Self {
            expr: expr.into(),
            by_ref: false,
        }
    }

    /// A binding that holds `&T`
    pub fn binding(expr: impl Into<String>) -> Self {
        Self {
            expr: expr.into(),
            by_ref: true,
        }
    }

    /// The value itself; only valid for `Copy` types
    fn value(&self) -> String {
        if self.by_ref {
            format!("*{}", self.expr)
        } else {
            self.expr.clone()
        }
    }

    /// A shared reference to the value
    fn reference(&self) -> String {
        if self.by_ref {
            self.expr.clone()
        } else {
            format!("&{}", self.expr)
        }
    }

    /// Receiver for a method call or field access (auto-deref applies)
    fn receiver(&self) -> &str {
        &self.expr
    }
}

/// Emit statements writing `operand` of type `ty`
pub fn encode_field(
    mapper: &TypeMapper<'_>,
    ty: &TypeBase,
    operand: &Operand,
    depth: usize,
    out: &mut CodeWriter,
) -> GenResult<()> {
    match ty {
        TypeBase::Scalar(scalar) => {
            let method = type_mapper::write_method(*scalar);
            let argument = if type_mapper::writes_by_reference(*scalar) {
                operand.reference()
            } else {
                operand.value()
            };
            out.line(format!("writer.{method}({argument});"));
        }
        TypeBase::Array(element) => encode_array(mapper, element, operand, depth, out)?,
        TypeBase::Map(key, value) => encode_map(mapper, key, value, operand, depth, out)?,
        TypeBase::Defined(name) => {
            let definition = mapper.resolve(name)?;
            if definition.kind == Kind::Enum {
                out.line(format!("writer.write_u32({}.0);", operand.receiver()));
            } else {
                out.line(format!(
                    "{}::Record::encode_into({}, writer);",
                    mapper.runtime(),
                    operand.reference()
                ));
            }
        }
    }
    Ok(())
}

fn encode_array(
    mapper: &TypeMapper<'_>,
    element: &TypeBase,
    operand: &Operand,
    depth: usize,
    out: &mut CodeWriter,
) -> GenResult<()> {
    let bulk = match element {
        TypeBase::Scalar(ScalarType::Byte) => Some("write_bytes"),
        TypeBase::Scalar(ScalarType::Float32) => Some("write_f32_slice"),
        TypeBase::Scalar(ScalarType::Float64) => Some("write_f64_slice"),
        _ => None,
    };
    if let Some(method) = bulk {
        out.line(format!("writer.{method}({});", operand.reference()));
        return Ok(());
    }

    let item = format!("e{depth}");
    out.line(format!("writer.write_length({}.len());", operand.receiver()));
    out.open(format!("for {item} in {}", operand.reference()));
    encode_field(mapper, element, &Operand::binding(&item), depth + 1, out)?;
    out.close();
    Ok(())
}

fn encode_map(
    mapper: &TypeMapper<'_>,
    key: &TypeBase,
    value: &TypeBase,
    operand: &Operand,
    depth: usize,
    out: &mut CodeWriter,
) -> GenResult<()> {
    mapper.check_map_key(key)?;
    let k = format!("k{depth}");
    let v = format!("v{depth}");
    out.line(format!("writer.write_length({}.len());", operand.receiver()));
    out.open(format!("for ({k}, {v}) in {}", operand.reference()));
    encode_field(mapper, key, &Operand::binding(&k), depth + 1, out)?;
    encode_field(mapper, value, &Operand::binding(&v), depth + 1, out)?;
    out.close();
    Ok(())
}

/// Emit statements that read a value of type `ty` into a new local `binding`
pub fn decode_field(
    mapper: &TypeMapper<'_>,
    ty: &TypeBase,
    binding: &str,
    depth: usize,
    out: &mut CodeWriter,
) -> GenResult<()> {
    match ty {
        TypeBase::Scalar(scalar) => {
            let method = type_mapper::read_method(*scalar);
            out.line(format!("let {binding} = reader.{method}()?;"));
        }
        TypeBase::Array(element) => decode_array(mapper, element, binding, depth, out)?,
        TypeBase::Map(key, value) => decode_map(mapper, key, value, binding, depth, out)?,
        TypeBase::Defined(name) => {
            let definition = mapper.resolve(name)?;
            let target = mapper.target_name(ty)?;
            if definition.kind == Kind::Enum {
                out.line(format!("let {binding} = {target}(reader.read_u32()?);"));
            } else {
                out.line(format!(
                    "let {binding} = <{target} as {}::Record>::decode_from(reader)?;",
                    mapper.runtime()
                ));
            }
        }
    }
    Ok(())
}

fn decode_array(
    mapper: &TypeMapper<'_>,
    element: &TypeBase,
    binding: &str,
    depth: usize,
    out: &mut CodeWriter,
) -> GenResult<()> {
    if matches!(element, TypeBase::Scalar(ScalarType::Byte)) {
        out.line(format!("let {binding} = reader.read_bytes()?;"));
        return Ok(());
    }

    let element_type = mapper.target_name(element)?;
    let length = format!("length{depth}");
    let item = format!("e{depth}");
    out.line(format!(
        "let {length} = reader.read_count({})?;",
        mapper.min_wire_size(element)
    ));
    out.line(format!(
        "let mut {binding}: ::std::vec::Vec<{element_type}> = \
         ::std::vec::Vec::with_capacity(reader.bounded_capacity({length}));"
    ));
    out.open(format!("for _ in 0..{length}"));
    decode_field(mapper, element, &item, depth + 1, out)?;
    out.line(format!("{binding}.push({item});"));
    out.close();
    Ok(())
}

fn decode_map(
    mapper: &TypeMapper<'_>,
    key: &TypeBase,
    value: &TypeBase,
    binding: &str,
    depth: usize,
    out: &mut CodeWriter,
) -> GenResult<()> {
    mapper.check_map_key(key)?;
    let key_type = mapper.target_name(key)?;
    let value_type = mapper.target_name(value)?;
    let length = format!("length{depth}");
    let k = format!("k{depth}");
    let v = format!("v{depth}");
    out.line(format!(
        "let {length} = reader.read_count({})?;",
        mapper.min_wire_size(key) + mapper.min_wire_size(value)
    ));
    out.line(format!(
        "let mut {binding}: ::std::collections::HashMap<{key_type}, {value_type}> = \
         ::std::collections::HashMap::with_capacity(reader.bounded_capacity({length}));"
    ));
    out.open(format!("for _ in 0..{length}"));
    decode_field(mapper, key, &k, depth + 1, out)?;
    decode_field(mapper, value, &v, depth + 1, out)?;
    out.line(format!("{binding}.insert({k}, {v});"));
    out.close();
    Ok(())
}
