//! Codec bodies for structs: every field, in declaration order, untagged

use crate::container::{self, Operand};
use crate::error::{GenError, GenResult};
use crate::naming;
use crate::source::CodeWriter;
use crate::type_mapper::TypeMapper;
use wiregen_schema::{Definition, Kind};

/// Reject fields that hold the struct itself inline, directly or through
/// other structs
pub fn validate_fields(mapper: &TypeMapper<'_>, definition: &Definition) -> GenResult<()> {
    for field in &definition.fields {
        if mapper.nests_by_value(&field.ty, &definition.name) {
            return Err(GenError::SelfNestingStruct {
                field: field.name.clone(),
                ty: field.ty.to_string(),
            });
        }
    }
    Ok(())
}

fn expect_struct(mapper: &TypeMapper<'_>, definition: &Definition) -> GenResult<()> {
    if definition.kind != Kind::Struct {
        return Err(GenError::WrongKind {
            name: definition.name.clone(),
            kind: definition.kind.to_string(),
            expected: Kind::Struct.to_string(),
        });
    }
    validate_fields(mapper, definition)
}

/// Emit `fn encode_into` for a struct
pub fn emit_encode(
    mapper: &TypeMapper<'_>,
    definition: &Definition,
    out: &mut CodeWriter,
) -> GenResult<()> {
    expect_struct(mapper, definition)?;
    out.open(format!(
        "fn encode_into(&self, writer: &mut {}::BinaryWriter)",
        mapper.runtime()
    ));
    if definition.fields.is_empty() {
        out.line("let _ = writer;");
    }
    for field in &definition.fields {
        let operand = Operand::place(format!("self.{}", naming::field_name(&field.name)));
        container::encode_field(mapper, &field.ty, &operand, 0, out)?;
    }
    out.close();
    Ok(())
}

/// Emit `fn decode_from` for a struct.
///
/// Fields are read into `field0..fieldN` first and the value is built once
/// all of them succeeded.
pub fn emit_decode(
    mapper: &TypeMapper<'_>,
    definition: &Definition,
    out: &mut CodeWriter,
) -> GenResult<()> {
    expect_struct(mapper, definition)?;
    let runtime = mapper.runtime();
    out.open(format!(
        "fn decode_from(reader: &mut {runtime}::BinaryReader<'_>) -> {runtime}::DecodeResult<Self>"
    ));

    if definition.fields.is_empty() {
        out.line("let _ = reader;");
        out.line("Ok(Self {})");
        out.close();
        return Ok(());
    }

    for (index, field) in definition.fields.iter().enumerate() {
        container::decode_field(mapper, &field.ty, &format!("field{index}"), 0, out)?;
    }
    out.open("Ok(Self");
    for (index, field) in definition.fields.iter().enumerate() {
        out.line(format!("{}: field{index},", naming::field_name(&field.name)));
    }
    out.close_with("})");
    out.close();
    Ok(())
}
