//! Codec bodies for messages.
//!
//! A message is framed as `[u32 length][(u8 tag, value)*][u8 0]`. Absent
//! fields are simply not written. Deprecated fields are never written but
//! are still read, so data produced before the deprecation keeps decoding.
//!
//! On an unknown tag the decoder cannot tell how long the value is, so it
//! jumps to the end of the frame and returns what it has so far.
//!
//! A field whose type leads back to its own message without a container in
//! between is stored as `Option<Box<T>>`; encode borrows through the box and
//! decode boxes the value.

use crate::container::{self, Operand};
use crate::error::{GenError, GenResult};
use crate::naming;
use crate::source::CodeWriter;
use crate::type_mapper::TypeMapper;
use std::collections::HashSet;
use wiregen_schema::{Definition, Kind};

/// Tag byte that terminates a message body
pub const TERMINATOR: u8 = 0;

/// Check every tag is within 1..=255 and unique
pub fn validate_tags(definition: &Definition) -> GenResult<()> {
    let mut seen = HashSet::new();
    for field in &definition.fields {
        let tag = field.constant_value;
        if tag == u32::from(TERMINATOR) || tag > u32::from(u8::MAX) {
            return Err(GenError::InvalidTag {
                field: field.name.clone(),
                tag,
            });
        }
        if !seen.insert(tag) {
            return Err(GenError::DuplicateTag {
                field: field.name.clone(),
                tag,
            });
        }
    }
    Ok(())
}

fn expect_message(definition: &Definition) -> GenResult<()> {
    if definition.kind != Kind::Message {
        return Err(GenError::WrongKind {
            name: definition.name.clone(),
            kind: definition.kind.to_string(),
            expected: Kind::Message.to_string(),
        });
    }
    validate_tags(definition)
}

/// Emit `fn encode_into` for a message
pub fn emit_encode(
    mapper: &TypeMapper<'_>,
    definition: &Definition,
    out: &mut CodeWriter,
) -> GenResult<()> {
    expect_message(definition)?;
    out.open(format!(
        "fn encode_into(&self, writer: &mut {}::BinaryWriter)",
        mapper.runtime()
    ));
    out.line("let position = writer.reserve_length();");
    out.line("let start = writer.len();");

    for field in definition.fields.iter().filter(|f| !f.is_deprecated()) {
        let ident = naming::field_name(&field.name);
        if mapper.boxes_field(definition, &field.ty) {
            out.open(format!("if let Some(value) = self.{ident}.as_deref()"));
        } else {
            out.open(format!("if let Some(value) = &self.{ident}"));
        }
        out.line(format!("writer.write_byte({});", field.constant_value));
        container::encode_field(mapper, &field.ty, &Operand::binding("value"), 0, out)?;
        out.close();
    }

    out.line(format!("writer.write_byte({TERMINATOR});"));
    out.line("let end = writer.len();");
    out.line("writer.fill_length(position, end - start);");
    out.close();
    Ok(())
}

/// Emit `fn decode_from` for a message
pub fn emit_decode(
    mapper: &TypeMapper<'_>,
    definition: &Definition,
    out: &mut CodeWriter,
) -> GenResult<()> {
    expect_message(definition)?;
    let runtime = mapper.runtime();
    out.open(format!(
        "fn decode_from(reader: &mut {runtime}::BinaryReader<'_>) -> {runtime}::DecodeResult<Self>"
    ));

    if definition.fields.is_empty() {
        out.line("let record = Self::default();");
        out.line("let end = reader.read_message_end()?;");
        out.open(format!("if reader.read_message_tag(end)? != {TERMINATOR}"));
        out.line("reader.skip_to(end)?;");
        out.close();
        out.line("Ok(record)");
        out.close();
        return Ok(());
    }

    out.line("let mut record = Self::default();");
    out.line("let end = reader.read_message_end()?;");
    out.open("loop");
    out.open("match reader.read_message_tag(end)?");
    out.line(format!("{TERMINATOR} => return Ok(record),"));

    for field in &definition.fields {
        out.open(format!("{} =>", field.constant_value));
        container::decode_field(mapper, &field.ty, "value", 0, out)?;
        let ident = naming::field_name(&field.name);
        if mapper.boxes_field(definition, &field.ty) {
            out.line(format!(
                "record.{ident} = Some(::std::boxed::Box::new(value));"
            ));
        } else {
            out.line(format!("record.{ident} = Some(value);"));
        }
        out.close();
    }

    out.open("_ =>");
    out.line("reader.skip_to(end)?;");
    out.line("return Ok(record);");
    out.close();

    out.close();
    out.close();
    out.close();
    Ok(())
}
