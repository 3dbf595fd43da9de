//! Per-definition emission and whole-schema generation.
//!
//! Every definition becomes one Rust item plus its impls:
//!
//! - enum: an open `u32` newtype with one associated constant per member
//! - struct: a data shape with plain fields
//! - message: a data shape whose fields are all `Option`
//!
//! Structs and messages implement the runtime `Record` trait, which supplies
//! `encode`, `encode_into`, `decode`, `decode_from`, `decode_as` and
//! `decode_from_as`. They also implement `AsMut<Self>` so the shape itself is
//! a valid target for the generic decode entry points.

use crate::config::GeneratorConfig;
use crate::error::{GenError, GenResult};
use crate::message_codec;
use crate::naming;
use crate::source::CodeWriter;
use crate::struct_codec;
use crate::type_mapper::TypeMapper;
use std::collections::{HashMap, HashSet};
use wiregen_schema::{Definition, Field, Kind, ScalarType, Schema, TypeBase};

const HEADER: &str = "// @generated by wiregen. Do not edit by hand.";

/// Generate Rust source for every definition in `schema`
pub fn generate(schema: &Schema, config: &GeneratorConfig) -> GenResult<String> {
    tracing::debug!(
        definitions = schema.len(),
        namespace = ?schema.namespace,
        "generating codecs"
    );

    check_identifiers(
        schema
            .definitions()
            .map(|d| (d.name.as_str(), naming::type_name(&d.name))),
        &[],
    )?;

    let mapper = TypeMapper::new(schema, config.runtime());
    let mut body = CodeWriter::new();
    for (index, definition) in schema.definitions().enumerate() {
        if index > 0 {
            body.blank();
        }
        emit_definition(&mapper, definition, config, &mut body)
            .map_err(|e| e.in_definition(&definition.name))?;
    }

    Ok(wrap(schema, config, &body))
}

/// Generate Rust source for a single named definition
pub fn generate_definition(
    schema: &Schema,
    name: &str,
    config: &GeneratorConfig,
) -> GenResult<String> {
    let definition = schema
        .get(name)
        .ok_or_else(|| GenError::UnknownDefinition {
            name: name.to_string(),
        })?;

    let mapper = TypeMapper::new(schema, config.runtime());
    let mut out = CodeWriter::new();
    emit_definition(&mapper, definition, config, &mut out)
        .map_err(|e| e.in_definition(&definition.name))?;
    Ok(out.finish())
}

fn wrap(schema: &Schema, config: &GeneratorConfig, body: &CodeWriter) -> String {
    let mut out = CodeWriter::new();
    out.line(HEADER);
    out.blank();
    match &schema.namespace {
        Some(namespace) if config.wrap_namespace => {
            out.open(format!("pub mod {}", naming::module_name(namespace)));
            out.append(body);
            out.close();
        }
        _ => out.append(body),
    }
    out.finish()
}

/// Emit one definition: its type, constants, accessors and codec impls
pub fn emit_definition(
    mapper: &TypeMapper<'_>,
    definition: &Definition,
    config: &GeneratorConfig,
    out: &mut CodeWriter,
) -> GenResult<()> {
    tracing::debug!(
        definition = %definition.name,
        kind = %definition.kind,
        fields = definition.fields.len(),
        "emitting definition"
    );

    match definition.kind {
        Kind::Enum => emit_enum(definition, config, out),
        Kind::Struct | Kind::Message => emit_aggregate(mapper, definition, config, out),
    }
}

/// Reject two schema names that map to the same Rust identifier, or onto
/// one of the `reserved` identifiers the emitter itself generates
fn check_identifiers<'n>(
    names: impl IntoIterator<Item = (&'n str, String)>,
    reserved: &[&'n str],
) -> GenResult<()> {
    let mut seen: HashMap<String, &str> = reserved.iter().map(|r| (r.to_string(), *r)).collect();
    for (name, ident) in names {
        if let Some(first) = seen.get(&ident) {
            return Err(GenError::DuplicateIdentifier {
                ident,
                first: first.to_string(),
                second: name.to_string(),
            });
        }
        seen.insert(ident, name);
    }
    Ok(())
}

/// Doc comment for a definition, or for a field when `field` is given.
/// Deprecation is rendered as a trailing doc paragraph.
fn emit_docs(
    doc: Option<&str>,
    field: Option<&Field>,
    config: &GeneratorConfig,
    out: &mut CodeWriter,
) {
    if !config.emit_docs {
        return;
    }
    if let Some(doc) = doc {
        out.doc(doc);
    }
    if let Some(deprecation) = field.and_then(|f| f.deprecated.as_ref()) {
        if doc.is_some() {
            out.line("///");
        }
        match &deprecation.reason {
            Some(reason) => out.doc(&format!("Deprecated: {reason}")),
            None => out.doc("Deprecated."),
        }
    }
}

// ============================================================================
// Enums
// ============================================================================

fn emit_enum(
    definition: &Definition,
    config: &GeneratorConfig,
    out: &mut CodeWriter,
) -> GenResult<()> {
    for member in &definition.fields {
        if member.ty != TypeBase::Scalar(ScalarType::UInt32) {
            return Err(GenError::InvalidEnumMember {
                member: member.name.clone(),
                ty: member.ty.to_string(),
            });
        }
    }

    let reserved: &[&str] = if definition.opcode.is_some() {
        &["OPCODE"]
    } else {
        &[]
    };
    check_identifiers(
        definition
            .fields
            .iter()
            .map(|m| (m.name.as_str(), naming::constant_name(&m.name))),
        reserved,
    )?;

    let name = naming::type_name(&definition.name);
    emit_docs(definition.doc.as_deref(), None, config, out);
    out.line("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]");
    out.line(format!("pub struct {name}(pub u32);"));
    out.blank();

    out.open(format!("impl {name}"));
    if let Some(opcode) = definition.opcode {
        out.line(format!("pub const OPCODE: u32 = {opcode:#X};"));
        out.blank();
    }
    for member in &definition.fields {
        emit_docs(member.doc.as_deref(), Some(member), config, out);
        out.line(format!(
            "pub const {}: Self = Self({});",
            naming::constant_name(&member.name),
            member.constant_value
        ));
    }
    if !definition.fields.is_empty() {
        out.blank();
    }
    out.line("/// Schema name of the member with this value, if any");
    out.open("pub fn name(self) -> ::core::option::Option<&'static str>");
    out.open("match self.0");
    let mut seen = HashSet::new();
    for member in &definition.fields {
        if seen.insert(member.constant_value) {
            out.line(format!(
                "{} => ::core::option::Option::Some({:?}),",
                member.constant_value, member.name
            ));
        }
    }
    out.line("_ => ::core::option::Option::None,");
    out.close();
    out.close();
    out.close();
    out.blank();

    out.open(format!("impl ::core::convert::From<u32> for {name}"));
    out.open("fn from(value: u32) -> Self");
    out.line("Self(value)");
    out.close();
    out.close();
    out.blank();

    out.open(format!("impl ::core::convert::From<{name}> for u32"));
    out.open(format!("fn from(value: {name}) -> Self"));
    out.line("value.0");
    out.close();
    out.close();
    Ok(())
}

// ============================================================================
// Structs and messages
// ============================================================================

fn emit_aggregate(
    mapper: &TypeMapper<'_>,
    definition: &Definition,
    config: &GeneratorConfig,
    out: &mut CodeWriter,
) -> GenResult<()> {
    match definition.kind {
        Kind::Message => message_codec::validate_tags(definition)?,
        Kind::Struct => struct_codec::validate_fields(mapper, definition)?,
        Kind::Enum => {}
    }

    let name = naming::type_name(&definition.name);
    let visibility = if definition.readonly { "" } else { "pub " };
    let fields = definition
        .fields
        .iter()
        .map(|field| {
            Ok(ShapeField {
                field,
                ident: naming::field_name(&field.name),
                target: mapper.target_name(&field.ty)?,
                boxed: mapper.boxes_field(definition, &field.ty),
            })
        })
        .collect::<GenResult<Vec<_>>>()?;

    // readonly shapes get a `new` constructor next to the getters
    let reserved: &[&str] = if definition.readonly { &["new"] } else { &[] };
    check_identifiers(
        fields.iter().map(|f| (f.field.name.as_str(), f.ident.clone())),
        reserved,
    )?;

    emit_docs(definition.doc.as_deref(), None, config, out);
    out.line("#[derive(Debug, Clone, PartialEq, Default)]");
    if fields.is_empty() {
        out.line(format!("pub struct {name} {{}}"));
    } else {
        out.open(format!("pub struct {name}"));
        for shape_field in &fields {
            let field = shape_field.field;
            emit_docs(field.doc.as_deref(), Some(field), config, out);
            out.line(format!(
                "{visibility}{}: {},",
                shape_field.ident,
                shape_field.declared_type(definition.kind)
            ));
        }
        out.close();
    }

    let has_inherent = definition.opcode.is_some() || (definition.readonly && !fields.is_empty());
    if has_inherent {
        out.blank();
        out.open(format!("impl {name}"));
        if let Some(opcode) = definition.opcode {
            out.line(format!("pub const OPCODE: u32 = {opcode:#X};"));
        }
        if definition.readonly && !fields.is_empty() {
            if definition.opcode.is_some() {
                out.blank();
            }
            emit_readonly_accessors(definition.kind, &fields, out);
        }
        out.close();
    }

    out.blank();
    out.open(format!("impl ::core::convert::AsMut<{name}> for {name}"));
    out.open(format!("fn as_mut(&mut self) -> &mut {name}"));
    out.line("self");
    out.close();
    out.close();

    out.blank();
    out.open(format!("impl {}::Record for {name}", mapper.runtime()));
    match definition.kind {
        Kind::Struct => {
            struct_codec::emit_encode(mapper, definition, out)?;
            out.blank();
            struct_codec::emit_decode(mapper, definition, out)?;
        }
        Kind::Message => {
            message_codec::emit_encode(mapper, definition, out)?;
            out.blank();
            message_codec::emit_decode(mapper, definition, out)?;
        }
        Kind::Enum => {
            return Err(GenError::WrongKind {
                name: definition.name.clone(),
                kind: Kind::Enum.to_string(),
                expected: "struct or message".to_string(),
            });
        }
    }
    out.close();
    Ok(())
}

struct ShapeField<'a> {
    field: &'a Field,
    ident: String,
    target: String,
    /// Message field whose type leads back to the message
    boxed: bool,
}

impl ShapeField<'_> {
    /// Plain for struct fields, `Option` for message fields
    fn declared_type(&self, kind: Kind) -> String {
        match kind {
            Kind::Message if self.boxed => format!(
                "::core::option::Option<::std::boxed::Box<{}>>",
                self.target
            ),
            Kind::Message => format!("::core::option::Option<{}>", self.target),
            _ => self.target.clone(),
        }
    }
}

/// `new` taking every field, plus one getter per field
fn emit_readonly_accessors(kind: Kind, fields: &[ShapeField<'_>], out: &mut CodeWriter) {
    let params = fields
        .iter()
        .map(|f| format!("{}: {}", f.ident, f.declared_type(kind)))
        .collect::<Vec<_>>()
        .join(", ");
    let idents = fields
        .iter()
        .map(|f| f.ident.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    if fields.len() > 7 {
        out.line("#[allow(clippy::too_many_arguments)]");
    }
    out.open(format!("pub fn new({params}) -> Self"));
    out.line(format!("Self {{ {idents} }}"));
    out.close();

    for f in fields {
        out.blank();
        let ident = &f.ident;
        if kind == Kind::Message {
            out.open(format!(
                "pub fn {ident}(&self) -> ::core::option::Option<&{}>",
                f.target
            ));
            if f.boxed {
                out.line(format!("self.{ident}.as_deref()"));
            } else {
                out.line(format!("self.{ident}.as_ref()"));
            }
        } else {
            out.open(format!("pub fn {ident}(&self) -> &{}", f.target));
            out.line(format!("&self.{ident}"));
        }
        out.close();
    }
}
