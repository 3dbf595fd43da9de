//! `wiregen check` - schema validation and summary

use crate::generate::load_schema;
use anyhow::{Context, Result};
use std::path::Path;
use wiregen_codegen::GeneratorConfig;
use wiregen_schema::{Definition, Kind, Schema};

/// Run the check command
pub fn run(schema_path: &Path) -> Result<()> {
    println!("Checking schema: {}", schema_path.display());

    let schema = load_schema(schema_path)?;
    validate(&schema)?;

    for definition in schema.definitions() {
        println!("✓ {}", summarize(definition));
    }
    println!("\nSchema is valid! ({} definitions)", schema.len());

    Ok(())
}

/// Run the generator in memory so tag and type errors surface without output
pub fn validate(schema: &Schema) -> Result<()> {
    wiregen_codegen::generate(schema, &GeneratorConfig::default())
        .map(|_| ())
        .context("Schema does not generate")
}

/// One-line description of a definition
pub fn summarize(definition: &Definition) -> String {
    let noun = match definition.kind {
        Kind::Enum => "members",
        Kind::Struct | Kind::Message => "fields",
    };
    let mut line = format!(
        "{} {} ({} {noun})",
        definition.kind,
        definition.name,
        definition.fields.len()
    );

    let deprecated = definition.fields.iter().filter(|f| f.is_deprecated()).count();
    if deprecated > 0 {
        line.push_str(&format!(", {deprecated} deprecated"));
    }
    if let Some(opcode) = definition.opcode {
        line.push_str(&format!(", opcode {opcode:#X}"));
    }
    if definition.readonly {
        line.push_str(", readonly");
    }
    line
}
