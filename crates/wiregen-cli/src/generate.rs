//! `wiregen generate` - schema file to Rust source

use crate::config::ProjectConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use wiregen_codegen::GeneratorConfig;
use wiregen_schema::Schema;

/// Run the generate command
pub fn run(schema_path: &Path, output: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = ProjectConfig::resolve(config_path)?;
    let schema = load_schema(schema_path)?;

    tracing::info!(
        schema = %schema_path.display(),
        definitions = schema.len(),
        "loaded schema"
    );

    let code = render(&schema, &config.generator)?;
    write_output(output, &code)?;

    tracing::info!(output = %output.display(), bytes = code.len(), "wrote generated source");
    println!(
        "✓ Generated {} definitions → {}",
        schema.len(),
        output.display()
    );

    Ok(())
}

/// Load a schema and reject references to undefined types up front
pub fn load_schema(path: &Path) -> Result<Schema> {
    let schema = Schema::from_path(path)
        .with_context(|| format!("Failed to load schema: {}", path.display()))?;

    let dangling = schema.dangling_references();
    if let Some(first) = dangling.first() {
        anyhow::bail!(
            "{} unresolved type reference(s); first: {}.{} refers to '{}'",
            dangling.len(),
            first.definition,
            first.field,
            first.target
        );
    }

    Ok(schema)
}

/// Generate source text for a loaded schema
pub fn render(schema: &Schema, config: &GeneratorConfig) -> Result<String> {
    wiregen_codegen::generate(schema, config).context("Code generation failed")
}

fn write_output(output: &Path, code: &str) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(output, code).with_context(|| format!("Failed to write {}", output.display()))
}
