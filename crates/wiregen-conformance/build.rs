//! Generates codecs for every schema under `schemas/` into `OUT_DIR`

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use wiregen_codegen::{GeneratorConfig, generate};
use wiregen_schema::Schema;

const SCHEMAS: &[&str] = &["showcase.json", "profile_v1.toml", "profile_v2.toml"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let config = GeneratorConfig::default();

    for file in SCHEMAS {
        let path = manifest_dir.join("schemas").join(file);
        println!("cargo:rerun-if-changed={}", path.display());

        let schema = Schema::from_path(&path)?;
        let code = generate(&schema, &config)?;
        fs::write(out_dir.join(output_name(&path)), code)?;
    }

    Ok(())
}

/// `profile_v1.toml` becomes `profile_v1.rs`
fn output_name(schema: &Path) -> PathBuf {
    schema.with_extension("rs").file_name().map(PathBuf::from).unwrap_or_default()
}
